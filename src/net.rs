//! network interface statistics.
//!
//! this file provides tools to interact with `/proc/net/dev`.

use {
    crate::{counter::Counters, source::StatsSource},
    std::{
        io::{self, BufRead, BufReader},
        num::ParseIntError,
        str::FromStr,
    },
};

#[cfg(test)]
mod tests;

/// a row of the `/proc/net/dev` table.
///
/// the table begins with two header lines, followed by one line per interface: its name, a
/// colon, eight receive columns, and eight transmit columns.
#[derive(Debug, Eq, PartialEq)]
pub struct Interface {
    pub name: String,
    /// bytes received since boot.
    pub received: u64,
    /// bytes transmitted since boot.
    pub transmitted: u64,
}

#[derive(Debug, Eq, PartialEq, thiserror::Error)]
pub enum InterfaceParseError {
    #[error("interface row has no name separator")]
    MissingSeparator,
    #[error("expected 16 counters, found {found}")]
    Columns { found: usize },
    #[error("invalid counter: {0}")]
    Counter(#[source] ParseIntError),
}

#[derive(Debug, thiserror::Error)]
pub enum NetReadError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Interface(#[from] InterfaceParseError),
}

/// reads the cumulative byte counters, summed across every interface.
pub(crate) fn read(stats: &impl StatsSource) -> Result<Counters, NetReadError> {
    const HEADER_LINES: usize = 2;

    let reader = stats.net_dev()?;
    let mut counters = Counters::default();

    for line in BufReader::new(reader).lines().skip(HEADER_LINES) {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let Interface {
            name: _,
            received,
            transmitted,
        } = line.parse()?;
        counters.sent = counters.sent.saturating_add(transmitted);
        counters.received = counters.received.saturating_add(received);
    }

    Ok(counters)
}

// === impl Interface ===

impl FromStr for Interface {
    type Err = InterfaceParseError;
    fn from_str(row: &str) -> Result<Self, Self::Err> {
        const RECEIVED: usize = 0;
        const TRANSMITTED: usize = 8;

        let (name, counters) = row
            .split_once(':')
            .ok_or(InterfaceParseError::MissingSeparator)?;

        let counters = counters
            .split_whitespace()
            .map(str::parse::<u64>)
            .collect::<Result<Vec<_>, _>>()
            .map_err(InterfaceParseError::Counter)?;

        if counters.len() != 16 {
            return Err(InterfaceParseError::Columns {
                found: counters.len(),
            });
        }

        Ok(Self {
            name: name.trim().to_owned(),
            received: counters[RECEIVED],
            transmitted: counters[TRANSMITTED],
        })
    }
}
