//! reading the record log back, for charting.

use {
    crate::units::{Quantity, QuantityParseError},
    std::{
        io::{self, BufRead},
        num::ParseFloatError,
        str::FromStr,
    },
    time::{PrimitiveDateTime, macros::format_description},
};

#[cfg(test)]
mod tests;

/// one record, reduced to the values that are charted.
#[derive(Clone, Debug, PartialEq)]
pub struct Point {
    pub time: PrimitiveDateTime,
    /// mean cpu utilization, as a percentage.
    pub total: f64,
    /// kilobytes sent during the cycle.
    pub sent: f64,
    /// kilobytes received during the cycle.
    pub received: f64,
}

/// every point in a log, oldest first.
#[derive(Debug, Default)]
pub struct History {
    pub points: Vec<Point>,
    /// how many lines could not be parsed.
    pub skipped: usize,
}

#[derive(Debug, thiserror::Error)]
pub enum PointParseError {
    #[error("missing timestamp")]
    MissingTimestamp,
    #[error("invalid timestamp: {0}")]
    Timestamp(#[from] time::error::Parse),
    #[error("missing value for {0}")]
    Missing(&'static str),
    #[error("invalid percentage {0:?}")]
    Percent(String),
    #[error("invalid percentage: {0}")]
    PercentValue(#[from] ParseFloatError),
    #[error(transparent)]
    Quantity(#[from] QuantityParseError),
}

/// reads a record log. lines that cannot be parsed are counted and skipped.
pub fn read(reader: impl BufRead) -> io::Result<History> {
    let mut history = History::default();

    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match line.parse::<Point>() {
            Ok(point) => history.points.push(point),
            Err(error) => {
                log::warn!("skipping line {:?}: {error}", line);
                history.skipped += 1;
            }
        }
    }

    Ok(history)
}

// === impl Point ===

impl FromStr for Point {
    type Err = PointParseError;
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let tokens = line.split_whitespace().collect::<Vec<_>>();
        let [date, time, ..] = tokens.as_slice() else {
            return Err(PointParseError::MissingTimestamp);
        };

        let time = PrimitiveDateTime::parse(
            &format!("{date} {time}"),
            format_description!("[year]-[month]-[day] [hour]:[minute]:[second],[subsecond digits:3]"),
        )?;

        // values are found by their labels, so any number of cores may precede them.
        let value = |label: &'static str| {
            tokens
                .iter()
                .position(|token| *token == label)
                .and_then(|i| tokens.get(i + 1))
                .copied()
                .ok_or(PointParseError::Missing(label))
        };

        let total = value("TOTAL:")?;
        let total = total
            .strip_suffix('%')
            .ok_or_else(|| PointParseError::Percent(total.to_owned()))?
            .parse::<f64>()?;
        let sent = value("SEND:")?.parse::<Quantity>()?.kilobytes();
        let received = value("RECV:")?.parse::<Quantity>()?.kilobytes();

        Ok(Self {
            time,
            total,
            sent,
            received,
        })
    }
}

// === impl History ===

impl History {
    /// mean cpu utilization, against seconds since the first point.
    pub fn cpu(&self) -> Vec<(f64, f64)> {
        self.series(|point| point.total)
    }

    /// kilobytes sent, against seconds since the first point.
    pub fn sent(&self) -> Vec<(f64, f64)> {
        self.series(|point| point.sent)
    }

    /// kilobytes received, against seconds since the first point.
    pub fn received(&self) -> Vec<(f64, f64)> {
        self.series(|point| point.received)
    }

    pub fn cumulative_sent(&self) -> f64 {
        self.points.iter().map(|point| point.sent).sum()
    }

    pub fn cumulative_received(&self) -> f64 {
        self.points.iter().map(|point| point.received).sum()
    }

    /// the first and last timestamps in the log.
    pub fn span(&self) -> Option<(PrimitiveDateTime, PrimitiveDateTime)> {
        let first = self.points.first()?;
        let last = self.points.last()?;
        Some((first.time, last.time))
    }

    fn series(&self, value: impl Fn(&Point) -> f64) -> Vec<(f64, f64)> {
        let Some((start, _)) = self.span() else {
            return Vec::new();
        };

        self.points
            .iter()
            .map(|point| ((point.time - start).as_seconds_f64(), value(point)))
            .collect()
    }
}
