//! decimal byte units.
//!
//! quantities are scaled by powers of 1000, not 1024. the log format depends on this.

use std::{
    fmt::{self, Display},
    num::ParseFloatError,
    str::FromStr,
};


#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Unit {
    B,
    KB,
    MB,
}

/// a magnitude paired with its unit, e.g. `1.50KB`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Quantity {
    pub magnitude: f64,
    pub unit: Unit,
}

#[derive(Debug, Eq, PartialEq, thiserror::Error)]
pub enum QuantityParseError {
    #[error("missing byte unit in {0:?}")]
    Unit(String),
    #[error("invalid magnitude: {0}")]
    Magnitude(#[source] ParseFloatError),
}

/// scales a raw byte count to a human-sized magnitude.
pub fn scale(bytes: u64) -> Quantity {
    const KILO: u64 = 1_000;
    const MEGA: u64 = 1_000_000;

    let (divisor, unit) = match bytes {
        MEGA.. => (MEGA, Unit::MB),
        KILO.. => (KILO, Unit::KB),
        _ => (1, Unit::B),
    };

    Quantity {
        magnitude: bytes as f64 / divisor as f64,
        unit,
    }
}

// === impl Unit ===

impl Unit {
    pub fn suffix(&self) -> &'static str {
        match self {
            Self::B => "B",
            Self::KB => "KB",
            Self::MB => "MB",
        }
    }

    fn bytes(&self) -> f64 {
        match self {
            Self::B => 1.0,
            Self::KB => 1_000.0,
            Self::MB => 1_000_000.0,
        }
    }
}

// === impl Quantity ===

impl Quantity {
    /// returns this quantity in kilobytes.
    pub fn kilobytes(&self) -> f64 {
        let Self { magnitude, unit } = self;
        magnitude * unit.bytes() / Unit::KB.bytes()
    }
}

impl Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { magnitude, unit } = self;
        write!(f, "{magnitude:.2}{}", unit.suffix())
    }
}

impl FromStr for Quantity {
    type Err = QuantityParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // longer suffixes first, since every unit ends in "B".
        let (magnitude, unit) = [Unit::MB, Unit::KB, Unit::B]
            .into_iter()
            .find_map(|unit| s.strip_suffix(unit.suffix()).map(|m| (m, unit)))
            .ok_or_else(|| QuantityParseError::Unit(s.to_owned()))?;

        let magnitude = magnitude
            .parse::<f64>()
            .map_err(QuantityParseError::Magnitude)?;

        Ok(Self { magnitude, unit })
    }
}
