use std::fmt::{self, Display};

/// how a piece of text should be presented, on screen and in the log.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Severity {
    /// plain, unstyled text.
    #[default]
    Neutral,
    Good,
    Warning,
    Critical,
    /// titles and hints.
    Info,
}


// === impl Severity ===

impl Severity {
    /// readings above this percentage are a warning.
    pub const WARNING_ABOVE: f64 = 60.0;
    /// readings above this percentage are critical.
    pub const CRITICAL_ABOVE: f64 = 80.0;

    /// classifies a utilization percentage.
    pub fn classify(percent: f64) -> Self {
        if percent > Self::CRITICAL_ABOVE {
            Self::Critical
        } else if percent > Self::WARNING_ABOVE {
            Self::Warning
        } else {
            Self::Good
        }
    }

    /// returns the more severe of two readings.
    ///
    /// only `Good`, `Warning` and `Critical` are ranked; the presentational levels never win.
    pub fn escalate(self, other: Self) -> Self {
        if other.rank() > self.rank() {
            other
        } else {
            self
        }
    }

    /// the label written into log records.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Neutral => "NONE",
            Self::Good => "GOOD",
            Self::Warning => "WARNING",
            Self::Critical => "CRITICAL",
            Self::Info => "INFO",
        }
    }

    /// the `log` level that records of this severity are emitted at.
    pub fn level(&self) -> log::Level {
        match self {
            Self::Critical => log::Level::Error,
            Self::Warning => log::Level::Warn,
            Self::Neutral | Self::Good | Self::Info => log::Level::Info,
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Self::Neutral | Self::Info => 0,
            Self::Good => 1,
            Self::Warning => 2,
            Self::Critical => 3,
        }
    }
}

impl Display for Severity {
    /// pads to the requested width, so records can align the level column.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}
