use super::*;

/// how many fields a cpu line carries.
pub const FIELDS: usize = 10;
/// where the idle field sits.
const IDLE: usize = 3;

/// a cpu's accumulated ticks, one per accounting field of its `/proc/stat` line.
///
/// the fields are, in order: user, nice, system, idle, iowait, irq, softirq, steal, guest and
/// guest_nice. only idle counts as the cpu being unused.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CpuTime {
    ticks: [UserHz; FIELDS],
}

/// the ticks a cpu accrued between two [`CpuTime`]s.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Measurement {
    ticks: [UserHz; FIELDS],
}

// === impl CpuTime ===

impl From<[UserHz; FIELDS]> for CpuTime {
    fn from(ticks: [UserHz; FIELDS]) -> Self {
        Self { ticks }
    }
}

impl TryFrom<Vec<UserHz>> for CpuTime {
    type Error = EntryParseError;
    fn try_from(ticks: Vec<UserHz>) -> Result<Self, Self::Error> {
        let found = ticks.len();
        <[UserHz; FIELDS]>::try_from(ticks)
            .map(Self::from)
            .map_err(|_| EntryParseError::CpuTime { found })
    }
}

// === impl Measurement ===

impl Measurement {
    /// a field that went backwards between the two readings contributes nothing.
    pub fn new(before: &CpuTime, after: &CpuTime) -> Self {
        let ticks = std::array::from_fn(|i| after.ticks[i] - before.ticks[i]);
        Self { ticks }
    }

    /// returns the share of ticks spent busy, as a percentage in `[0, 100]`.
    ///
    /// a measurement with no ticks at all is reported as idle.
    pub fn percentage(&self) -> f64 {
        let total = self.total();
        if total == UserHz::default() {
            return 0.0;
        }

        ((self.active() / total) * 100.0).clamp(0.0, 100.0)
    }

    /// ticks spent in any state but idle.
    pub fn active(&self) -> UserHz {
        self.total() - self.ticks[IDLE]
    }

    pub fn total(&self) -> UserHz {
        self.ticks
            .iter()
            .fold(UserHz::default(), |total, ticks| total + *ticks)
    }
}
