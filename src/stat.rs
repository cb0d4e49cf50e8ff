use {
    crate::source::StatsSource,
    std::{
        collections::BTreeMap,
        io::{self, BufRead, BufReader},
        num::ParseIntError,
        str::FromStr,
    },
};

pub use self::{
    cpu_time::{CpuTime, Measurement},
    user_hz::UserHz,
};

mod cpu_time;
mod user_hz;


/// every cpu line of `/proc/stat`, read at one moment.
#[derive(Clone, Debug)]
pub struct Snapshot {
    /// the aggregate `cpu` line.
    pub system: CpuTime,
    /// the `cpuN` lines, one per core.
    pub cpus: BTreeMap<CpuId, CpuTime>,
}

/// one line of `/proc/stat`. see `proc_stat(5)`.
#[derive(Debug, Eq, PartialEq)]
pub enum Entry {
    AllCpu { time: CpuTime },
    Cpu { id: CpuId, time: CpuTime },
    /// a known line that is not cpu time, such as `intr` or `ctxt`.
    Other,
}

/// the index of a core, from the digits after `cpu`.
#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
pub struct CpuId(u16);

#[derive(Debug, Eq, PartialEq, thiserror::Error)]
pub enum EntryParseError {
    #[error("empty entry")]
    Empty,
    #[error("unrecognized entry kind: {kind}")]
    UnrecognizedEntry { kind: String },
    #[error("invalid cpu id: {0}")]
    CpuIdParse(#[source] ParseIntError),
    #[error("invalid time value: {0}")]
    UserHzParse(#[source] ParseIntError),
    #[error("expected {} cpu time values, found {found}", cpu_time::FIELDS)]
    CpuTime { found: usize },
}

#[derive(Debug, thiserror::Error)]
pub enum StatReadError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Entry(#[from] EntryParseError),
    #[error("no aggregate cpu entry in kernel statistics")]
    MissingSystem,
}

// === impl Snapshot ===

impl Snapshot {
    /// reads one snapshot from `stats`.
    ///
    /// every line is parsed, so a malformed file is an error even where the monitor would not
    /// have used the bad line.
    pub(crate) fn read(stats: &impl StatsSource) -> Result<Snapshot, StatReadError> {
        let mut system = None;
        let mut cpus = BTreeMap::new();

        for line in BufReader::new(stats.stat()?).lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            match line.parse::<Entry>()? {
                Entry::AllCpu { time } => system = Some(time),
                Entry::Cpu { id, time } => {
                    cpus.insert(id, time);
                }
                Entry::Other => {}
            }
        }

        let system = system.ok_or(StatReadError::MissingSystem)?;
        Ok(Snapshot { system, cpus })
    }
}

// === impl Entry ===

impl Entry {
    /// line kinds, other than cpu lines, that the kernel writes.
    const OTHER_KINDS: &[&str] = &[
        "page",
        "swap",
        "intr",
        "disk_io",
        "ctxt",
        "btime",
        "processes",
        "procs_running",
        "procs_blocked",
        "softirq",
    ];

    /// `cpu` is the aggregate, and `cpuN` is core `N`.
    fn parse_cpu_id(kind: &str) -> Result<Option<CpuId>, EntryParseError> {
        let digits = kind
            .strip_prefix("cpu")
            .ok_or_else(|| EntryParseError::UnrecognizedEntry {
                kind: kind.to_owned(),
            })?;

        match digits {
            "" => Ok(None),
            digits => digits
                .parse::<u16>()
                .map(|id| Some(CpuId(id)))
                .map_err(EntryParseError::CpuIdParse),
        }
    }
}

impl FromStr for Entry {
    type Err = EntryParseError;
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut tokens = line.split_whitespace();
        let kind = tokens.next().ok_or(EntryParseError::Empty)?;

        if Self::OTHER_KINDS.contains(&kind) {
            return Ok(Self::Other);
        }

        let id = Self::parse_cpu_id(kind)?;
        let time = tokens
            .map(str::parse::<UserHz>)
            .collect::<Result<Vec<_>, _>>()
            .map_err(EntryParseError::UserHzParse)
            .and_then(CpuTime::try_from)?;

        Ok(match id {
            Some(id) => Self::Cpu { id, time },
            None => Self::AllCpu { time },
        })
    }
}
