use {
    crate::{
        counter::Counters,
        net::NetReadError,
        sentinel::{Recording, Sentinel},
        stat::{Measurement, StatReadError},
    },
    std::{
        cell::{Cell, RefCell},
        collections::VecDeque,
        fs::File,
        io::{self, BufReader, Cursor, Read},
    },
    time::{Duration, OffsetDateTime, UtcOffset},
};

pub use self::{clock::*, metrics::*, stats::*};

#[cfg(test)]
mod tests;

mod clock {
    use super::*;

    /// a source of wall-clock time, for timestamping samples.
    pub trait Clock {
        fn now(&self) -> OffsetDateTime;
    }

    /// the system clock, in the local offset.
    pub struct SystemClock {
        offset: UtcOffset,
    }

    /// a mock clock, which advances by a fixed step each time it is read.
    #[allow(dead_code, reason = "this is a testing utility.")]
    pub struct MockClock {
        next: Cell<OffsetDateTime>,
        step: Duration,
    }

    // === impl SystemClock ===

    impl SystemClock {
        /// captures the local offset.
        ///
        /// NB: the offset can only be determined soundly while the process is single-threaded, so
        /// this should be called before any threads are spawned. falls back to utc.
        pub fn local() -> Self {
            let offset = UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC);
            Self { offset }
        }
    }

    impl Clock for SystemClock {
        fn now(&self) -> OffsetDateTime {
            let Self { offset } = self;
            OffsetDateTime::now_utc().to_offset(*offset)
        }
    }

    // === impl MockClock ===

    #[allow(dead_code, reason = "this is a testing utility.")]
    impl MockClock {
        pub fn starting_at(start: OffsetDateTime, step: Duration) -> Self {
            Self {
                next: Cell::new(start),
                step,
            }
        }
    }

    impl Clock for MockClock {
        fn now(&self) -> OffsetDateTime {
            let Self { next, step } = self;
            let now = next.get();
            next.set(now + *step);
            now
        }
    }
}

/// abstracts over providers of statistics.
mod stats {
    use super::*;

    /// a source of kernel statistics.
    pub trait StatsSource {
        /// returns a reader over the kernel's cpu statistics.
        fn stat(&self) -> io::Result<impl Read>;
        /// returns a reader over the kernel's network interface statistics.
        fn net_dev(&self) -> io::Result<impl Read>;
    }

    /// stats backed by the `/proc` filesystem.
    #[derive(Default)]
    pub struct ProcFs;

    /// a mock stat source, which replays queued file contents.
    #[derive(Default)]
    #[allow(dead_code, reason = "this is a testing utility.")]
    pub struct MockProcFs {
        stats: RefCell<VecDeque<String>>,
        net_dev: RefCell<VecDeque<String>>,
    }

    // === impl ProcFs ===

    impl StatsSource for ProcFs {
        fn stat(&self) -> io::Result<impl Read> {
            File::open(Self::STAT).map(BufReader::new)
        }

        fn net_dev(&self) -> io::Result<impl Read> {
            File::open(Self::NET_DEV).map(BufReader::new)
        }
    }

    impl ProcFs {
        const STAT: &str = "/proc/stat";
        const NET_DEV: &str = "/proc/net/dev";
    }

    // === impl MockProcFs ===

    #[allow(dead_code, reason = "this is a testing utility.")]
    impl MockProcFs {
        /// queues the contents of one read of `/proc/stat`.
        pub fn with_stat(self, contents: &str) -> Self {
            self.stats.borrow_mut().push_back(contents.to_owned());
            self
        }

        /// queues the contents of one read of `/proc/net/dev`.
        pub fn with_net_dev(self, contents: &str) -> Self {
            self.net_dev.borrow_mut().push_back(contents.to_owned());
            self
        }

        fn pop(queue: &RefCell<VecDeque<String>>) -> io::Result<Cursor<String>> {
            queue
                .borrow_mut()
                .pop_front()
                .map(Cursor::new)
                .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "mock stats are empty"))
        }
    }

    impl StatsSource for MockProcFs {
        fn stat(&self) -> io::Result<impl Read> {
            Self::pop(&self.stats)
        }

        fn net_dev(&self) -> io::Result<impl Read> {
            Self::pop(&self.net_dev)
        }
    }
}

/// the queries the monitor makes each cycle.
mod metrics {
    use super::*;

    /// a source of cpu utilization and network counters.
    pub trait MetricSource {
        /// the number of cpu cores. always at least one.
        fn core_count(&self) -> usize;
        /// returns the utilization of each core since the last call, as percentages.
        ///
        /// the returned vector has exactly [`MetricSource::core_count()`] elements.
        fn cpu_percentages(&mut self) -> Result<Vec<f64>, SourceError>;
        /// returns the cumulative bytes sent and received since boot.
        fn network_counters(&mut self) -> Result<Counters, SourceError>;
    }

    #[derive(Debug, thiserror::Error)]
    pub enum SourceError {
        #[error("failed to read cpu statistics: {0}")]
        Stat(#[from] StatReadError),
        #[error("failed to read network statistics: {0}")]
        Net(#[from] NetReadError),
        #[error("no cpus were reported")]
        NoCores,
        #[error("cpu count changed from {expected} to {found}")]
        CoreCount { expected: usize, found: usize },
    }

    /// metrics read from kernel statistics.
    pub struct ProcSource<S = ProcFs> {
        stats: S,
        sentinel: Sentinel,
    }

    /// a mock metric source, which replays queued readings.
    #[allow(dead_code, reason = "this is a testing utility.")]
    pub struct MockSource {
        cores: usize,
        readings: VecDeque<Result<(Vec<f64>, Counters), SourceError>>,
        counters: Option<Counters>,
    }

    // === impl ProcSource ===

    impl<S: StatsSource> ProcSource<S> {
        /// opens a metric source, reading a baseline of cpu statistics.
        pub fn new(stats: S) -> Result<Self, SourceError> {
            let sentinel = Sentinel::new(&stats)?;
            if sentinel.cores() == 0 {
                return Err(SourceError::NoCores);
            }

            Ok(Self { stats, sentinel })
        }
    }

    impl<S: StatsSource> MetricSource for ProcSource<S> {
        fn core_count(&self) -> usize {
            self.sentinel.cores()
        }

        fn cpu_percentages(&mut self) -> Result<Vec<f64>, SourceError> {
            let Self { stats, sentinel } = self;
            let Recording { cpus } = sentinel.observe(&*stats)?;

            Ok(cpus.values().map(Measurement::percentage).collect())
        }

        fn network_counters(&mut self) -> Result<Counters, SourceError> {
            crate::net::read(&self.stats).map_err(SourceError::from)
        }
    }

    // === impl MockSource ===

    #[allow(dead_code, reason = "this is a testing utility.")]
    impl MockSource {
        pub fn new(cores: usize) -> Self {
            Self {
                cores,
                readings: VecDeque::new(),
                counters: None,
            }
        }

        /// queues the cpu percentages and network counters for one cycle.
        pub fn reading(mut self, cpus: &[f64], sent: u64, received: u64) -> Self {
            let counters = Counters { sent, received };
            self.readings.push_back(Ok((cpus.to_vec(), counters)));
            self
        }

        /// queues a failed read.
        pub fn failure(mut self, error: SourceError) -> Self {
            self.readings.push_back(Err(error));
            self
        }
    }

    impl MetricSource for MockSource {
        fn core_count(&self) -> usize {
            self.cores
        }

        fn cpu_percentages(&mut self) -> Result<Vec<f64>, SourceError> {
            let Self {
                readings, counters, ..
            } = self;

            let (cpus, next) = readings.pop_front().unwrap_or_else(|| {
                let exhausted = io::Error::new(io::ErrorKind::NotFound, "mock readings are empty");
                Err(SourceError::Stat(StatReadError::Io(exhausted)))
            })?;
            counters.replace(next);

            Ok(cpus)
        }

        fn network_counters(&mut self) -> Result<Counters, SourceError> {
            Ok(self.counters.take().unwrap_or_default())
        }
    }
}
