use {
    crate::{
        source::{SourceError, StatsSource},
        stat::{CpuId, Measurement, Snapshot, StatReadError},
    },
    std::collections::BTreeMap,
};


/// observes kernel statistics.
pub struct Sentinel {
    /// the last observed snapshot.
    last: Snapshot,
}

/// a recording of the system's cpu load.
#[derive(Clone, Debug)]
pub struct Recording {
    /// how each cpu spent its time.
    pub cpus: BTreeMap<CpuId, Measurement>,
}

// === impl Sentinel ===

impl Sentinel {
    /// creates a new [`Sentinel`], reading the baseline that the first observation compares to.
    pub fn new(stats: &impl StatsSource) -> Result<Self, StatReadError> {
        Snapshot::read(stats).map(|last| Self { last })
    }

    /// the number of cpus in the last snapshot.
    pub fn cores(&self) -> usize {
        self.last.cpus.len()
    }

    /// returns a [`Recording`] of cpu time since the last successful observation.
    ///
    /// a failed observation leaves the baseline where it was.
    pub fn observe(&mut self, stats: &impl StatsSource) -> Result<Recording, SourceError> {
        let Self { last } = self;

        let next = Snapshot::read(stats)?;
        let recording = Recording::new(last, &next)?;
        *last = next;

        Ok(recording)
    }
}

// === impl Recording ===

impl Recording {
    fn new(before: &Snapshot, after: &Snapshot) -> Result<Recording, SourceError> {
        let (before, after) = (&before.cpus, &after.cpus);

        let (expected, found) = (before.len(), after.len());
        if expected != found || before.keys().ne(after.keys()) {
            return Err(SourceError::CoreCount { expected, found });
        }

        let cpus = before
            .iter()
            .zip(after.values())
            .map(|((id, before), after)| (*id, Measurement::new(before, after)))
            .collect();

        Ok(Self { cpus })
    }
}
