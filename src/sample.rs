use {
    crate::{
        counter::{CounterTracker, Counters},
        source::{Clock, MetricSource, SourceError},
    },
    time::OffsetDateTime,
};


/// the output of one sampling cycle.
#[derive(Clone, Debug, PartialEq)]
pub struct Sample {
    /// when the sample was taken.
    pub timestamp: OffsetDateTime,
    /// the utilization of each core, in order.
    pub cores: Vec<f64>,
    /// the mean utilization across all cores.
    pub total: f64,
    pub sent: Traffic,
    pub received: Traffic,
}

/// traffic in one direction.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Traffic {
    /// bytes since boot.
    pub total: u64,
    /// bytes since the previous sample.
    pub delta: u64,
}

/// takes [`Sample`]s from a metric source.
pub struct Sampler<S, C> {
    source: S,
    tracker: CounterTracker,
    clock: C,
}

// === impl Sampler ===

impl<S, C> Sampler<S, C>
where
    S: MetricSource,
    C: Clock,
{
    pub fn new(source: S, tracker: CounterTracker, clock: C) -> Self {
        Self {
            source,
            tracker,
            clock,
        }
    }

    /// queries the source and forms a sample.
    ///
    /// the counter tracker is only advanced once every query has succeeded.
    pub fn sample(&mut self) -> Result<Sample, SourceError> {
        let Self {
            source,
            tracker,
            clock,
        } = self;

        let timestamp = clock.now();
        let cores = source.cpu_percentages()?;
        let counters = source.network_counters()?;

        let (expected, found) = (source.core_count(), cores.len());
        if found == 0 {
            return Err(SourceError::NoCores);
        } else if expected != found {
            return Err(SourceError::CoreCount { expected, found });
        }

        let total = cores.iter().sum::<f64>() / found as f64;
        let delta = tracker.delta(counters);

        let Counters { sent, received } = counters;
        Ok(Sample {
            timestamp,
            cores,
            total,
            sent: Traffic {
                total: sent,
                delta: delta.sent,
            },
            received: Traffic {
                total: received,
                delta: delta.received,
            },
        })
    }
}
