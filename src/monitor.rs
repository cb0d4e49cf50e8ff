use {
    crate::{
        cancel::Cancel,
        display::Surface,
        record::{self, LogError, LogSink},
        sample::Sampler,
        screen,
        source::{Clock, MetricSource, SourceError},
    },
    std::{io, time::Duration},
};


/// the time between cycles.
pub const INTERVAL: Duration = Duration::from_secs(5);

/// samples, draws, and logs on a fixed interval until cancelled.
pub struct Monitor<S, C, D, L> {
    sampler: Sampler<S, C>,
    /// taken when the monitor stops, which releases it.
    surface: Option<D>,
    log: Option<L>,
    interval: Duration,
    state: State,
    cycles: usize,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum State {
    Running,
    /// cancellation was observed; the surface is about to be released.
    Stopping,
    Stopped,
}

#[derive(Debug, thiserror::Error)]
pub enum MonitorError {
    #[error("failed to sample system metrics: {0}")]
    Source(#[from] SourceError),
    #[error("failed to draw: {0}")]
    Display(#[from] io::Error),
    #[error("failed to write log record: {0}")]
    Log(#[from] LogError),
}

// === impl Monitor ===

impl<S, C, D, L> Monitor<S, C, D, L>
where
    S: MetricSource,
    C: Clock,
    D: Surface,
    L: LogSink,
{
    pub fn new(sampler: Sampler<S, C>, surface: D, log: Option<L>) -> Self {
        Self {
            sampler,
            surface: Some(surface),
            log,
            interval: INTERVAL,
            state: State::Running,
            cycles: 0,
        }
    }

    #[cfg(test)]
    pub(crate) fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// runs cycles until `cancel` is cancelled, returning how many cycles completed.
    ///
    /// a cycle in progress always completes before the monitor stops. the surface is released
    /// before this returns, whether it returns normally or with an error.
    pub fn run(mut self, cancel: &Cancel) -> Result<usize, MonitorError> {
        log::debug!("monitor running, every {:?}", self.interval);

        loop {
            self.state = match self.state {
                State::Running if cancel.is_cancelled() => State::Stopping,
                State::Running => {
                    self.cycle()?;
                    if cancel.wait(self.interval) {
                        State::Stopping
                    } else {
                        State::Running
                    }
                }
                State::Stopping => {
                    drop(self.surface.take());
                    State::Stopped
                }
                State::Stopped => break,
            };
            log::trace!("monitor state: {:?}", self.state);
        }

        log::debug!("monitor stopped after {} cycles", self.cycles);
        Ok(self.cycles)
    }

    /// samples once, then draws and logs the sample.
    ///
    /// sampling happens before anything is drawn, so a failed sample leaves no partial frame.
    fn cycle(&mut self) -> Result<(), MonitorError> {
        let Self {
            sampler,
            surface,
            log: sink,
            cycles,
            ..
        } = self;

        let sample = sampler.sample()?;
        let record = record::compose(&sample);
        log::log!(record.severity.level(), "cycle {cycles}: {}", record.message);

        if let Some(surface) = surface {
            screen::draw(surface, &screen::layout(&sample))?;
        }

        if let Some(sink) = sink {
            sink.emit(&record)?;
        }

        if let Some(surface) = surface {
            surface.commit()?;
        }

        *cycles += 1;
        Ok(())
    }
}
