/// a pair of byte counts, one per direction of traffic.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Counters {
    pub sent: u64,
    pub received: u64,
}

/// turns cumulative network counters into the bytes transferred since the last cycle.
#[derive(Debug, Default)]
pub struct CounterTracker {
    inner: Inner,
}

#[derive(Debug, Default)]
enum Inner {
    /// no counters have been observed yet.
    #[default]
    Initialized,
    Running {
        /// the last observed cumulative counters.
        last: Counters,
    },
}


// === impl CounterTracker ===

impl CounterTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// returns the bytes transferred since this was last called, and remembers `now`.
    ///
    /// NB: the first call only establishes a baseline, and reports zero bytes in each direction.
    /// a counter that went backwards (an interface reset, or a wrapped counter) reports zero for
    /// that cycle rather than a negative amount.
    pub fn delta(&mut self, now: Counters) -> Counters {
        let Self { inner } = self;

        match inner {
            Inner::Initialized => {
                *inner = Inner::Running { last: now };
                Counters::default()
            }
            Inner::Running { last } => {
                let prev = std::mem::replace(last, now);
                if now.sent < prev.sent || now.received < prev.received {
                    log::warn!("network counters went backwards, from {prev:?} to {now:?}");
                }
                Counters {
                    sent: now.sent.saturating_sub(prev.sent),
                    received: now.received.saturating_sub(prev.received),
                }
            }
        }
    }
}
