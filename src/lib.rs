//! a compact cpu and network monitor.
//!
//! every few seconds the monitor samples per-core cpu utilization and network traffic from the
//! kernel, draws them to the terminal colored by severity, and optionally appends a record of
//! the sample to a log. [`chart`] reads that log back.

pub use self::{
    cancel::Cancel,
    counter::{CounterTracker, Counters},
    display::{Surface, Terminal},
    monitor::{Monitor, MonitorError},
    record::{LogSink, Record, RecordFile},
    sample::{Sample, Sampler},
    severity::Severity,
    source::{Clock, MetricSource, ProcFs, ProcSource, SourceError, StatsSource, SystemClock},
};

pub mod cancel;
pub mod chart;
pub mod counter;
pub mod display;
pub mod input;
pub mod logging;
pub mod monitor;
pub mod record;
pub mod sample;
pub mod screen;
pub mod severity;
pub mod source;
pub mod units;

/// network interface statistics.
///
/// this file provides tools to interact with `/proc/net/dev`.
mod net;
/// observes kernel statistics over time.
mod sentinel;
/// kernel statistics facilities.
///
/// this file provides tools to interact with `/proc/stat`.
mod stat;
