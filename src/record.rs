//! log records.
//!
//! each cycle produces one line of whitespace-separated tokens:
//!
//! ```text
//! 2024-03-09 14:02:11,604 WARNING  CORE_0: 71.20% CORE_1: 58.00% TOTAL: 64.60% SEND: 1.20KB RECV: 3.05MB
//! ```
//!
//! the chart reader depends on the token order, so this format should not change.

use {
    crate::{sample::Sample, severity::Severity, units},
    std::{
        fmt::Write as _,
        fs::{File, OpenOptions},
        io::{self, LineWriter, Write},
        path::Path,
    },
    time::{OffsetDateTime, macros::format_description},
};


/// one cycle's log record.
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    pub timestamp: OffsetDateTime,
    /// the most severe reading in the cycle.
    pub severity: Severity,
    pub message: String,
}

/// somewhere records are written to.
pub trait LogSink {
    fn emit(&mut self, record: &Record) -> Result<(), LogError>;
}

/// writes each record to a file as one line, exactly as [`Record::line()`] renders it.
pub struct RecordFile<W = LineWriter<File>> {
    out: W,
}

#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("failed to format timestamp: {0}")]
    Timestamp(#[from] time::error::Format),
    #[error("failed to write record: {0}")]
    Io(#[from] io::Error),
}

/// renders a sample as a record.
pub fn compose(sample: &Sample) -> Record {
    let Sample {
        timestamp,
        cores,
        total,
        sent,
        received,
    } = sample;

    let mut message = String::new();
    let mut severity = Severity::Good;

    for (i, percent) in cores.iter().enumerate() {
        severity = severity.escalate(Severity::classify(*percent));
        let _ = write!(message, "CORE_{i}: {percent:.2}% ");
    }
    severity = severity.escalate(Severity::classify(*total));

    let _ = write!(
        message,
        "TOTAL: {total:.2}% SEND: {} RECV: {}",
        units::scale(sent.delta),
        units::scale(received.delta),
    );

    Record {
        timestamp: *timestamp,
        severity,
        message,
    }
}

// === impl Record ===

impl Record {
    /// formats the full line, without a trailing newline.
    pub fn line(&self) -> Result<String, LogError> {
        let Self {
            timestamp,
            severity,
            message,
        } = self;

        let timestamp = timestamp.format(format_description!(
            "[year]-[month]-[day] [hour]:[minute]:[second],[subsecond digits:3]"
        ))?;
        Ok(format!("{timestamp} {severity:<8} {message}"))
    }
}

// === impl RecordFile ===

impl RecordFile {
    /// creates the record file at `path`, truncating anything it held.
    pub fn create(path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)?;
        log::debug!("writing records to {}", path.display());
        Ok(Self::new(LineWriter::new(file)))
    }
}

impl<W: Write> RecordFile<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub(crate) fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> LogSink for RecordFile<W> {
    /// a record is flushed as soon as it is written, so a failed write is reported by the cycle
    /// that made it.
    fn emit(&mut self, record: &Record) -> Result<(), LogError> {
        let Self { out } = self;
        let line = record.line()?;
        writeln!(out, "{line}")?;
        out.flush()?;
        Ok(())
    }
}

impl<L: LogSink + ?Sized> LogSink for &mut L {
    fn emit(&mut self, record: &Record) -> Result<(), LogError> {
        (**self).emit(record)
    }
}

impl LogSink for Vec<Record> {
    fn emit(&mut self, record: &Record) -> Result<(), LogError> {
        self.push(record.clone());
        Ok(())
    }
}
