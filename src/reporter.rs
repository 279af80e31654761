// src/reporter.rs

//! Progress reporting sink for conversion runs
//!
//! Core operations never print directly. They are handed a `Reporter` and
//! describe what they are doing through it, which keeps them testable
//! without capturing process output.
//!
//! Implementations:
//! - `LogReporter`: forwards to `tracing` (what the CLI uses; `--quiet`
//!   and `--verbose` only change the subscriber's filter)
//! - `SilentReporter`: discards everything
//! - `MemoryReporter`: records events for later inspection
//!
//! # Example
//!
//! ```ignore
//! use squareline_idf::reporter::{MemoryReporter, Reporter};
//!
//! let reporter = MemoryReporter::new();
//! reporter.info("Reading CMakeLists.txt.squareline");
//! assert_eq!(reporter.infos(), vec!["Reading CMakeLists.txt.squareline"]);
//! ```

use std::sync::Mutex;
use tracing::{error, info, warn};

/// A single reported line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportEvent {
    /// Normal progress
    Info(String),
    /// Recoverable problem; the run continues
    Warning(String),
    /// Fatal problem; the run is about to stop
    Error(String),
}

impl ReportEvent {
    pub fn message(&self) -> &str {
        match self {
            Self::Info(m) | Self::Warning(m) | Self::Error(m) => m,
        }
    }
}

/// Sink for run progress
pub trait Reporter {
    fn info(&self, message: &str);

    fn warn(&self, message: &str);

    fn error(&self, message: &str);
}

/// Reporter that writes through `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn info(&self, message: &str) {
        info!("{}", message);
    }

    fn warn(&self, message: &str) {
        warn!("{}", message);
    }

    fn error(&self, message: &str) {
        error!("{}", message);
    }
}

/// No-op reporter
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentReporter;

impl Reporter for SilentReporter {
    fn info(&self, _message: &str) {}

    fn warn(&self, _message: &str) {}

    fn error(&self, _message: &str) {}
}

/// Reporter that keeps every event in memory
#[derive(Debug, Default)]
pub struct MemoryReporter {
    events: Mutex<Vec<ReportEvent>>,
}

impl MemoryReporter {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, event: ReportEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }

    /// All events in the order they were reported
    pub fn events(&self) -> Vec<ReportEvent> {
        self.events.lock().map(|e| e.clone()).unwrap_or_default()
    }

    pub fn infos(&self) -> Vec<String> {
        self.collect(|e| matches!(e, ReportEvent::Info(_)))
    }

    pub fn warnings(&self) -> Vec<String> {
        self.collect(|e| matches!(e, ReportEvent::Warning(_)))
    }

    pub fn errors(&self) -> Vec<String> {
        self.collect(|e| matches!(e, ReportEvent::Error(_)))
    }

    fn collect(&self, keep: impl Fn(&ReportEvent) -> bool) -> Vec<String> {
        self.events()
            .iter()
            .filter(|e| keep(e))
            .map(|e| e.message().to_string())
            .collect()
    }
}

impl Reporter for MemoryReporter {
    fn info(&self, message: &str) {
        self.push(ReportEvent::Info(message.to_string()));
    }

    fn warn(&self, message: &str) {
        self.push(ReportEvent::Warning(message.to_string()));
    }

    fn error(&self, message: &str) {
        self.push(ReportEvent::Error(message.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_reporter() {
        let reporter = MemoryReporter::new();

        reporter.info("starting");
        reporter.warn("skipped one");
        reporter.error("gave up");

        assert_eq!(reporter.events().len(), 3);
        assert_eq!(reporter.infos(), vec!["starting"]);
        assert_eq!(reporter.warnings(), vec!["skipped one"]);
        assert_eq!(reporter.errors(), vec!["gave up"]);
    }

    #[test]
    fn test_silent_and_log_reporters_accept_everything() {
        let reporters: [&dyn Reporter; 2] = [&SilentReporter, &LogReporter];
        for reporter in reporters {
            reporter.info("info");
            reporter.warn("warn");
            reporter.error("error");
        }
    }
}
