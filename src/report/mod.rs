//! Reporting: the injected event sink and the outcome renderer

pub mod json;

use crate::models::{ProbeOutcome, Verbosity, VerdictKind};
use std::sync::Mutex;
use tracing::{debug, error, info, warn};

/// Sink for scan events.
///
/// The driver reports through this trait instead of a process-wide logger,
/// so tests can substitute a capturing implementation.
pub trait Reporter: Send + Sync {
    /// Basic per-origin information
    fn info(&self, message: &str);
    /// Extra notices such as missing-policy responses
    fn debug(&self, message: &str);
    /// Suspicious policy observations
    fn warn(&self, message: &str);
    /// Transport failures
    fn error(&self, message: &str);
}

/// Reporter that forwards events to the `tracing` logger.
///
/// Info events are dropped below [`Verbosity::Info`] and debug events below
/// [`Verbosity::Debug`]; warnings and errors always pass through.
pub struct ConsoleReporter {
    verbosity: Verbosity,
}

impl ConsoleReporter {
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }
}

impl Reporter for ConsoleReporter {
    fn info(&self, message: &str) {
        if self.verbosity >= Verbosity::Info {
            info!("{message}");
        }
    }

    fn debug(&self, message: &str) {
        if self.verbosity >= Verbosity::Debug {
            debug!("{message}");
        }
    }

    fn warn(&self, message: &str) {
        warn!("{message}");
    }

    fn error(&self, message: &str) {
        error!("{message}");
    }
}

/// Level tag recorded by [`CapturingReporter`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventLevel {
    Info,
    Debug,
    Warn,
    Error,
}

/// Reporter that records every event it receives, for assertions in tests
#[derive(Default)]
pub struct CapturingReporter {
    events: Mutex<Vec<(EventLevel, String)>>,
}

impl CapturingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of all recorded events in arrival order
    pub fn events(&self) -> Vec<(EventLevel, String)> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }

    fn push(&self, level: EventLevel, message: &str) {
        if let Ok(mut events) = self.events.lock() {
            events.push((level, message.to_string()));
        }
    }
}

impl Reporter for CapturingReporter {
    fn info(&self, message: &str) {
        self.push(EventLevel::Info, message);
    }

    fn debug(&self, message: &str) {
        self.push(EventLevel::Debug, message);
    }

    fn warn(&self, message: &str) {
        self.push(EventLevel::Warn, message);
    }

    fn error(&self, message: &str) {
        self.push(EventLevel::Error, message);
    }
}

/// Renders one probe outcome as log events.
///
/// Missing-policy verdicts go to `debug` so they only surface at the highest
/// verbosity; vulnerable verdicts are warnings; transport failures are
/// errors. Every other line is per-origin information.
pub fn render_outcome(outcome: &ProbeOutcome, reporter: &dyn Reporter) {
    match &outcome.result {
        Ok(verdict) => {
            if verdict.kind == VerdictKind::NoPolicy {
                reporter.debug(&verdict.reason);
                return;
            }

            reporter.info(&format!("Origin: {}", verdict.origin));
            if let Some(acao) = &verdict.allow_origin {
                reporter.info(&format!("Access-Control-Allow-Origin: {acao}"));
            }
            match &verdict.allow_credentials {
                Some(acac) => reporter.info(&format!("Access-Control-Allow-Credentials: {acac}")),
                None => reporter.info("Access-Control-Allow-Credentials: Not Present"),
            }

            if verdict.kind.is_vulnerable() {
                reporter.warn(&format!("Potential CORS vulnerability: {}", verdict.reason));
            } else {
                reporter.info(&verdict.reason);
            }
        }
        Err(failure) => {
            reporter.error(&format!("Error for origin {}: {failure}", outcome.origin));
        }
    }
}
