//! Collected warnings and errors of a load.

use serde::Serialize;
use std::cell::RefCell;
use tracing::{error, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
}

/// Sink for problems found while loading or saving a document.
///
/// Each call emits a `tracing` event and records the message, so callers can
/// inspect what happened without installing a subscriber. Not thread-safe:
/// a sink belongs to the single thread loading the document.
#[derive(Debug, Default)]
pub struct Diagnostics {
    entries: RefCell<Vec<Diagnostic>>,
}

impl Diagnostics {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn warn(&self, message: impl Into<String>) {
        let message = message.into();
        warn!("{message}");
        self.push(Severity::Warning, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        let message = message.into();
        error!("{message}");
        self.push(Severity::Error, message);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    /// Copy of what has been recorded so far.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Diagnostic> {
        self.entries.borrow().clone()
    }

    /// Removes and returns everything recorded so far.
    pub fn take(&self) -> Vec<Diagnostic> {
        self.entries.take()
    }

    fn push(&self, severity: Severity, message: String) {
        self.entries.borrow_mut().push(Diagnostic { severity, message });
    }
}

impl Clone for Diagnostics {
    fn clone(&self) -> Self {
        Self {
            entries: RefCell::new(self.snapshot()),
        }
    }
}

/// Outcome of loading a project.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LoadReport {
    /// Order in which extension implementations were read.
    pub load_order: Vec<String>,
    /// Extensions that could not be ordered by their dependencies.
    pub unresolved_extensions: Vec<String>,
    pub diagnostics: Vec<Diagnostic>,
}

impl LoadReport {
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
    }

    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }
}
