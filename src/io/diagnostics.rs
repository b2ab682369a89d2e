//! Injected diagnostic sinks for warnings and debug messages
//!
//! Composition never aborts on bad input; it degrades to a blank result and
//! reports what happened through a [`Diagnostics`] implementation handed to
//! the creator and every strategy.

use crate::io::error::TextureError;
use std::fmt;
use std::sync::Mutex;

/// Importance of a diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Timing and progress detail
    Debug,
    /// A degraded result was substituted
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Debug => write!(f, "debug"),
            Self::Warning => write!(f, "warning"),
        }
    }
}

/// A single reported event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// How important the event is
    pub severity: Severity,
    /// Human-readable description
    pub message: String,
}

impl Diagnostic {
    /// Create a warning diagnostic
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
        }
    }

    /// Create a debug diagnostic
    pub fn debug(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Debug,
            message: message.into(),
        }
    }
}

/// Receives diagnostics emitted during texture creation
pub trait Diagnostics {
    /// Record one diagnostic
    fn emit(&self, diagnostic: Diagnostic);

    /// Record a warning
    fn warn(&self, message: &str) {
        self.emit(Diagnostic::warning(message));
    }

    /// Record a debug message
    fn debug(&self, message: &str) {
        self.emit(Diagnostic::debug(message));
    }

    /// Record an error that was downgraded to a warning
    fn warn_error(&self, error: &TextureError) {
        self.emit(Diagnostic::warning(error.to_string()));
    }
}

/// Discards every diagnostic
#[derive(Debug, Clone, Copy, Default)]
pub struct NullDiagnostics;

impl Diagnostics for NullDiagnostics {
    fn emit(&self, _diagnostic: Diagnostic) {}
}

/// Forwards diagnostics to the `tracing` macros
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn emit(&self, diagnostic: Diagnostic) {
        match diagnostic.severity {
            Severity::Debug => tracing::debug!("{}", diagnostic.message),
            Severity::Warning => tracing::warn!("{}", diagnostic.message),
        }
    }
}

/// Keeps every diagnostic in memory for later inspection
#[derive(Debug, Default)]
pub struct CollectingDiagnostics {
    events: Mutex<Vec<Diagnostic>>,
}

impl CollectingDiagnostics {
    /// Create an empty collector
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded diagnostics in emission order
    pub fn events(&self) -> Vec<Diagnostic> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }

    /// Messages of the recorded warnings
    pub fn warnings(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter(|d| d.severity == Severity::Warning)
            .map(|d| d.message)
            .collect()
    }

    /// Number of recorded warnings
    pub fn warning_count(&self) -> usize {
        self.warnings().len()
    }
}

impl Diagnostics for CollectingDiagnostics {
    fn emit(&self, diagnostic: Diagnostic) {
        if let Ok(mut events) = self.events.lock() {
            events.push(diagnostic);
        }
    }
}
