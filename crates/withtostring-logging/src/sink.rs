//! Diagnostic sink backed by `tracing`

use std::sync::atomic::{AtomicUsize, Ordering};
use withtostring_core::{Diagnostic, DiagnosticSink, Severity};

/// Logs each diagnostic through `tracing` and counts them by severity.
///
/// Warnings go to `warn!`, errors to `error!`. The counters let a caller
/// fail the build after a pass that reported any error.
#[derive(Debug, Default)]
pub struct TracingSink {
    warnings: AtomicUsize,
    errors: AtomicUsize,
}

impl TracingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings.load(Ordering::SeqCst)
    }

    pub fn error_count(&self) -> usize {
        self.errors.load(Ordering::SeqCst)
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }
}

impl DiagnosticSink for TracingSink {
    fn report(&self, diagnostic: Diagnostic) {
        match diagnostic.severity {
            Severity::Warning => {
                self.warnings.fetch_add(1, Ordering::SeqCst);
                tracing::warn!(subject = %diagnostic.subject, "{}", diagnostic.message);
            }
            Severity::Error => {
                self.errors.fetch_add(1, Ordering::SeqCst);
                tracing::error!(subject = %diagnostic.subject, "{}", diagnostic.message);
            }
        }
    }
}
