//! Diagnostic sink
//!
//! An injected capability rather than ambient state; the default is a no-op.
//! Sinks are best-effort: they never fail and never block the pipeline.

use crate::error::Error;

/// Best-effort diagnostic capability
pub trait DiagnosticSink: Send + Sync {
    /// Record a pipeline checkpoint
    fn checkpoint(&self, _message: &str) {}

    /// Record a failed build before the error propagates
    fn failure(&self, _error: &Error) {}
}

/// Sink that discards everything
#[derive(Debug, Default)]
pub struct NoopSink;

impl DiagnosticSink for NoopSink {}

/// Sink that forwards to the tracing subscriber, if one is installed
#[derive(Debug, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn checkpoint(&self, message: &str) {
        tracing::debug!("{}", message);
    }

    fn failure(&self, error: &Error) {
        tracing::warn!("transaction preparation failed: {}", error);
    }
}
