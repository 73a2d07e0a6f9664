//! Null diagnostic sink

use weave_domain::events::DiagnosticEvent;
use weave_domain::ports::DiagnosticSink;

/// Sink that drops every event
#[derive(Debug, Default, Clone, Copy)]
pub struct NullDiagnosticSink;

impl NullDiagnosticSink {
    /// Create a new null sink
    pub fn new() -> Self {
        Self
    }
}

impl DiagnosticSink for NullDiagnosticSink {
    fn emit(&self, _event: DiagnosticEvent) {}
}
