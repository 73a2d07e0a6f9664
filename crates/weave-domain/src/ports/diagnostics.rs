//! Diagnostic Sink Port

use crate::events::DiagnosticEvent;

/// Consumer of diagnostic events emitted by advices
///
/// Sinks are called in-line on the invoking thread, so implementations
/// should return quickly and must not call back into the chain.
pub trait DiagnosticSink: Send + Sync {
    /// Receive one event
    fn emit(&self, event: DiagnosticEvent);
}
