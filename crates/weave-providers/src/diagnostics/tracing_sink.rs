//! Tracing diagnostic sink
//!
//! Turns diagnostic events into structured `tracing` events under the
//! `weave::diagnostics` target, so they can be filtered independently
//! (e.g. `WEAVE_LOG=weave::diagnostics=debug`).

use tracing::{debug, info, warn};
use weave_domain::events::DiagnosticEvent;
use weave_domain::ports::DiagnosticSink;

/// Sink forwarding events to the `tracing` subscriber
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDiagnosticSink;

impl TracingDiagnosticSink {
    /// Create a new tracing sink
    pub fn new() -> Self {
        Self
    }
}

impl DiagnosticSink for TracingDiagnosticSink {
    fn emit(&self, event: DiagnosticEvent) {
        match event {
            DiagnosticEvent::CacheHit {
                signature,
                key,
                value,
            } => {
                debug!(
                    target: "weave::diagnostics",
                    signature = %signature,
                    key,
                    value = %value.to_json(),
                    "Cache hit"
                );
            }
            DiagnosticEvent::CacheStored {
                signature,
                key,
                value,
            } => {
                debug!(
                    target: "weave::diagnostics",
                    signature = %signature,
                    key,
                    value = %value.to_json(),
                    "Cache stored"
                );
            }
            DiagnosticEvent::ExecutionTimed {
                signature,
                arguments,
                elapsed,
                succeeded: true,
            } => {
                info!(
                    target: "weave::diagnostics",
                    signature = %signature,
                    arguments = %arguments,
                    elapsed_ns = elapsed.as_nanos() as u64,
                    "Execution timed"
                );
            }
            DiagnosticEvent::ExecutionTimed {
                signature,
                arguments,
                elapsed,
                succeeded: false,
            } => {
                warn!(
                    target: "weave::diagnostics",
                    signature = %signature,
                    arguments = %arguments,
                    elapsed_ns = elapsed.as_nanos() as u64,
                    "Execution failed"
                );
            }
        }
    }
}
