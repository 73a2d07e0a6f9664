//! In-memory diagnostic sink
//!
//! Keeps every event in arrival order. Intended for tests and for
//! inspecting a short run; it grows with every call.

use std::sync::{Mutex, MutexGuard};
use std::time::Duration;
use weave_domain::events::DiagnosticEvent;
use weave_domain::ports::DiagnosticSink;

/// Sink recording events in memory
#[derive(Debug, Default)]
pub struct MemoryDiagnosticSink {
    events: Mutex<Vec<DiagnosticEvent>>,
}

impl MemoryDiagnosticSink {
    /// Create an empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of every recorded event
    pub fn events(&self) -> Vec<DiagnosticEvent> {
        self.guard().clone()
    }

    /// Recorded events of one kind (see [`DiagnosticEvent::kind`])
    pub fn events_of_kind(&self, kind: &str) -> Vec<DiagnosticEvent> {
        self.guard()
            .iter()
            .filter(|event| event.kind() == kind)
            .cloned()
            .collect()
    }

    /// Elapsed durations of every timing event, in order
    pub fn timings(&self) -> Vec<Duration> {
        self.guard()
            .iter()
            .filter_map(DiagnosticEvent::elapsed)
            .collect()
    }

    /// Number of recorded events
    pub fn len(&self) -> usize {
        self.guard().len()
    }

    /// Check whether nothing was recorded
    pub fn is_empty(&self) -> bool {
        self.guard().is_empty()
    }

    /// Drop every recorded event
    pub fn clear(&self) {
        self.guard().clear();
    }

    // Poisoning is ignored: push and clear never leave the Vec inconsistent.
    fn guard(&self) -> MutexGuard<'_, Vec<DiagnosticEvent>> {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl DiagnosticSink for MemoryDiagnosticSink {
    fn emit(&self, event: DiagnosticEvent) {
        self.guard().push(event);
    }
}
