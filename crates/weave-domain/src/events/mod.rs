//! Domain events
//!
//! Events emitted by advices for an external observability collaborator.

pub mod diagnostic_events;

pub use diagnostic_events::DiagnosticEvent;
