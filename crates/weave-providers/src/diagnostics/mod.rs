//! Diagnostic sink implementations
//!
//! | Sink | Use |
//! |------|-----|
//! | [`TracingDiagnosticSink`] | production, structured `tracing` events |
//! | [`MemoryDiagnosticSink`] | tests and inspection, keeps every event |
//! | [`NullDiagnosticSink`] | discards everything |

pub mod memory;
pub mod null;
pub mod tracing_sink;

pub use memory::MemoryDiagnosticSink;
pub use null::NullDiagnosticSink;
pub use tracing_sink::TracingDiagnosticSink;
