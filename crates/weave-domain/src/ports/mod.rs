//! Domain Port Interfaces
//!
//! Contracts between the interception core and the code around it:
//!
//! - **advice** - behavior wrapped around calls, plus the single-use continuation
//! - **invocable** - targets that can be proxied
//! - **diagnostics** - consumers of diagnostic events

/// Advice contract and continuation
pub mod advice;
/// Diagnostic event consumers
pub mod diagnostics;
/// Proxiable targets
pub mod invocable;

pub use advice::{Advice, Next};
pub use diagnostics::DiagnosticSink;
pub use invocable::Invocable;
