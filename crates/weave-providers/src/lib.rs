//! # Weave - Provider Implementations
//!
//! Concrete implementations of the ports defined in `weave-domain`.
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Advice | `Advice` | [`CachingAdvice`], [`TimingAdvice`] |
//! | Diagnostics | `DiagnosticSink` | [`TracingDiagnosticSink`], [`MemoryDiagnosticSink`], [`NullDiagnosticSink`] |
//!
//! The caching advice keeps its results in a [`ResultCache`] injected at
//! construction, so several advices (or an admin surface) can share one
//! store without any process-wide state.

// Re-export weave-domain types commonly used with providers
pub use weave_domain::error::{Error, Result};
pub use weave_domain::ports::{Advice, DiagnosticSink};

/// Advice implementations
pub mod advice;

/// Result cache store
pub mod cache;

/// Diagnostic sink implementations
pub mod diagnostics;

/// Shared utilities for provider implementations
pub mod utils;

pub use advice::{CachingAdvice, TimingAdvice};
pub use cache::ResultCache;
pub use diagnostics::{MemoryDiagnosticSink, NullDiagnosticSink, TracingDiagnosticSink};
pub use utils::TimedOperation;
