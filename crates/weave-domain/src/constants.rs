//! Domain layer constants
//!
//! Priorities decide chain order: lower values run first and sit
//! outermost. Timing wraps caching so recorded latency always includes
//! the cache lookup.

// ============================================================================
// ADVICE PRIORITIES
// ============================================================================

/// Default priority of the timing advice (outermost)
pub const TIMING_DEFAULT_PRIORITY: i32 = 1;

/// Default priority of the caching advice (inside timing)
pub const CACHING_DEFAULT_PRIORITY: i32 = 2;

// ============================================================================
// ADVICE NAMES
// ============================================================================

/// Name reported by the caching advice in events and errors
pub const CACHING_ADVICE_NAME: &str = "caching";

/// Name reported by the timing advice in events and errors
pub const TIMING_ADVICE_NAME: &str = "timing";

// ============================================================================
// DESCRIPTOR RENDERING
// ============================================================================

/// Separator between module path segments
pub const MODULE_SEPARATOR: &str = "::";
