//! Diagnostic events
//!
//! Advices report what they did through these events. The core only
//! emits them; formatting and routing belong to a
//! [`DiagnosticSink`](crate::ports::DiagnosticSink) implementation.

use crate::value_objects::Value;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Observable side effects of advice execution
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum DiagnosticEvent {
    /// A cached result was returned without calling the target
    CacheHit {
        /// Signature of the intercepted method
        signature: String,
        /// Cache key taken from the first argument
        key: i64,
        /// Value returned from the cache
        value: Value,
    },
    /// The target was called and its result stored in the cache
    CacheStored {
        /// Signature of the intercepted method
        signature: String,
        /// Cache key taken from the first argument
        key: i64,
        /// Value stored under the key
        value: Value,
    },
    /// A call completed and its wall-clock duration was measured
    ExecutionTimed {
        /// Signature of the intercepted method
        signature: String,
        /// Arguments rendered as `a, b, c`
        arguments: String,
        /// Elapsed time around the rest of the chain
        elapsed: Duration,
        /// Whether the call returned a value rather than a failure
        succeeded: bool,
    },
}

impl DiagnosticEvent {
    /// Short machine-readable event kind
    pub fn kind(&self) -> &'static str {
        match self {
            Self::CacheHit { .. } => "cache_hit",
            Self::CacheStored { .. } => "cache_stored",
            Self::ExecutionTimed { .. } => "execution_timed",
        }
    }

    /// Signature of the method the event refers to
    pub fn signature(&self) -> &str {
        match self {
            Self::CacheHit { signature, .. }
            | Self::CacheStored { signature, .. }
            | Self::ExecutionTimed { signature, .. } => signature,
        }
    }

    /// Elapsed time, for timing events
    pub fn elapsed(&self) -> Option<Duration> {
        match self {
            Self::ExecutionTimed { elapsed, .. } => Some(*elapsed),
            _ => None,
        }
    }
}
