//! Built-in aspect configuration types
//!
//! Each aspect can be switched off, reprioritized and pointed at a
//! different set of methods. Defaults reproduce the stock setup: timing
//! (priority 1) wraps caching (priority 2), caching applies to public
//! single-`i64` methods and timing to every public method.

use serde::{Deserialize, Serialize};
use weave_domain::constants::{CACHING_DEFAULT_PRIORITY, TIMING_DEFAULT_PRIORITY};
use weave_domain::value_objects::PointcutRule;
use weave_providers::{CachingAdvice, TimingAdvice};

/// Configuration of every built-in aspect
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AspectsConfig {
    /// Result caching
    #[serde(default)]
    pub caching: CachingAspectConfig,
    /// Execution timing
    #[serde(default)]
    pub timing: TimingAspectConfig,
}

/// Result caching aspect
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CachingAspectConfig {
    /// Attach the caching advice at all
    pub enabled: bool,
    /// Chain priority, lower runs outermost
    pub priority: i32,
    /// Methods the advice applies to
    pub pointcuts: Vec<PointcutRule>,
}

impl Default for CachingAspectConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            priority: CACHING_DEFAULT_PRIORITY,
            pointcuts: vec![CachingAdvice::default_pointcut()],
        }
    }
}

/// Execution timing aspect
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingAspectConfig {
    /// Attach the timing advice at all
    pub enabled: bool,
    /// Chain priority, lower runs outermost
    pub priority: i32,
    /// Methods the advice applies to
    pub pointcuts: Vec<PointcutRule>,
}

impl Default for TimingAspectConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            priority: TIMING_DEFAULT_PRIORITY,
            pointcuts: vec![TimingAdvice::default_pointcut()],
        }
    }
}
