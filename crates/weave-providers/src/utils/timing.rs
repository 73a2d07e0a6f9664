//! Timing instrumentation helpers

use std::time::{Duration, Instant};

/// Wall-clock stopwatch for one operation
///
/// # Example
///
/// ```
/// use weave_providers::utils::TimedOperation;
///
/// let timer = TimedOperation::start();
/// let elapsed = timer.elapsed();
/// assert!(elapsed.as_secs() < 60);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TimedOperation {
    start: Instant,
}

impl TimedOperation {
    /// Start measuring now
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Elapsed time as Duration
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}
