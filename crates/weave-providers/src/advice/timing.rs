//! Execution timing advice

use crate::utils::TimedOperation;
use std::sync::Arc;
use weave_domain::constants::{TIMING_ADVICE_NAME, TIMING_DEFAULT_PRIORITY};
use weave_domain::error::Result;
use weave_domain::events::DiagnosticEvent;
use weave_domain::ports::{Advice, DiagnosticSink, Next};
use weave_domain::value_objects::{InvocationContext, PointcutRule, Value};

/// Advice measuring the wall-clock time of the rest of the chain
///
/// Emits one `ExecutionTimed` event per call, for successes and failures
/// alike, and keeps no history of its own.
pub struct TimingAdvice {
    priority: i32,
    pointcuts: Vec<PointcutRule>,
    sink: Arc<dyn DiagnosticSink>,
}

impl TimingAdvice {
    /// Create a timing advice reporting to `sink`
    pub fn new(sink: Arc<dyn DiagnosticSink>) -> Self {
        Self {
            priority: TIMING_DEFAULT_PRIORITY,
            pointcuts: vec![Self::default_pointcut()],
            sink,
        }
    }

    /// Every public method
    pub fn default_pointcut() -> PointcutRule {
        PointcutRule::default().public()
    }

    /// Override the priority
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Replace the pointcuts
    pub fn with_pointcuts(mut self, pointcuts: Vec<PointcutRule>) -> Self {
        self.pointcuts = pointcuts;
        self
    }
}

impl Advice for TimingAdvice {
    fn name(&self) -> &str {
        TIMING_ADVICE_NAME
    }

    fn priority(&self) -> i32 {
        self.priority
    }

    fn pointcuts(&self) -> &[PointcutRule] {
        &self.pointcuts
    }

    fn invoke(&self, ctx: &InvocationContext<'_>, next: Next<'_>) -> Result<Value> {
        let timer = TimedOperation::start();
        let result = next.proceed();
        let elapsed = timer.elapsed();

        self.sink.emit(DiagnosticEvent::ExecutionTimed {
            signature: ctx.descriptor().signature(),
            arguments: Value::render_list(ctx.args()),
            elapsed,
            succeeded: result.is_ok(),
        });
        result
    }
}
