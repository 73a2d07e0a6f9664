//! Result caching advice
//!
//! Caches the result of methods taking exactly one `i64` argument, keyed
//! by that argument.
//!
//! ## Behavior
//!
//! - hit: the stored value is returned and the rest of the chain is skipped
//! - miss: the chain runs, a successful result is stored and returned
//! - failure: propagated unchanged, nothing is stored
//!
//! Concurrent misses on the same key may both reach the target; there is
//! no single-flight de-duplication. The first stored result is kept.
//!
//! The key is the argument alone. Every method one advice matches shares
//! its store, so `double(5)` and `square(5)` behind the same advice return
//! whichever result was stored first. Narrow the pointcuts, or give each
//! method its own advice and store, when that is not wanted.

use crate::cache::ResultCache;
use std::sync::Arc;
use tracing::trace;
use weave_domain::constants::{CACHING_ADVICE_NAME, CACHING_DEFAULT_PRIORITY};
use weave_domain::error::{Error, Result};
use weave_domain::events::DiagnosticEvent;
use weave_domain::ports::{Advice, DiagnosticSink, Next};
use weave_domain::value_objects::{
    InvocationContext, ParamType, PointcutRule, TargetDescriptor, Value,
};

/// Advice substituting stored results for repeated calls
pub struct CachingAdvice {
    priority: i32,
    pointcuts: Vec<PointcutRule>,
    cache: Arc<ResultCache>,
    sink: Arc<dyn DiagnosticSink>,
}

impl CachingAdvice {
    /// Create a caching advice over an injected store
    ///
    /// Uses [`CachingAdvice::default_pointcut`] and the default priority.
    pub fn new(cache: Arc<ResultCache>, sink: Arc<dyn DiagnosticSink>) -> Self {
        Self {
            priority: CACHING_DEFAULT_PRIORITY,
            pointcuts: vec![Self::default_pointcut()],
            cache,
            sink,
        }
    }

    /// Public methods in any module taking a single `i64`
    ///
    /// All matched methods, across targets, share one key space. Scope it with
    /// [`PointcutRule::in_module_tree`] or [`PointcutRule::method_named`]
    /// for anything beyond a single cached method.
    pub fn default_pointcut() -> PointcutRule {
        PointcutRule::default()
            .public()
            .with_params(vec![ParamType::I64])
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

    /// The backing store
    pub fn cache(&self) -> &Arc<ResultCache> {
        &self.cache
    }

    fn key(ctx: &InvocationContext<'_>) -> Result<i64> {
        ctx.first_arg().and_then(Value::as_i64).ok_or_else(|| {
            Error::contract_violation(
                CACHING_ADVICE_NAME,
                ctx.descriptor().signature(),
                "first argument is not an i64",
            )
        })
    }
}

impl Advice for CachingAdvice {
    fn name(&self) -> &str {
        CACHING_ADVICE_NAME
    }

    fn priority(&self) -> i32 {
        self.priority
    }

    fn pointcuts(&self) -> &[PointcutRule] {
        &self.pointcuts
    }

    fn validate(&self, descriptor: &TargetDescriptor) -> Result<()> {
        if descriptor.params() == [ParamType::I64] {
            Ok(())
        } else {
            Err(Error::contract_violation(
                self.name(),
                descriptor.signature(),
                "caching requires exactly one i64 parameter",
            ))
        }
    }

    fn invoke(&self, ctx: &InvocationContext<'_>, next: Next<'_>) -> Result<Value> {
        let key = Self::key(ctx)?;
        let signature = ctx.descriptor().signature();

        if let Some(value) = self.cache.lookup(key) {
            trace!(invocation = ctx.id(), key, "Cache hit");
            self.sink.emit(DiagnosticEvent::CacheHit {
                signature,
                key,
                value: value.clone(),
            });
            return Ok(value);
        }

        let value = next.proceed()?;
        if self.cache.insert(key, value.clone()) {
            self.sink.emit(DiagnosticEvent::CacheStored {
                signature,
                key,
                value: value.clone(),
            });
        } else {
            trace!(invocation = ctx.id(), key, "Concurrent miss, kept earlier entry");
        }
        Ok(value)
    }
}
