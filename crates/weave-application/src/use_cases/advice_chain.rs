//! Advice chain
//!
//! An [`AdviceChain`] is the ordered list of advices attached to one
//! target method. Selection happens once, in [`AdviceChain::build`]:
//!
//! 1. keep advices with at least one pointcut matching the descriptor
//! 2. sort by ascending priority, ties keeping registration order
//! 3. let every kept advice validate its preconditions
//!
//! After that the chain is immutable and can be shared between threads;
//! [`AdviceChain::dispatch`] never re-runs matching.

use crate::domain_services::PointcutMatcher;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace};
use weave_domain::error::{Error, Result};
use weave_domain::ports::{Advice, Invocable, Next};
use weave_domain::value_objects::{InvocationContext, TargetDescriptor, Value};

/// Ordered advices selected for one target method
#[derive(Clone)]
pub struct AdviceChain {
    descriptor: Arc<TargetDescriptor>,
    advices: Arc<[Arc<dyn Advice>]>,
}

impl AdviceChain {
    /// Select and order the advices that apply to `descriptor`
    ///
    /// Advices whose pointcuts do not match are silently left out. An
    /// attached advice whose precondition fails rejects the whole chain
    /// with `Error::ContractViolation`.
    pub fn build(descriptor: TargetDescriptor, advices: &[Arc<dyn Advice>]) -> Result<Self> {
        let mut selected: Vec<Arc<dyn Advice>> = advices
            .iter()
            .filter(|advice| Self::applies(advice.as_ref(), &descriptor))
            .cloned()
            .collect();

        // Stable sort keeps registration order among equal priorities.
        selected.sort_by_key(|advice| advice.priority());

        for advice in &selected {
            advice.validate(&descriptor)?;
        }

        debug!(
            descriptor = %descriptor,
            advices = ?selected.iter().map(|a| a.name()).collect::<Vec<_>>(),
            "Advice chain built"
        );

        Ok(Self {
            descriptor: Arc::new(descriptor),
            advices: selected.into(),
        })
    }

    /// Route one call through the chain to `target`
    ///
    /// The target is called once every advice has proceeded. Arguments
    /// that do not fit the descriptor are rejected before any advice runs.
    pub fn dispatch(&self, target: &dyn Invocable, args: &[Value]) -> Result<Value> {
        if !self.descriptor.accepts(args) {
            return Err(Error::invalid_argument(format!(
                "arguments ({}) do not fit {}",
                Value::render_list(args),
                self.descriptor.signature()
            )));
        }

        let ctx = InvocationContext::new(target, &self.descriptor, args);
        trace!(
            invocation = ctx.id(),
            signature = %self.descriptor.signature(),
            advices = self.advices.len(),
            "Dispatching call"
        );

        let terminal = |ctx: &InvocationContext<'_>| -> Result<Value> {
            ctx.target().invoke(ctx.descriptor().method(), ctx.args())
        };
        Next::new(&ctx, &self.advices, &terminal).proceed()
    }

    /// Descriptor this chain was built for
    pub fn descriptor(&self) -> &TargetDescriptor {
        &self.descriptor
    }

    /// Names of the attached advices, outermost first
    pub fn advice_names(&self) -> Vec<&str> {
        self.advices.iter().map(|advice| advice.name()).collect()
    }

    /// Number of attached advices
    pub fn len(&self) -> usize {
        self.advices.len()
    }

    /// Check whether no advice is attached
    pub fn is_empty(&self) -> bool {
        self.advices.is_empty()
    }

    fn applies(advice: &dyn Advice, descriptor: &TargetDescriptor) -> bool {
        for rule in advice.pointcuts() {
            match PointcutMatcher::check(rule, descriptor) {
                Ok(()) => return true,
                Err(reason) => trace!(advice = advice.name(), %reason, "Pointcut skipped"),
            }
        }
        debug!(
            advice = advice.name(),
            descriptor = %descriptor,
            "Advice not attached"
        );
        false
    }
}

impl fmt::Debug for AdviceChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdviceChain")
            .field("descriptor", &self.descriptor.signature())
            .field("advices", &self.advice_names())
            .finish()
    }
}
