//! Proxies
//!
//! A [`Proxy`] stands in for a target and routes every call through the
//! advice chain built for the called method. Chains are built once, when
//! the proxy is created, from the target's own descriptors.
//!
//! A proxy is itself [`Invocable`], so proxies can wrap proxies.

use super::advice_chain::AdviceChain;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::info;
use weave_domain::error::{Error, Result};
use weave_domain::ports::{Advice, Invocable};
use weave_domain::value_objects::{TargetDescriptor, Value};

/// Create a proxy around `target` with the given advice set
///
/// Equivalent to [`Proxy::new`].
pub fn create_proxy<T>(target: Arc<T>, advices: &[Arc<dyn Advice>]) -> Result<Proxy<T>>
where
    T: Invocable + ?Sized,
{
    Proxy::new(target, advices)
}

/// Stand-in that intercepts calls to a target
pub struct Proxy<T: Invocable + ?Sized> {
    target: Arc<T>,
    descriptors: Vec<TargetDescriptor>,
    chains: HashMap<String, AdviceChain>,
}

impl<T: Invocable + ?Sized> Proxy<T> {
    /// Build one advice chain per method the target describes
    ///
    /// Fails when the target describes the same method name twice or
    /// when an attached advice rejects a method's descriptor.
    pub fn new(target: Arc<T>, advices: &[Arc<dyn Advice>]) -> Result<Self> {
        let descriptors = target.descriptors();
        let mut chains = HashMap::with_capacity(descriptors.len());

        for descriptor in &descriptors {
            let method = descriptor.method().to_string();
            if chains.contains_key(&method) {
                return Err(Error::invalid_argument(format!(
                    "method '{}' is described more than once by {}",
                    method,
                    descriptor.qualified_type()
                )));
            }
            let chain = AdviceChain::build(descriptor.clone(), advices)?;
            chains.insert(method, chain);
        }

        info!(
            methods = descriptors.len(),
            advised = chains.values().filter(|chain| !chain.is_empty()).count(),
            "Proxy created"
        );

        Ok(Self {
            target,
            descriptors,
            chains,
        })
    }

    /// Call `method` on the target through its advice chain
    pub fn invoke(&self, method: &str, args: &[Value]) -> Result<Value> {
        let chain = self
            .chains
            .get(method)
            .ok_or_else(|| Error::method_not_found(self.target_name(), method))?;

        chain.dispatch(&self.target, args)
    }

    /// The wrapped target
    pub fn target(&self) -> &Arc<T> {
        &self.target
    }

    /// Chain built for `method`, if the target has it
    pub fn chain(&self, method: &str) -> Option<&AdviceChain> {
        self.chains.get(method)
    }

    /// Descriptors of every proxied method
    pub fn descriptors(&self) -> &[TargetDescriptor] {
        &self.descriptors
    }

    fn target_name(&self) -> String {
        self.descriptors
            .first()
            .map(TargetDescriptor::qualified_type)
            .unwrap_or_else(|| "<no methods>".to_string())
    }
}

impl<T: Invocable + ?Sized> Invocable for Proxy<T> {
    fn descriptors(&self) -> Vec<TargetDescriptor> {
        self.descriptors.clone()
    }

    fn invoke(&self, method: &str, args: &[Value]) -> Result<Value> {
        Proxy::invoke(self, method, args)
    }
}

impl<T: Invocable + ?Sized> fmt::Debug for Proxy<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut chains: Vec<_> = self.chains.values().collect();
        chains.sort_by_key(|chain| chain.descriptor().method().to_string());
        f.debug_struct("Proxy").field("chains", &chains).finish()
    }
}
