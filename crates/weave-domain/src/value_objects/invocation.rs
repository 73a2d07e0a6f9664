//! Per-call invocation context

use super::descriptor::TargetDescriptor;
use super::value::Value;
use crate::ports::Invocable;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_INVOCATION_ID: AtomicU64 = AtomicU64::new(1);

/// Data describing one call travelling through an advice chain
///
/// Created when the call enters the proxy and dropped when it returns.
/// The context only borrows the target, descriptor and arguments, so it
/// cannot outlive the call it belongs to.
pub struct InvocationContext<'a> {
    id: u64,
    target: &'a dyn Invocable,
    descriptor: &'a TargetDescriptor,
    args: &'a [Value],
}

impl<'a> InvocationContext<'a> {
    /// Create a context with a fresh invocation id
    pub fn new(target: &'a dyn Invocable, descriptor: &'a TargetDescriptor, args: &'a [Value]) -> Self {
        Self {
            id: NEXT_INVOCATION_ID.fetch_add(1, Ordering::Relaxed),
            target,
            descriptor,
            args,
        }
    }

    /// Process-unique id of this call
    pub fn id(&self) -> u64 {
        self.id
    }

    /// The object being called
    ///
    /// Calling it directly bypasses the advice chain.
    pub fn target(&self) -> &'a dyn Invocable {
        self.target
    }

    /// Descriptor of the method being called
    pub fn descriptor(&self) -> &'a TargetDescriptor {
        self.descriptor
    }

    /// Call arguments, in declaration order
    pub fn args(&self) -> &'a [Value] {
        self.args
    }

    /// First argument, if any
    pub fn first_arg(&self) -> Option<&'a Value> {
        self.args.first()
    }
}

impl fmt::Debug for InvocationContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InvocationContext")
            .field("id", &self.id)
            .field("descriptor", &self.descriptor.signature())
            .field("args", &self.args)
            .finish()
    }
}
