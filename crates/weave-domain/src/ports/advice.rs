//! Advice Port
//!
//! An advice is a unit of behavior wrapped around a target call. The
//! chain hands every advice a [`Next`] continuation; calling
//! [`Next::proceed`] runs the rest of the chain and finally the target.
//!
//! ## Continuation rules
//!
//! | Advice does | Effect |
//! |-------------|--------|
//! | never calls `proceed` | short-circuits, its own value is the result |
//! | calls `proceed` once | passes the downstream result through or transforms it |
//!
//! `proceed` takes `self` by value and `Next` is neither `Clone` nor
//! `Copy`, so a continuation cannot run twice.

use crate::error::Result;
use crate::value_objects::{InvocationContext, PointcutRule, TargetDescriptor, Value};
use std::fmt;
use std::sync::Arc;

/// Terminal stage of a chain: the real target call
pub type TerminalCall<'a> = dyn Fn(&InvocationContext<'_>) -> Result<Value> + 'a;

/// Behavior invoked around matching target calls
///
/// Advices are shared across threads and calls; any state they keep must
/// be synchronized internally.
pub trait Advice: Send + Sync {
    /// Name used in diagnostics and errors
    fn name(&self) -> &str;

    /// Execution priority; lower runs first and sits outermost
    fn priority(&self) -> i32;

    /// Rules selecting the calls this advice applies to
    ///
    /// The advice attaches to a method when any rule matches it.
    fn pointcuts(&self) -> &[PointcutRule];

    /// Check structural preconditions for a matched descriptor
    ///
    /// Called once while the chain is built. Returning an error rejects
    /// the whole chain before any call is made.
    fn validate(&self, descriptor: &TargetDescriptor) -> Result<()> {
        let _ = descriptor;
        Ok(())
    }

    /// Run the advice for one call
    fn invoke(&self, ctx: &InvocationContext<'_>, next: Next<'_>) -> Result<Value>;
}

/// Single-use continuation into the rest of an advice chain
pub struct Next<'a> {
    ctx: &'a InvocationContext<'a>,
    remaining: &'a [Arc<dyn Advice>],
    terminal: &'a TerminalCall<'a>,
}

impl<'a> Next<'a> {
    /// Start a traversal over `advices`, ending in `terminal`
    pub fn new(
        ctx: &'a InvocationContext<'a>,
        advices: &'a [Arc<dyn Advice>],
        terminal: &'a TerminalCall<'a>,
    ) -> Self {
        Self {
            ctx,
            remaining: advices,
            terminal,
        }
    }

    /// Number of advices still ahead of the target call
    pub fn remaining(&self) -> usize {
        self.remaining.len()
    }

    /// Run the next advice, or the target when none remain
    pub fn proceed(self) -> Result<Value> {
        match self.remaining.split_first() {
            Some((advice, rest)) => {
                let next = Next {
                    ctx: self.ctx,
                    remaining: rest,
                    terminal: self.terminal,
                };
                advice.invoke(self.ctx, next)
            }
            None => (self.terminal)(self.ctx),
        }
    }
}

impl fmt::Debug for Next<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Next")
            .field("invocation", &self.ctx.id())
            .field("remaining", &self.remaining.len())
            .finish()
    }
}
