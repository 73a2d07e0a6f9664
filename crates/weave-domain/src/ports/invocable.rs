//! Invocable Target Port

use crate::error::Result;
use crate::value_objects::{TargetDescriptor, Value};
use std::sync::Arc;

/// A target whose methods can be called through a proxy
///
/// `descriptors` is the descriptor source: the reflective metadata of
/// every method the target exposes. `invoke` performs the real call.
///
/// # Example
///
/// ```
/// use weave_domain::{Error, Invocable, ParamType, Result, TargetDescriptor, Value};
///
/// struct Doubler;
///
/// impl Invocable for Doubler {
///     fn descriptors(&self) -> Vec<TargetDescriptor> {
///         vec![TargetDescriptor::new("demo", "Doubler", "double").with_params(vec![ParamType::I64])]
///     }
///
///     fn invoke(&self, method: &str, args: &[Value]) -> Result<Value> {
///         match (method, args) {
///             ("double", [Value::I64(n)]) => Ok(Value::I64(n * 2)),
///             _ => Err(Error::method_not_found("demo::Doubler", method)),
///         }
///     }
/// }
/// ```
pub trait Invocable: Send + Sync {
    /// Metadata of every callable method
    fn descriptors(&self) -> Vec<TargetDescriptor>;

    /// Call a method with the given arguments
    fn invoke(&self, method: &str, args: &[Value]) -> Result<Value>;
}

impl<T: Invocable + ?Sized> Invocable for Arc<T> {
    fn descriptors(&self) -> Vec<TargetDescriptor> {
        (**self).descriptors()
    }

    fn invoke(&self, method: &str, args: &[Value]) -> Result<Value> {
        (**self).invoke(method, args)
    }
}

impl<T: Invocable + ?Sized> Invocable for Box<T> {
    fn descriptors(&self) -> Vec<TargetDescriptor> {
        (**self).descriptors()
    }

    fn invoke(&self, method: &str, args: &[Value]) -> Result<Value> {
        (**self).invoke(method, args)
    }
}
