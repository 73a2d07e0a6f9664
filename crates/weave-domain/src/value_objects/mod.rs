//! Value objects
//!
//! Immutable data describing calls and the rules that select them.

pub mod cache;
pub mod descriptor;
pub mod invocation;
pub mod pointcut;
pub mod value;

pub use cache::CacheStats;
pub use descriptor::{TargetDescriptor, Visibility};
pub use invocation::InvocationContext;
pub use pointcut::{ModulePattern, NamePattern, ParamsPattern, PointcutRule};
pub use value::{ParamType, Value};
