//! # Domain Layer
//!
//! Core types and contracts for method interception.
//!
//! The domain layer knows nothing about how advices are selected or how
//! proxies are wired. It defines the vocabulary every other layer speaks:
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`error`] | Domain error type and `Result` alias |
//! | [`value_objects`] | Call descriptors, argument values, pointcut rules |
//! | [`events`] | Diagnostic events emitted by advices |
//! | [`ports`] | `Advice`, `Invocable` and `DiagnosticSink` contracts |
//! | [`constants`] | Default priorities and advice names |

pub mod constants;
pub mod error;
pub mod events;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
pub use events::DiagnosticEvent;
pub use ports::{Advice, DiagnosticSink, Invocable, Next};
pub use value_objects::{
    CacheStats, InvocationContext, ModulePattern, NamePattern, ParamType, ParamsPattern,
    PointcutRule, TargetDescriptor, Value, Visibility,
};
