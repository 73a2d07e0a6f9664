//! Domain services
//!
//! Stateless logic operating on domain value objects.

pub mod pointcut_matcher;

pub use pointcut_matcher::PointcutMatcher;
