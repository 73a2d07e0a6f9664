//! Aspect wiring
//!
//! Turns [`AspectsConfig`](crate::config::AspectsConfig) into a ready
//! advice set. Consumers take proxies from the [`AspectCatalog`] instead
//! of constructing advices by hand.

pub mod catalog;

pub use catalog::AspectCatalog;
