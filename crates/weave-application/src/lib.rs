//! # Application Layer
//!
//! Drives method interception on top of the domain contracts.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`domain_services`] | Pointcut matching |
//! | [`use_cases`] | Advice chain construction and dispatch, proxies |
//!
//! ## Flow
//!
//! ```text
//! create_proxy(target, advices)
//!     └─ per method descriptor: AdviceChain::build
//!            └─ PointcutMatcher selects advices, sorted by priority
//! proxy.invoke(method, args)
//!     └─ AdviceChain::dispatch → advice₁ → advice₂ → … → target
//! ```

pub mod domain_services;
pub mod use_cases;

pub use domain_services::PointcutMatcher;
pub use use_cases::{AdviceChain, Proxy, create_proxy};
