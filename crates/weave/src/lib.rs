//! # Weave
//!
//! Method interception for Rust: wrap a target in a [`Proxy`] and every
//! call runs through an ordered chain of around-advices selected by
//! declarative pointcuts.
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use weave::calculator::{Calculator, CalculatorProxy, RecCalculator};
//! use weave::infrastructure::AspectCatalog;
//! use weave::infrastructure::config::AspectsConfig;
//! use weave::providers::NullDiagnosticSink;
//!
//! let catalog =
//!     AspectCatalog::from_config(&AspectsConfig::default(), Arc::new(NullDiagnosticSink::new()))
//!         .unwrap();
//! let calculator = CalculatorProxy::new(catalog.proxy(Arc::new(RecCalculator)).unwrap());
//!
//! assert_eq!(calculator.factorial(5).unwrap(), 120);
//! assert_eq!(calculator.factorial(5).unwrap(), 120);
//! assert_eq!(catalog.cache_stats().hits, 1);
//! ```
//!
//! ## Architecture
//!
//! - `domain` - descriptors, values, pointcut rules, ports and errors
//! - `application` - pointcut matching, advice chains and proxies
//! - `providers` - caching and timing advices, diagnostic sinks
//! - `infrastructure` - configuration, logging and the aspect catalog

/// Domain layer - core types and ports
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use weave_domain::*;
}

/// Application layer - matching, chains and proxies
pub mod application {
    pub use weave_application::*;
}

/// Provider implementations - advices and diagnostic sinks
pub mod providers {
    pub use weave_providers::*;
}

/// Infrastructure layer - configuration, logging and wiring
pub mod infrastructure {
    pub use weave_infrastructure::*;
}

pub mod calculator;

// Re-export commonly used types at the crate root
pub use application::{AdviceChain, Proxy, create_proxy};
pub use domain::*;
pub use infrastructure::AspectCatalog;
