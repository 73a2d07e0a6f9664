//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns around the interception core.
//!
//! ### Configuration & Wiring
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Layered TOML/environment configuration via figment |
//! | [`di`] | Aspect catalog turning configuration into advices and proxies |
//! | [`constants`] | Configuration and logging constants |
//!
//! ### Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Structured logging with tracing |
//! | [`error_ext`] | Context helpers converting foreign errors |

pub mod config;
pub mod constants;
pub mod di;
pub mod error_ext;
pub mod logging;

// Re-export commonly used types
pub use config::{AppConfig, ConfigLoader};
pub use di::AspectCatalog;
pub use error_ext::ErrorContext;
