//! Configuration
//!
//! [`ConfigLoader`] layers defaults, a `weave.toml` file and `WEAVE__*`
//! environment variables with figment, then validates the result.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, AspectsConfig, CachingAspectConfig, LoggingConfig, TimingAspectConfig};
