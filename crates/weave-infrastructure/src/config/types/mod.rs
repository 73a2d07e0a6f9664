//! Configuration types module

pub mod app;
pub mod aspects;
pub mod logging;

pub use app::AppConfig;
pub use aspects::{AspectsConfig, CachingAspectConfig, TimingAspectConfig};
pub use logging::LoggingConfig;
