//! Main application configuration

use super::aspects::AspectsConfig;
use super::logging::LoggingConfig;
use serde::{Deserialize, Serialize};

/// Root of `weave.toml`
///
/// ```toml
/// [logging]
/// level = "debug"
///
/// [aspects.caching]
/// enabled = true
/// priority = 2
///
/// [[aspects.caching.pointcuts]]
/// visibility = "public"
/// params = { exact = ["i64"] }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Built-in aspect configuration
    #[serde(default)]
    pub aspects: AspectsConfig,
}
