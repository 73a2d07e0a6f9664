//! Infrastructure layer constants
//!
//! Domain-level constants (default priorities, advice names) live in
//! `weave_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "weave.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "weave";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "WEAVE";

/// Separator for nested keys in configuration environment variables
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Environment variable overriding the configured log filter
pub const LOG_ENV_VAR: &str = "WEAVE_LOG";

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// File name stem for rolling log files
pub const DEFAULT_LOG_FILE_STEM: &str = "weave";
