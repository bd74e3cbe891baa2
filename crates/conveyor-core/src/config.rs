//! Application configuration schemas.
//!
//! Configuration structs are deserialized from TOML files via the `config`
//! crate, with an environment-variable overlay prefixed `CONVEYOR`.

use serde::{Deserialize, Serialize};

use crate::error::ConveyorError;

/// Root application configuration.
///
/// Top-level deserialization target for the merged TOML configuration files
/// (default.toml + environment overlay).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Job execution settings.
    #[serde(default)]
    pub execution: ExecutionConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Job execution configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExecutionConfig {
    /// Whether a body failure absorbed by an around hook is re-raised to the
    /// caller instead of being reported as a suppressed outcome.
    #[serde(default)]
    pub propagate_suppressed_failures: bool,
}

/// Logging and tracing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: `"trace"`, `"debug"`, `"info"`, `"warn"`, `"error"`.
    #[serde(default = "default_level")]
    pub level: String,
    /// Log format: `"json"` or `"pretty"`.
    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: default_format(),
        }
    }
}

impl AppConfig {
    /// Load configuration from TOML files.
    ///
    /// Merges the default configuration with an environment-specific overlay
    /// and environment variables prefixed with `CONVEYOR`.
    pub fn load(env: &str) -> Result<Self, ConveyorError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("CONVEYOR")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| ConveyorError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| ConveyorError::configuration(format!("Failed to deserialize config: {e}")))
    }
}

fn default_level() -> String {
    "info".to_string()
}

fn default_format() -> String {
    "pretty".to_string()
}
