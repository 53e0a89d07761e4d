//! Configuration management module.
//!
//! Supports loading configuration from:
//! - `config/default.{toml,yaml,json,...}` in the working directory
//! - A file named by `SFIDENUM_CONFIG`
//! - Environment variables with `SFIDENUM__<SECTION>__<KEY>` pattern

mod enumeration;
mod output;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

pub use enumeration::EnumerationConfig;
pub use output::OutputConfig;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Enumeration defaults.
    #[serde(default)]
    pub enumeration: EnumerationConfig,

    /// Output file naming.
    #[serde(default)]
    pub output: OutputConfig,

    /// Observability configuration.
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

impl AppConfig {
    /// Load configuration from files and environment.
    ///
    /// Configuration is loaded in the following order (later sources override earlier):
    /// 1. `.env` (via `dotenvy`, if present)
    /// 2. `config/default`
    /// 3. The file named by `SFIDENUM_CONFIG` (if set)
    /// 4. Environment variables with `SFIDENUM__` prefix
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let mut builder =
            Config::builder().add_source(File::with_name("config/default").required(false));

        if let Ok(path) = std::env::var("SFIDENUM_CONFIG") {
            builder = builder.add_source(File::with_name(&path).required(true));
        }

        // SFIDENUM__ENUMERATION__DEFAULT_THREADS=8 -> enumeration.default_threads = 8
        let config = builder
            .add_source(
                Environment::with_prefix("SFIDENUM")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let app_config: Self = config.try_deserialize()?;
        app_config.validate()?;

        Ok(app_config)
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.enumeration.queue_capacity == 0 {
            return Err(ConfigError::Message(
                "enumeration.queue_capacity cannot be 0".to_string(),
            ));
        }

        if self.output.timestamp_format.is_empty() {
            return Err(ConfigError::Message(
                "output.timestamp_format cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ObservabilityConfig {
    /// Log level.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log format: "text" or "json".
    #[serde(default = "default_log_format")]
    pub log_format: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: default_log_format(),
        }
    }
}
