//! Output configuration.

use serde::Deserialize;

/// Output file naming.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// `chrono` format string for the default filename timestamp.
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
}

fn default_timestamp_format() -> String {
    "%Y%m%d-%H%M%S".to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            timestamp_format: default_timestamp_format(),
        }
    }
}
