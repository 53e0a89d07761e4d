//! Enumeration configuration.

use serde::Deserialize;

/// Defaults for enumeration runs.
#[derive(Debug, Clone, Deserialize)]
pub struct EnumerationConfig {
    /// Worker threads when `--threads` is not given (`<= 1` = sequential).
    #[serde(default = "default_threads")]
    pub default_threads: i64,

    /// Lines buffered between producers and the file writer.
    #[serde(default = "default_queue_capacity")]
    pub queue_capacity: usize,
}

const fn default_threads() -> i64 {
    50
}

const fn default_queue_capacity() -> usize {
    10_000
}

impl Default for EnumerationConfig {
    fn default() -> Self {
        Self {
            default_threads: default_threads(),
            queue_capacity: default_queue_capacity(),
        }
    }
}
