//! Serializable views of an analyzed ID.

use serde::{Deserialize, Serialize};

/// Breakdown of a Salesforce ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdAnalysis {
    /// 15-character form.
    pub id15: String,
    /// 18-character form: the input as supplied, or the 15-character
    /// input with its computed suffix.
    pub id18: String,
    /// Whether the input was 18 characters.
    pub is_18_char: bool,
    /// Supplied suffix, or the computed one for a 15-character input.
    pub checksum: String,
    /// Computed suffix.
    pub expected_checksum: String,
    /// Whether `checksum` equals `expected_checksum`.
    pub checksum_valid: bool,
    /// Characters 0-2.
    pub object_prefix: String,
    /// Standard object name for the prefix, or `Unknown`.
    pub object_type: String,
    /// Characters 3-5.
    pub instance_id: String,
    /// Character 6.
    pub reserved: String,
    /// Characters 7-14.
    pub record_number_base62: String,
    /// Decoded record counter.
    pub record_number: u64,
}
