//! ID analysis: component breakdown and checksum validation.

use crate::domain::{IdAnalysis, SalesforceId};
use crate::error::CodecError;

/// Common standard object key prefixes.
const OBJECT_PREFIXES: &[(&str, &str)] = &[
    ("001", "Account"),
    ("002", "Note"),
    ("003", "Contact"),
    ("005", "User"),
    ("006", "Opportunity"),
    ("007", "Activity"),
    ("008", "OpportunityHistory"),
    ("00D", "Organization"),
    ("00E", "UserRole"),
    ("00G", "Group"),
    ("00I", "AccountTeamMember"),
    ("00N", "CustomFieldDefinition"),
    ("00O", "Report"),
    ("00Q", "Lead"),
    ("00T", "Task"),
    ("015", "Dashboard"),
    ("500", "Case"),
    ("501", "Solution"),
    ("701", "Campaign"),
    ("800", "Contract"),
];

/// Label used when the prefix is not in the table.
pub const UNKNOWN_OBJECT: &str = "Unknown";

/// Standard object name for a 3-character key prefix.
#[must_use]
pub fn object_type(prefix: &str) -> Option<&'static str> {
    OBJECT_PREFIXES
        .iter()
        .find(|(p, _)| *p == prefix)
        .map(|(_, name)| *name)
}

/// Break an ID into its components.
///
/// # Errors
///
/// Returns a [`CodecError`] if the counter digits cannot be decoded.
pub fn analyze(id: &SalesforceId) -> Result<IdAnalysis, CodecError> {
    let record_number = id.counter_value()?;
    let expected_checksum = id.expected_suffix();
    let checksum = id
        .supplied_suffix()
        .map_or_else(|| expected_checksum.clone(), str::to_string);
    let id18 = id
        .supplied_suffix()
        .map_or_else(|| id.id18(), |suffix| format!("{}{suffix}", id.id15()));

    Ok(IdAnalysis {
        id15: id.id15().to_string(),
        id18,
        is_18_char: id.is_18_char(),
        checksum_valid: checksum == expected_checksum,
        checksum,
        expected_checksum,
        object_prefix: id.object_prefix().to_string(),
        object_type: object_type(id.object_prefix())
            .unwrap_or(UNKNOWN_OBJECT)
            .to_string(),
        instance_id: id.instance_id().to_string(),
        reserved: id.reserved().to_string(),
        record_number_base62: id.counter_digits().to_string(),
        record_number,
    })
}
