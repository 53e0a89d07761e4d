//! Salesforce ID and its components.
//!
//! A 15-char ID is `prefix (7) + counter (8)`. The prefix is object prefix
//! (3), instance (3) and a reserved character (1). An 18-char ID appends a
//! checksum suffix derived from the case of the first 15 characters.

use std::fmt;
use std::str::FromStr;

use crate::codec::{base62, checksum};
use crate::error::{AppError, CodecError, Result};

/// Length of the opaque prefix.
pub const PREFIX_LEN: usize = 7;

/// Number of base-62 counter digits.
pub const COUNTER_LEN: usize = 8;

/// Largest counter representable in 8 base-62 digits (`62^8 - 1`).
pub const MAX_COUNTER: i64 = 218_340_105_584_895;

/// Validated 7-character ID prefix.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Prefix(String);

impl Prefix {
    /// Create a prefix from 7 alphanumeric ASCII characters.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidIdFormat`] for any other input.
    pub fn new(prefix: &str) -> Result<Self> {
        if prefix.len() != PREFIX_LEN || !prefix.bytes().all(|b| b.is_ascii_alphanumeric()) {
            return Err(AppError::InvalidIdFormat(format!(
                "prefix must be {PREFIX_LEN} alphanumeric characters"
            )));
        }
        Ok(Self(prefix.to_string()))
    }

    /// Prefix as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A 15 or 18 character Salesforce ID.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SalesforceId {
    id15: String,
    suffix: Option<String>,
}

impl SalesforceId {
    /// Parse a 15 or 18 character ID, ignoring surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidIdFormat`] for a wrong length or a
    /// non-alphanumeric character.
    pub fn parse(input: &str) -> Result<Self> {
        let id = input.trim();
        if id.is_empty() {
            return Err(AppError::InvalidIdFormat(
                "ID must be a non-empty string".to_string(),
            ));
        }

        let len = id.chars().count();
        if len != checksum::ID15_LEN && len != checksum::ID15_LEN + 3 {
            return Err(AppError::InvalidIdFormat(format!(
                "ID must be 15 or 18 characters long (got {len})"
            )));
        }
        if !id.bytes().all(|b| b.is_ascii_alphanumeric()) {
            return Err(AppError::InvalidIdFormat(
                "ID must be alphanumeric".to_string(),
            ));
        }

        let (id15, suffix) = id.split_at(checksum::ID15_LEN);
        Ok(Self {
            id15: id15.to_string(),
            suffix: (!suffix.is_empty()).then(|| suffix.to_string()),
        })
    }

    /// The 15-character form.
    #[must_use]
    pub fn id15(&self) -> &str {
        &self.id15
    }

    /// The 18-character form, with a freshly computed suffix.
    #[must_use]
    pub fn id18(&self) -> String {
        format!("{}{}", self.id15, self.expected_suffix())
    }

    /// Whether the input carried a suffix.
    #[must_use]
    pub const fn is_18_char(&self) -> bool {
        self.suffix.is_some()
    }

    /// Suffix as supplied in an 18-character input.
    #[must_use]
    pub fn supplied_suffix(&self) -> Option<&str> {
        self.suffix.as_deref()
    }

    /// Suffix computed from the 15-character form.
    #[must_use]
    pub fn expected_suffix(&self) -> String {
        let mut bytes = [0u8; checksum::ID15_LEN];
        bytes.copy_from_slice(self.id15.as_bytes());
        checksum::suffix_bytes(&bytes)
            .iter()
            .copied()
            .map(char::from)
            .collect()
    }

    /// False only when a supplied suffix disagrees with the computed one.
    #[must_use]
    pub fn checksum_matches(&self) -> bool {
        self.suffix
            .as_deref()
            .is_none_or(|s| s == self.expected_suffix())
    }

    /// First 7 characters.
    #[must_use]
    pub fn prefix(&self) -> Prefix {
        Prefix(self.id15[..PREFIX_LEN].to_string())
    }

    /// Object type prefix (characters 0-2).
    #[must_use]
    pub fn object_prefix(&self) -> &str {
        &self.id15[..3]
    }

    /// Instance identifier (characters 3-5).
    #[must_use]
    pub fn instance_id(&self) -> &str {
        &self.id15[3..6]
    }

    /// Reserved character (character 6).
    #[must_use]
    pub fn reserved(&self) -> &str {
        &self.id15[6..PREFIX_LEN]
    }

    /// Base-62 counter digits (characters 7-14).
    #[must_use]
    pub fn counter_digits(&self) -> &str {
        &self.id15[PREFIX_LEN..]
    }

    /// Decoded counter value.
    ///
    /// # Errors
    ///
    /// Returns a [`CodecError`] if the counter is not valid base 62.
    pub fn counter_value(&self) -> std::result::Result<u64, CodecError> {
        base62::decode(self.counter_digits())
    }
}

impl FromStr for SalesforceId {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for SalesforceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id15)?;
        if let Some(suffix) = &self.suffix {
            f.write_str(suffix)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_15_and_18() {
        let id = SalesforceId::parse("001Vc00000PHoN1").unwrap();
        assert_eq!(id.id15(), "001Vc00000PHoN1");
        assert!(!id.is_18_char());
        assert_eq!(id.id18(), "001Vc00000PHoN1IAL");

        let id: SalesforceId = " 001Vc00000PHoN1IAL\n".parse().unwrap();
        assert_eq!(id.id15(), "001Vc00000PHoN1");
        assert_eq!(id.supplied_suffix(), Some("IAL"));
        assert!(id.checksum_matches());
        assert_eq!(id.to_string(), "001Vc00000PHoN1IAL");
    }

    #[test]
    fn test_components() {
        let id = SalesforceId::parse("001Vc00000PHoN1IAL").unwrap();
        assert_eq!(id.prefix().as_str(), "001Vc00");
        assert_eq!(id.object_prefix(), "001");
        assert_eq!(id.instance_id(), "Vc0");
        assert_eq!(id.reserved(), "0");
        assert_eq!(id.counter_digits(), "000PHoN1");
        assert_eq!(id.counter_value().unwrap(), 373_653_603);
    }

    #[test]
    fn test_checksum_mismatch_is_not_an_error() {
        let id = SalesforceId::parse("001Vc00000PHoN1AAA").unwrap();
        assert!(!id.checksum_matches());
        assert_eq!(id.counter_value().unwrap(), 373_653_603);
    }

    #[test]
    fn test_invalid_ids() {
        for bad in ["", "   ", "001Vc00000PHoN", "001Vc00000PHoN1IA", "001Vc00000PHoN1IALX"] {
            assert!(
                matches!(SalesforceId::parse(bad), Err(AppError::InvalidIdFormat(_))),
                "{bad:?} should be rejected"
            );
        }
        assert!(matches!(
            SalesforceId::parse("001Vc00000PHo-1"),
            Err(AppError::InvalidIdFormat(_))
        ));
        assert!(matches!(
            SalesforceId::parse("001Vc00000PHoNé"),
            Err(AppError::InvalidIdFormat(_))
        ));
    }

    #[test]
    fn test_prefix_validation() {
        assert!(Prefix::new("001Vc00").is_ok());
        assert!(Prefix::new("001Vc0").is_err());
        assert!(Prefix::new("001Vc0_").is_err());
    }
}
