//! 15 to 18 character checksum suffix.
//!
//! The 15-char ID is split into three 5-char segments. Each segment is read
//! right to left, emitting a `1` bit for an uppercase letter and `0`
//! otherwise; the resulting 5-bit value indexes [`SUFFIX_ALPHABET`].

use crate::error::CodecError;

/// Suffix symbols for 5-bit values `0..=31`.
pub const SUFFIX_ALPHABET: &[u8; 32] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ012345";

/// Length of an ID without the suffix.
pub const ID15_LEN: usize = 15;

const SEGMENT_LEN: usize = 5;

/// Compute the suffix for a 15-byte ID.
#[must_use]
pub fn suffix_bytes(id15: &[u8; ID15_LEN]) -> [u8; 3] {
    let mut suffix = [0u8; 3];
    for (slot, segment) in suffix.iter_mut().zip(id15.chunks_exact(SEGMENT_LEN)) {
        // Last character of the segment is the most significant bit.
        let index = segment
            .iter()
            .rev()
            .fold(0usize, |acc, b| (acc << 1) | usize::from(b.is_ascii_uppercase()));
        *slot = SUFFIX_ALPHABET[index];
    }
    suffix
}

/// Compute the 3-character suffix for a 15-character ID.
///
/// # Errors
///
/// Returns [`CodecError::WrongLength`] unless `id15` is exactly 15 bytes.
pub fn suffix_for(id15: &str) -> Result<String, CodecError> {
    let bytes: &[u8; ID15_LEN] = id15.as_bytes().try_into().map_err(|_| CodecError::WrongLength {
        expected: ID15_LEN,
        actual: id15.chars().count(),
    })?;
    Ok(suffix_bytes(bytes).iter().copied().map(char::from).collect())
}

/// Append the checksum suffix to a 15-character ID.
///
/// # Errors
///
/// Returns [`CodecError::WrongLength`] unless `id15` is exactly 15 bytes.
pub fn id15_to_18(id15: &str) -> Result<String, CodecError> {
    let suffix = suffix_for(id15)?;
    Ok(format!("{id15}{suffix}"))
}
