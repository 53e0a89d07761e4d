//! Base-62 codec over the Salesforce alphabet (`0-9`, `A-Z`, `a-z`).

use crate::error::CodecError;

/// Salesforce base-62 alphabet, zero symbol first.
pub const ALPHABET: &[u8; 62] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Number of symbols in the alphabet.
pub const BASE: u64 = 62;

/// Position of `byte` in [`ALPHABET`].
#[must_use]
pub const fn index_of(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'A'..=b'Z' => Some(byte - b'A' + 10),
        b'a'..=b'z' => Some(byte - b'a' + 36),
        _ => None,
    }
}

/// Encode `n` in base 62, left-padded with `'0'` to at least `min_len` characters.
///
/// Zero encodes as a single `'0'` before padding.
#[must_use]
pub fn encode(mut n: u64, min_len: usize) -> String {
    // u64::MAX needs 11 digits
    let mut digits = Vec::with_capacity(min_len.max(11));
    loop {
        #[allow(clippy::cast_possible_truncation)]
        digits.push(ALPHABET[(n % BASE) as usize]);
        n /= BASE;
        if n == 0 {
            break;
        }
    }
    while digits.len() < min_len {
        digits.push(ALPHABET[0]);
    }
    digits.reverse();
    digits.into_iter().map(char::from).collect()
}

/// Decode a base-62 string, most-significant digit first.
///
/// # Errors
///
/// Returns [`CodecError::InvalidCharacter`] for a symbol outside the alphabet
/// and [`CodecError::Overflow`] if the value does not fit in a `u64`.
pub fn decode(s: &str) -> Result<u64, CodecError> {
    s.chars().enumerate().try_fold(0u64, |acc, (position, ch)| {
        let digit = u8::try_from(ch)
            .ok()
            .and_then(index_of)
            .ok_or(CodecError::InvalidCharacter { ch, position })?;
        acc.checked_mul(BASE)
            .and_then(|v| v.checked_add(u64::from(digit)))
            .ok_or(CodecError::Overflow)
    })
}
