//! ID composition from a prefix and a counter value.

use crate::codec::{base62, checksum};
use crate::domain::{COUNTER_LEN, MAX_COUNTER, Prefix};

/// A composed ID with the values that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedId {
    /// 15 or 18 character output ID.
    pub id: String,
    /// The 8 base-62 counter digits.
    pub counter_digits: String,
    /// Counter value after clamping.
    pub value: i64,
}

/// Force `value` into `0..=MAX_COUNTER`.
#[must_use]
pub const fn clamp_counter(value: i64) -> i64 {
    if value < 0 {
        0
    } else if value > MAX_COUNTER {
        MAX_COUNTER
    } else {
        value
    }
}

/// Compose `prefix + counter` with an optional checksum suffix.
///
/// Out-of-range values are clamped, never rejected.
#[must_use]
pub fn compose(prefix: &Prefix, value: i64, emit_suffix: bool) -> ComposedId {
    let value = clamp_counter(value);
    #[allow(clippy::cast_sign_loss)]
    let counter_digits = base62::encode(value as u64, COUNTER_LEN);

    let mut id = String::with_capacity(checksum::ID15_LEN + 3);
    id.push_str(prefix.as_str());
    id.push_str(&counter_digits);

    if emit_suffix {
        let mut id15 = [0u8; checksum::ID15_LEN];
        id15.copy_from_slice(id.as_bytes());
        id.extend(checksum::suffix_bytes(&id15).iter().copied().map(char::from));
    }

    ComposedId {
        id,
        counter_digits,
        value,
    }
}

/// Composer bound to one prefix and output width.
#[derive(Debug, Clone)]
pub struct IdComposer {
    prefix: Prefix,
    emit_suffix: bool,
}

impl IdComposer {
    /// Create a new composer.
    #[must_use]
    pub const fn new(prefix: Prefix, emit_suffix: bool) -> Self {
        Self {
            prefix,
            emit_suffix,
        }
    }

    /// Compose the ID for `value`.
    #[must_use]
    pub fn compose(&self, value: i64) -> ComposedId {
        compose(&self.prefix, value, self.emit_suffix)
    }
}
