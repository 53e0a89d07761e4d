//! Counter value sequences.

use super::id::MAX_COUNTER;

/// Bounded run of counter values starting at `start`.
///
/// `|seq|` values are produced, stepping `+1` for a positive `seq` and `-1`
/// for a negative one. The sequence stops at the first value outside
/// `0..=MAX_COUNTER` instead of clamping or wrapping.
#[derive(Debug, Clone)]
pub struct CounterSequence {
    current: i64,
    remaining: u64,
    step: i64,
}

impl CounterSequence {
    /// Create a new sequence.
    #[must_use]
    pub const fn new(start: i64, seq: i64) -> Self {
        Self {
            current: start,
            remaining: seq.unsigned_abs(),
            step: if seq > 0 { 1 } else { -1 },
        }
    }

    /// Check whether no further values will be produced.
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.remaining == 0 || self.current < 0 || self.current > MAX_COUNTER
    }

    /// Number of values left before a boundary or the requested count.
    #[must_use]
    pub const fn len_remaining(&self) -> u64 {
        if self.is_exhausted() {
            return 0;
        }
        #[allow(clippy::cast_sign_loss)]
        let room = if self.step > 0 {
            (MAX_COUNTER - self.current) as u64 + 1
        } else {
            self.current as u64 + 1
        };
        if room < self.remaining {
            room
        } else {
            self.remaining
        }
    }
}

/// Generate counter values for `start` and signed count `seq`.
#[must_use]
pub const fn generate(start: i64, seq: i64) -> CounterSequence {
    CounterSequence::new(start, seq)
}

impl Iterator for CounterSequence {
    type Item = i64;

    fn next(&mut self) -> Option<Self::Item> {
        if self.is_exhausted() {
            self.remaining = 0;
            return None;
        }

        let value = self.current;
        self.remaining -= 1;
        match self.current.checked_add(self.step) {
            Some(next) => self.current = next,
            None => self.remaining = 0,
        }
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.len_remaining()).unwrap_or(usize::MAX);
        (remaining, Some(remaining))
    }
}

impl std::iter::FusedIterator for CounterSequence {}
