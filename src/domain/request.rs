//! Enumeration request.

use super::id::{MAX_COUNTER, Prefix, SalesforceId};
use super::sequence::{CounterSequence, generate};
use crate::error::{AppError, MissingArgument, Result};

/// Where enumeration starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartFrom {
    /// Explicit counter value.
    Value(Option<i64>),
    /// The counter of the input ID.
    Current,
}

/// A single enumeration run: prefix, first counter value and signed count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumerationRequest {
    /// Prefix shared by every generated ID.
    pub prefix: Prefix,
    /// First counter value.
    pub start_value: i64,
    /// Signed number of values; the sign selects the direction.
    pub seq: i64,
}

impl EnumerationRequest {
    /// Build and validate a request from an input ID.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::MissingRequiredArgument`] when `seq` is absent or
    /// zero, or a start value is required but absent, and
    /// [`AppError::OutOfRangeStart`] when an explicit start is outside
    /// `0..=MAX_COUNTER`.
    pub fn new(id: &SalesforceId, start: StartFrom, seq: Option<i64>) -> Result<Self> {
        let seq = seq
            .filter(|&s| s != 0)
            .ok_or(AppError::MissingRequiredArgument(MissingArgument::Seq))?;

        let start_value = match start {
            StartFrom::Value(None) => {
                return Err(AppError::MissingRequiredArgument(MissingArgument::Start));
            }
            StartFrom::Value(Some(value)) => {
                if !(0..=MAX_COUNTER).contains(&value) {
                    return Err(AppError::OutOfRangeStart {
                        value,
                        max: MAX_COUNTER,
                    });
                }
                value
            }
            StartFrom::Current => {
                let current = id.counter_value()?;
                i64::try_from(current).map_err(|_| AppError::OutOfRangeStart {
                    value: i64::MAX,
                    max: MAX_COUNTER,
                })?
            }
        };

        Ok(Self {
            prefix: id.prefix(),
            start_value,
            seq,
        })
    }

    /// Counter values for this request.
    #[must_use]
    pub const fn values(&self) -> CounterSequence {
        generate(self.start_value, self.seq)
    }
}
