//! Process exit status constants.
//!
//! Statuses:
//! - 0: Success
//! - 1: Internal/System errors (configuration, runtime)
//! - 2: Validation errors (bad ID, missing or out-of-range arguments)
//! - 3: Empty result (no values generated)
//! - 4: Output errors (file or console write failure)

/// Process exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExitStatus(u8);

impl ExitStatus {
    /// Run completed.
    pub const SUCCESS: Self = Self(0);

    /// Configuration could not be loaded or the runtime failed.
    pub const FAILURE: Self = Self(1);

    /// Invalid ID, missing enumeration argument, or out-of-range start.
    pub const INVALID_INPUT: Self = Self(2);

    /// The requested sequence produced no values.
    pub const EMPTY_SEQUENCE: Self = Self(3);

    /// Writing results failed.
    pub const WRITE_FAILURE: Self = Self(4);
}

impl From<ExitStatus> for std::process::ExitCode {
    fn from(status: ExitStatus) -> Self {
        Self::from(status.0)
    }
}
