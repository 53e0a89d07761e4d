//! Error handling module.
//!
//! This module provides unified error handling with a mapping from every
//! failure to a documented process exit status.

pub mod codes;

pub use codes::ExitStatus;

/// Application-level error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Input is not a 15 or 18 character alphanumeric ID.
    #[error("Invalid Salesforce ID: {0}")]
    InvalidIdFormat(String),

    /// Base-62 or checksum failure.
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// An enumeration argument was not supplied.
    #[error("{0}")]
    MissingRequiredArgument(MissingArgument),

    /// `--start` outside the counter range.
    #[error("--start must be between 0 and {max} (got {value})")]
    OutOfRangeStart {
        /// Supplied start value.
        value: i64,
        /// Largest representable counter.
        max: i64,
    },

    /// Generation produced zero values.
    #[error("No values generated (sequence may have exceeded bounds)")]
    EmptySequence,

    /// Writing results failed.
    #[error("Error writing to {target}: {source}")]
    WriteFailure {
        /// Output file path or `stdout`.
        target: String,
        /// Underlying sink error.
        #[source]
        source: SinkError,
    },

    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Get the exit status for this error.
    #[must_use]
    pub const fn exit_status(&self) -> ExitStatus {
        match self {
            Self::InvalidIdFormat(_)
            | Self::Codec(_)
            | Self::MissingRequiredArgument(_)
            | Self::OutOfRangeStart { .. } => ExitStatus::INVALID_INPUT,
            Self::EmptySequence => ExitStatus::EMPTY_SEQUENCE,
            Self::WriteFailure { .. } => ExitStatus::WRITE_FAILURE,
            Self::Config(_) | Self::Internal(_) => ExitStatus::FAILURE,
        }
    }
}

/// Enumeration arguments that can be missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MissingArgument {
    /// `--seq` absent or zero.
    #[error("--seq must be provided and non-zero for enumeration modes")]
    Seq,

    /// `--start` absent for `enum-from-value`.
    #[error("--start must be provided for --mode enum-from-value")]
    Start,
}

/// Base-62 and checksum error type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    /// Character outside `0-9A-Za-z`.
    #[error("Invalid Base62 character {ch:?} at position {position}")]
    InvalidCharacter {
        /// Offending character.
        ch: char,
        /// Zero-based character position.
        position: usize,
    },

    /// Decoded value does not fit in 64 bits.
    #[error("Base62 value overflows 64 bits")]
    Overflow,

    /// Input has the wrong number of characters.
    #[error("Expected exactly {expected} characters, got {actual}")]
    WrongLength {
        /// Required length.
        expected: usize,
        /// Supplied length.
        actual: usize,
    },
}

/// Output sink error type.
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    /// File or console I/O error.
    #[error("I/O error: {0}")]
    FileIO(String),

    /// Another process holds the output file lock.
    #[error("Output file is locked: {0}")]
    Locked(String),

    /// The writer stopped accepting lines.
    #[error("Writer closed before all lines were delivered")]
    WriterClosed,
}

impl From<std::io::Error> for SinkError {
    fn from(err: std::io::Error) -> Self {
        Self::FileIO(err.to_string())
    }
}

/// Result type alias using `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Result type alias using `SinkError`.
pub type SinkResult<T> = std::result::Result<T, SinkError>;
