//! Error types for seqkit operations.
//!
//! This module provides the error hierarchy using `thiserror` for the
//! sequence utilities, input reading, and CLI commands.

use thiserror::Error;

/// Result type alias for seqkit operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for seqkit.
#[derive(Error, Debug)]
pub enum Error {
    /// Sequence utility errors (invalid arguments).
    #[error("sequence error: {0}")]
    Sequence(#[from] SequenceError),

    /// I/O errors (reading item lists).
    #[error("I/O error: {0}")]
    Io(#[from] IoError),

    /// CLI command errors.
    #[error("command error: {0}")]
    Command(#[from] CommandError),

    /// Configuration errors.
    #[error("configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },
}

/// Errors raised by the sequence utilities.
///
/// `chunk` is the only fallible operation; everything else treats
/// missing or empty input as a normal case.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SequenceError {
    /// An argument was outside its accepted range.
    #[error("invalid argument: {reason}")]
    InvalidArgument {
        /// Why the argument was rejected.
        reason: String,
    },
}

/// I/O-specific errors for reading item lists.
#[derive(Error, Debug)]
pub enum IoError {
    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path to the file that was not found.
        path: String,
    },

    /// Failed to read file.
    #[error("failed to read file: {path}: {reason}")]
    ReadFailed {
        /// Path to the file.
        path: String,
        /// Reason for failure.
        reason: String,
    },

    /// Generic I/O error wrapper.
    #[error("I/O error: {0}")]
    Generic(String),
}

/// CLI command-specific errors.
#[derive(Error, Debug)]
pub enum CommandError {
    /// Invalid argument provided.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Output format error.
    #[error("output format error: {0}")]
    OutputFormat(String),
}

impl SequenceError {
    /// Builds a [`SequenceError::InvalidArgument`] from any message.
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }
}

impl Error {
    /// Returns `true` if this error rejects an argument.
    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::Sequence(SequenceError::InvalidArgument { .. })
                | Self::Command(CommandError::InvalidArgument(_))
        )
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(IoError::Generic(err.to_string()))
    }
}

impl From<serde_json::Error> for CommandError {
    fn from(err: serde_json::Error) -> Self {
        Self::OutputFormat(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Command(err.into())
    }
}
