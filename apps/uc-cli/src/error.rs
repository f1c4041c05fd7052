//! Error types for the interactive shell.

use uc_convert::ConvertError;
use uc_core::CoreError;

/// Shell error type. Only `Io` ends a session; the rest are reported and the
/// shell moves on to the next attempt.
#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    #[error("not a number: '{input}'")]
    InvalidNumber { input: String },

    #[error(transparent)]
    Convert(#[from] ConvertError),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for shell operations.
pub type ShellResult<T> = Result<T, ShellError>;
