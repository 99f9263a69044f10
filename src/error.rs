//! Core error type.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Caller asked for something the generator cannot honour.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Generator output failed its own self-check.
    #[error("invariant violation: {0}")]
    InvariantViolation(String),
}

pub type Result<T> = std::result::Result<T, Error>;
