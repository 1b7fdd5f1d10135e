//! Error types for building specifications.

use thiserror::Error;

/// Errors raised while constructing a specification.
///
/// Evaluating a specification never fails; everything here is reported
/// before any filtering happens.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpecError {
    /// A combination was given a missing child
    #[error("Invalid argument: {reason}")]
    InvalidArgument { reason: String },

    /// A filter expression could not be parsed
    #[error("Parse error at offset {position}: {message}")]
    Parse { position: usize, message: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, SpecError>;
