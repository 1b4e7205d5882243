//! Error types for paysub core.

/// Errors from validating customer input.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The email does not match basic email syntax.
    #[error("invalid email address: {0}")]
    InvalidEmail(String),

    /// A required field was left empty.
    #[error("{0} must not be empty")]
    EmptyField(&'static str),
}
