//! Error types for the Code Helper agent.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while handling an agent request.
#[derive(Error, Debug)]
pub enum Error {
    /// Missing or empty message
    #[error("Validation error: {0}")]
    Validation(String),

    /// JSON-RPC method other than `message/send`
    #[error("Unknown method: {0}")]
    UnknownMethod(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Get HTTP status code for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            Error::Validation(_) => 400,
            _ => 500,
        }
    }
}

impl From<validator::ValidationErrors> for Error {
    fn from(errors: validator::ValidationErrors) -> Self {
        Error::Validation(errors.to_string())
    }
}
