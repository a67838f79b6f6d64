//! Error types for the mail relay.

use thiserror::Error;

/// Common error type for the mail relay.
#[derive(Error, Debug)]
pub enum RelayError {
    /// A required field is missing, empty, or has the wrong shape.
    #[error("{0}")]
    InvalidArgument(String),

    /// The request body is not parseable JSON.
    #[error("malformed request: {0}")]
    MalformedRequest(String),

    /// The API key is not recognized.
    #[error("{0}")]
    Unauthorized(String),

    /// An email address cannot be converted to a transport address.
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    /// The transport rejected the message or could not send it.
    #[error("message could not be sent: {0}")]
    DeliveryFailed(String),

    /// Database error.
    ///
    /// Database errors from sqlx are automatically converted.
    #[error("database error: {0}")]
    Database(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

impl RelayError {
    /// Shorthand for an [`RelayError::InvalidArgument`].
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        RelayError::InvalidArgument(message.into())
    }
}

impl From<sqlx::Error> for RelayError {
    fn from(e: sqlx::Error) -> Self {
        RelayError::Database(e.to_string())
    }
}

/// Result type alias for mail relay operations.
pub type Result<T> = std::result::Result<T, RelayError>;
