//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

/// Client core error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum ClientError {
    /// Listing not found
    #[error("Listing not found: {0}")]
    ListingNotFound(String),

    /// Sign-in rejected by the authentication provider
    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),

    /// API error (non-2xx response from the marketplace backend)
    #[error("API error: {endpoint} - {message}")]
    ApiError { endpoint: String, message: String },

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Validation error (bad request data, missing builder adapter)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Network error
    #[error("Network error: {0}")]
    NetworkError(String),

    /// Session collaborator error (snapshot fetch/refresh failed)
    #[error("Session error: {0}")]
    SessionError(String),
}

impl ClientError {
    /// Whether this is expected behavior (user input, resource absence, etc.),
    /// used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error`
    /// when returning `false`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::ListingNotFound(_) | Self::InvalidCredentials(_) | Self::ValidationError(_)
        )
    }
}

/// Client core Result type alias
pub type ClientResult<T> = std::result::Result<T, ClientError>;
