//! Error types for the Prowl client.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during Prowl client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The API key was rejected before any request was made.
    #[error("Invalid API key: {0}")]
    InvalidApiKey(String),

    /// A push was attempted before any key was registered.
    #[error("No API key registered")]
    NoApiKey,

    /// HTTP request error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Error response from the Prowl API.
    #[error("API error ({status}) at {url}: {message}")]
    ApiError {
        status: u16,
        url: String,
        message: String,
    },

    /// Invalid response format from Prowl.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// The notification failed local validation.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}
