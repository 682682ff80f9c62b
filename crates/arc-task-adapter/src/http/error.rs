/*
[INPUT]:  Error sources (HTTP, API status, serialization, grid validation)
[OUTPUT]: Structured error types with retry hints
[POS]:    Error handling layer - unified error type for the adapter crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the ARC task adapter
#[derive(Error, Debug)]
pub enum ArcError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned a non-success status
    #[error("API error (code {code}): {message}")]
    Api { code: i32, message: String },

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Grid is ragged, empty or holds non-symbol values
    #[error("Invalid grid: {0}")]
    InvalidGrid(String),

    /// Response was well-formed JSON but not usable
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ArcError {
    /// Create an API error from status code and message
    pub fn api_error(status: StatusCode, message: impl Into<String>) -> Self {
        ArcError::Api {
            code: status.as_u16() as i32,
            message: message.into(),
        }
    }
}

/// Result type alias for adapter operations
pub type Result<T> = std::result::Result<T, ArcError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_creation() {
        let err = ArcError::api_error(StatusCode::FORBIDDEN, "rate limit exceeded");
        match err {
            ArcError::Api { code, message } => {
                assert_eq!(code, 403);
                assert_eq!(message, "rate limit exceeded");
            }
            _ => panic!("Expected Api error variant"),
        }
    }
}
