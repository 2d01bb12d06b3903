//! Error types for marketplace API operations.

use thiserror::Error;

/// Errors that can occur while talking to the marketplace API.
///
/// The polling layer treats every variant the same way: log it and retry on
/// the next tick. No variant is surfaced to the user.
#[derive(Error, Debug)]
pub enum MarketplaceError {
    /// The configured base URL is empty or unusable.
    #[error("Invalid marketplace base URL: {0}")]
    InvalidBaseUrl(String),

    /// A network error occurred while communicating with the API.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The API answered with a non-success status code.
    #[error("Marketplace API error {status}: {body}")]
    Status {
        /// HTTP status code returned by the API
        status: u16,
        /// Truncated response body, for log context
        body: String,
    },

    /// The response body did not match the expected contract.
    #[error("Failed to decode marketplace response: {message}")]
    Decode { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = MarketplaceError::InvalidBaseUrl("".to_string());
        assert_eq!(format!("{}", error), "Invalid marketplace base URL: ");

        let error = MarketplaceError::Status {
            status: 503,
            body: "upstream unavailable".to_string(),
        };
        assert_eq!(
            format!("{}", error),
            "Marketplace API error 503: upstream unavailable"
        );

        let error = MarketplaceError::Decode {
            message: "missing field `id`".to_string(),
        };
        assert_eq!(
            format!("{}", error),
            "Failed to decode marketplace response: missing field `id`"
        );
    }
}
