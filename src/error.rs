//! Error types for the BlindPay client library.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Boxed cause carried by [`BlindPayError::Encoding`].
pub type EncodeCause = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The failures a request can end in before it produces an [`ApiResponse`].
///
/// Business errors reported by the remote API are not represented here:
/// they come back as a populated [`ApiResponse::error`] on an `Ok` result.
///
/// [`ApiResponse`]: crate::rest::ApiResponse
/// [`ApiResponse::error`]: crate::rest::ApiResponse::error
#[derive(Error, Debug)]
pub enum BlindPayError {
    /// The composed request URL could not be parsed
    #[error("Invalid URL")]
    InvalidUrl(#[source] url::ParseError),

    /// The HTTP stack returned something that is not an HTTP response
    #[error("Invalid response from server")]
    InvalidResponse,

    /// A request body, query string or header value could not be encoded
    #[error("Encoding error: {0}")]
    Encoding(#[source] EncodeCause),

    /// A response body did not match the envelope or the bare payload shape
    #[error("Decoding error: {0}")]
    Decoding(#[source] serde_json::Error),

    /// The request never completed at the transport level
    #[error("Network error: {0}")]
    Network(#[from] reqwest_middleware::Error),

    /// A non-2xx status with a body no error shape could be read from
    #[error("HTTP error with status code: {status_code}")]
    Http {
        /// The status code returned by the server
        status_code: u16,
    },
}

impl BlindPayError {
    /// Wrap any serializer error as an encoding failure.
    pub fn encoding<E>(cause: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Encoding(Box::new(cause))
    }

    /// The HTTP status code, if this error was caused by one.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Http { status_code } => Some(*status_code),
            Self::Network(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Check if the request failed before reaching the server or while waiting on it.
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }
}

impl From<reqwest::Error> for BlindPayError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(reqwest_middleware::Error::Reqwest(err))
    }
}

/// A business error reported by the BlindPay API.
///
/// This is the only structured error information the API provides, either
/// inside the `{"data": .., "error": {"message": ..}}` envelope or as a flat
/// `{"message": ..}` body.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("{message}")]
pub struct ApiError {
    /// Human-readable error message
    pub message: String,
}

impl ApiError {
    /// Create a new API error from a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn json_error() -> serde_json::Error {
        serde_json::from_str::<u32>("\"nope\"").unwrap_err()
    }

    #[test]
    fn test_invalid_url_message() {
        let cause = url::Url::parse("not a url").unwrap_err();
        let error = BlindPayError::InvalidUrl(cause);
        assert_eq!(error.to_string(), "Invalid URL");
        assert!(std::error::Error::source(&error).is_some());
    }

    #[test]
    fn test_invalid_response_message() {
        assert_eq!(
            BlindPayError::InvalidResponse.to_string(),
            "Invalid response from server"
        );
    }

    #[test]
    fn test_encoding_message() {
        let cause = json_error();
        let expected = format!("Encoding error: {}", cause);
        let error = BlindPayError::encoding(cause);
        assert_eq!(error.to_string(), expected);
    }

    #[test]
    fn test_decoding_message() {
        let cause = json_error();
        let expected = format!("Decoding error: {}", cause);
        let error = BlindPayError::Decoding(cause);
        assert_eq!(error.to_string(), expected);
    }

    #[test]
    fn test_network_message() {
        let cause = reqwest_middleware::Error::middleware(std::io::Error::other("connection refused"));
        let expected = format!("Network error: {}", cause);
        let error = BlindPayError::from(cause);
        assert_eq!(error.to_string(), expected);
        assert!(error.is_network());
        assert!(error.to_string().starts_with("Network error: "));
    }

    #[test]
    fn test_http_message() {
        let error = BlindPayError::Http { status_code: 404 };
        assert_eq!(error.to_string(), "HTTP error with status code: 404");
        assert_eq!(error.status_code(), Some(404));
    }

    #[test]
    fn test_api_error_display() {
        let error = ApiError::new("receiver not found");
        assert_eq!(error.to_string(), "receiver not found");
    }
}
