//! The `{data, error}` response envelope.

use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// The wire envelope every BlindPay call resolves to.
///
/// On a well-formed response exactly one of `data` and `error` is populated,
/// but both may be `None` for endpoints that return nothing (a void success).
/// A populated `error` is a business error, not a transport failure: it can
/// arrive on any status code and callers should check it on every `Ok`.
///
/// Extra top-level keys (request ids and the like) are ignored. Telling an
/// envelope apart from a bare payload is left to the decoder, see
/// [`ApiClient::request`](crate::rest::ApiClient::request).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// The payload, if the call produced one
    pub data: Option<T>,
    /// The business error reported by the API, if any
    pub error: Option<ApiError>,
}

impl<T> ApiResponse<T> {
    /// An envelope carrying a payload.
    pub fn success(data: T) -> Self {
        Self {
            data: Some(data),
            error: None,
        }
    }

    /// An envelope carrying a business error.
    pub fn failure(error: ApiError) -> Self {
        Self {
            data: None,
            error: Some(error),
        }
    }

    /// An envelope with neither payload nor error.
    pub fn empty() -> Self {
        Self {
            data: None,
            error: None,
        }
    }

    /// True if no business error was reported.
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }

    /// Collapse the envelope into a `Result`, keeping void successes as `Ok(None)`.
    pub fn into_result(self) -> Result<Option<T>, ApiError> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(self.data),
        }
    }
}

impl<T> Default for ApiResponse<T> {
    fn default() -> Self {
        Self::empty()
    }
}
