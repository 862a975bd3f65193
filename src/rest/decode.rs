//! Response decoding.
//!
//! The BlindPay API is not uniform: most endpoints answer with the
//! `{data, error}` envelope, some return the payload bare, and some error
//! paths return a flat `{"message": ..}`. A body counts as an envelope when
//! it is a JSON object carrying a `data` or an `error` key; any other keys
//! next to them are ignored. Each shape is tried by a dedicated function, in
//! a fixed order:
//!
//! - 2xx: [`decode_envelope`], then [`decode_bare`], else a decoding error.
//! - otherwise: [`decode_error_envelope`], then [`decode_flat_message`], then
//!   an object without envelope keys reads as an empty envelope, else an
//!   HTTP status error.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{ApiError, BlindPayError};
use crate::rest::envelope::ApiResponse;

/// Which decoding path a status code selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StatusClass {
    /// 200-299
    Success,
    /// Any other real HTTP status (100-199, 300-599)
    Failure,
    /// Not an HTTP status at all
    Invalid,
}

/// Classify a numeric status code.
pub(crate) fn classify(status: u16) -> StatusClass {
    match status {
        200..=299 => StatusClass::Success,
        100..=599 => StatusClass::Failure,
        _ => StatusClass::Invalid,
    }
}

/// Parse the body as a JSON object.
fn parse_object(body: &[u8]) -> Option<Value> {
    serde_json::from_slice::<Value>(body)
        .ok()
        .filter(Value::is_object)
}

fn is_envelope_shaped(object: &Value) -> bool {
    object.get("data").is_some() || object.get("error").is_some()
}

/// Decode the body as the `{data, error}` envelope.
///
/// Returns `None` if the body is not an envelope-shaped object, and the
/// decode error if it is one but its `data` does not match `T`.
pub(crate) fn decode_envelope<T>(body: &[u8]) -> Option<Result<ApiResponse<T>, serde_json::Error>>
where
    T: DeserializeOwned,
{
    let object = parse_object(body)?;
    if !is_envelope_shaped(&object) {
        return None;
    }
    Some(ApiResponse::deserialize(object))
}

/// Decode the body as a bare payload and wrap it as a success.
pub(crate) fn decode_bare<T>(body: &[u8]) -> Result<ApiResponse<T>, serde_json::Error>
where
    T: DeserializeOwned,
{
    serde_json::from_slice(body).map(ApiResponse::success)
}

/// Decode a 2xx body.
///
/// A `204 No Content` with nothing in the body is a void success.
pub(crate) fn decode_success<T>(status: u16, body: &[u8]) -> Result<ApiResponse<T>, BlindPayError>
where
    T: DeserializeOwned,
{
    if status == 204 && is_blank(body) {
        return Ok(ApiResponse::empty());
    }

    let envelope_error = match decode_envelope(body) {
        Some(Ok(envelope)) => return Ok(envelope),
        Some(Err(e)) => Some(e),
        None => None,
    };

    match decode_bare(body) {
        Ok(response) => {
            tracing::debug!(status, "accepted bare response payload");
            Ok(response)
        }
        Err(e) => {
            // An envelope whose payload did not match reports that mismatch.
            let e = envelope_error.unwrap_or(e);
            tracing::warn!(status, "failed to decode response body: {}", e);
            Err(BlindPayError::Decoding(e))
        }
    }
}

/// Only `error` is read from an error envelope.
#[derive(Deserialize)]
struct ErrorEnvelope {
    error: Option<ApiError>,
}

/// Read an envelope-shaped error body as `{data: None, error}`.
///
/// `error` may be absent or null. Returns `None` if the object is not
/// envelope shaped or its `error` is malformed.
pub(crate) fn decode_error_envelope<T>(object: &Value) -> Option<ApiResponse<T>> {
    if !is_envelope_shaped(object) {
        return None;
    }
    let envelope = ErrorEnvelope::deserialize(object).ok()?;
    Some(ApiResponse {
        data: None,
        error: envelope.error,
    })
}

/// Extract a top-level `message` string from a JSON object.
pub(crate) fn decode_flat_message(object: &Value) -> Option<ApiError> {
    object
        .get("message")
        .and_then(Value::as_str)
        .map(ApiError::new)
}

/// Decode a non-2xx body into a failure envelope, or fail with the status code.
pub(crate) fn decode_failure<T>(status: u16, body: &[u8]) -> Result<ApiResponse<T>, BlindPayError> {
    if let Some(object) = parse_object(body) {
        if let Some(response) = decode_error_envelope(&object) {
            return Ok(response);
        }

        if let Some(error) = decode_flat_message(&object) {
            return Ok(ApiResponse::failure(error));
        }

        if !is_envelope_shaped(&object) {
            tracing::debug!(status, "error response without envelope keys or message");
            return Ok(ApiResponse::empty());
        }
    }

    tracing::warn!(status, "unreadable error response");
    Err(BlindPayError::Http {
        status_code: status,
    })
}

/// Route a response body to the decoding path its status selects.
pub(crate) fn decode_response<T>(status: u16, body: &[u8]) -> Result<ApiResponse<T>, BlindPayError>
where
    T: DeserializeOwned,
{
    match classify(status) {
        StatusClass::Success => decode_success(status, body),
        StatusClass::Failure => decode_failure(status, body),
        StatusClass::Invalid => Err(BlindPayError::InvalidResponse),
    }
}

fn is_blank(body: &[u8]) -> bool {
    body.iter().all(u8::is_ascii_whitespace)
}
