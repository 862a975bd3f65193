//! BlindPay REST transport.
//!
//! [`ApiClient`] builds the URL, encodes the body, executes the call and
//! decodes the answer into an [`ApiResponse`]. Every resource façade funnels
//! through [`ApiClient::request`].
//!
//! Outcomes of a single call:
//!
//! - `Ok` with `data` set: the call succeeded.
//! - `Ok` with `error` set: the API reported a business error (on any status).
//! - `Err`: the call failed at the transport level, see [`BlindPayError`](crate::BlindPayError).

mod client;
mod decode;
pub mod endpoints;
mod envelope;

pub use client::{ApiClient, HttpMethod};
pub use envelope::ApiResponse;
