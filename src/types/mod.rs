//! Types shared across the BlindPay client library.

pub mod common;
pub mod serde_helpers;

pub use common::*;
