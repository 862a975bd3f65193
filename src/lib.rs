//! # BlindPay Client
//!
//! An async Rust client library for the BlindPay payments REST API.
//!
//! ## Features
//!
//! - Typed façades for receivers, bank accounts, quotes, payins and payouts
//! - Transparent decoding of both enveloped and bare JSON responses
//! - Business errors returned as data, transport failures as [`BlindPayError`]
//! - Request amounts as [`rust_decimal::Decimal`], sent in minor units
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use blindpay_client::BlindPay;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = BlindPay::new("api_key", "in_000000000000")?;
//!     let rails = client.available().rails().await?;
//!     println!("Rails: {:?}", rails.data);
//!     Ok(())
//! }
//! ```

pub mod auth;
mod client;
pub mod config;
pub mod error;
pub mod resources;
pub mod rest;
pub mod types;

// Re-export commonly used types at crate root
pub use auth::Credentials;
pub use client::{BlindPay, BlindPayBuilder};
pub use config::Configuration;
pub use error::{ApiError, BlindPayError};
pub use rest::ApiResponse;

/// Result type alias using BlindPayError
pub type Result<T> = std::result::Result<T, BlindPayError>;
