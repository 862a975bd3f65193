//! Payment rail discovery (not scoped to an instance).

mod types;

pub use types::*;

use crate::Result;
use crate::rest::endpoints::available;
use crate::rest::{ApiClient, ApiResponse};
use crate::types::Rail;

/// Rails, per-rail bank detail requirements and SWIFT lookups.
///
/// Obtained from [`BlindPay::available`](crate::BlindPay::available).
#[derive(Debug, Clone, Copy)]
pub struct Available<'a> {
    api: &'a ApiClient,
}

impl<'a> Available<'a> {
    pub(crate) fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// List the payment rails BlindPay supports.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use blindpay_client::BlindPay;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = BlindPay::new("api_key", "in_000000000000")?;
    ///     let response = client.available().rails().await?;
    ///     match response.into_result() {
    ///         Ok(Some(rails)) => {
    ///             for rail in rails {
    ///                 println!("{} ({}): {}", rail.label, rail.country, rail.value);
    ///             }
    ///         }
    ///         Ok(None) => println!("no rails"),
    ///         Err(api_error) => println!("API error: {}", api_error),
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub async fn rails(&self) -> Result<ApiResponse<Vec<RailInfo>>> {
        self.api.get(available::RAILS).await
    }

    /// List the bank detail fields required to create a bank account on `rail`.
    pub async fn bank_details(&self, rail: Rail) -> Result<ApiResponse<Vec<BankDetailField>>> {
        self.api
            .get_with_params(available::BANK_DETAILS, &BankDetailsRequest { rail })
            .await
    }

    /// Look up the bank behind a SWIFT/BIC code.
    pub async fn swift_code(&self, code: &str) -> Result<ApiResponse<Vec<SwiftCodeInfo>>> {
        let path = format!("{}/{}", available::SWIFT, code);
        self.api.get(&path).await
    }
}
