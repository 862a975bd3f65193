//! Payout quotes.

mod types;

pub use types::*;

use crate::Result;
use crate::rest::endpoints::instance_path;
use crate::rest::{ApiClient, ApiResponse};

/// Endpoints under `/v1/instances/{instance_id}/quotes`.
#[derive(Debug, Clone, Copy)]
pub struct Quotes<'a> {
    api: &'a ApiClient,
    instance_id: &'a str,
}

impl<'a> Quotes<'a> {
    pub(crate) fn new(api: &'a ApiClient, instance_id: &'a str) -> Self {
        Self { api, instance_id }
    }

    /// Lock a rate for a payout.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use blindpay_client::BlindPay;
    /// use blindpay_client::resources::quotes::CreateQuoteRequest;
    /// use blindpay_client::types::{CurrencyType, Network, StablecoinToken, TransactionDocumentType};
    /// use rust_decimal::Decimal;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = BlindPay::new("api_key", "in_000000000000")?;
    ///     let request = CreateQuoteRequest::new(
    ///         "ba_000000000000",
    ///         CurrencyType::Sender,
    ///         Decimal::new(1000, 2),
    ///         TransactionDocumentType::Invoice,
    ///     )
    ///     .network(Network::Sepolia)
    ///     .token(StablecoinToken::Usdc);
    ///
    ///     if let Some(quote) = client.quotes().create(&request).await?.into_result()? {
    ///         println!("quote {} expires at {}", quote.id, quote.expires_at);
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub async fn create(&self, request: &CreateQuoteRequest) -> Result<ApiResponse<Quote>> {
        self.api
            .post(&instance_path(self.instance_id, "/quotes"), request)
            .await
    }

    /// Indicative FX rate for a payout.
    pub async fn fx_rate(&self, request: &FxRateRequest) -> Result<ApiResponse<FxRate>> {
        self.api
            .post(&instance_path(self.instance_id, "/quotes/fx"), request)
            .await
    }
}
