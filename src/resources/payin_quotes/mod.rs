//! Payin quotes (fiat to stablecoin).

mod types;

pub use types::*;

use crate::Result;
use crate::resources::quotes::{FxRate, FxRateRequest};
use crate::rest::endpoints::instance_path;
use crate::rest::{ApiClient, ApiResponse};

/// Endpoints under `/v1/instances/{instance_id}/payin-quotes`.
#[derive(Debug, Clone, Copy)]
pub struct PayinQuotes<'a> {
    api: &'a ApiClient,
    instance_id: &'a str,
}

impl<'a> PayinQuotes<'a> {
    pub(crate) fn new(api: &'a ApiClient, instance_id: &'a str) -> Self {
        Self { api, instance_id }
    }

    fn path(&self, suffix: &str) -> String {
        instance_path(self.instance_id, &format!("/payin-quotes{}", suffix))
    }

    /// Lock a rate for a payin.
    pub async fn create(&self, request: &CreatePayinQuoteRequest) -> Result<ApiResponse<PayinQuote>> {
        self.api.post(&self.path(""), request).await
    }

    /// Fetch a payin quote.
    pub async fn get(&self, quote_id: &str) -> Result<ApiResponse<PayinQuote>> {
        self.api.get(&self.path(&format!("/{}", quote_id))).await
    }

    /// List payin quotes.
    pub async fn list(&self, params: &ListPayinQuotesParams) -> Result<ApiResponse<Vec<PayinQuote>>> {
        self.api.get_with_params(&self.path(""), params).await
    }

    /// Indicative FX rate for a payin.
    pub async fn fx_rate(&self, request: &FxRateRequest) -> Result<ApiResponse<FxRate>> {
        self.api.post(&self.path("/fx"), request).await
    }
}
