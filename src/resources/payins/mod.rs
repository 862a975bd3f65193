//! Payins.

mod types;

pub use types::*;

use crate::Result;
use crate::rest::endpoints::{external, instance_path};
use crate::rest::{ApiClient, ApiResponse};

/// Endpoints under `/v1/instances/{instance_id}/payins`, plus public tracking.
#[derive(Debug, Clone, Copy)]
pub struct Payins<'a> {
    api: &'a ApiClient,
    instance_id: &'a str,
}

impl<'a> Payins<'a> {
    pub(crate) fn new(api: &'a ApiClient, instance_id: &'a str) -> Self {
        Self { api, instance_id }
    }

    fn path(&self, suffix: &str) -> String {
        instance_path(self.instance_id, &format!("/payins{}", suffix))
    }

    /// List payins.
    pub async fn list(&self, params: &ListPayinsParams) -> Result<ApiResponse<PayinList>> {
        self.api.get_with_params(&self.path(""), params).await
    }

    /// Fetch a payin.
    pub async fn get(&self, payin_id: &str) -> Result<ApiResponse<Payin>> {
        self.api.get(&self.path(&format!("/{}", payin_id))).await
    }

    /// Public tracking view of a payin.
    pub async fn track(&self, payin_id: &str) -> Result<ApiResponse<Payin>> {
        let path = format!("{}/{}", external::PAYINS, payin_id);
        self.api.get(&path).await
    }

    /// Start a payin to an EVM wallet from a payin quote.
    pub async fn create_evm(&self, payin_quote_id: impl Into<String>) -> Result<ApiResponse<CreatedPayin>> {
        let request = CreatePayinRequest {
            payin_quote_id: payin_quote_id.into(),
        };
        self.api.post(&self.path("/evm"), &request).await
    }
}
