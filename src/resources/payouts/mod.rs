//! Payouts.

mod types;

pub use types::*;

use crate::Result;
use crate::rest::endpoints::{external, instance_path};
use crate::rest::{ApiClient, ApiResponse};

/// Endpoints under `/v1/instances/{instance_id}/payouts`, plus public tracking.
#[derive(Debug, Clone, Copy)]
pub struct Payouts<'a> {
    api: &'a ApiClient,
    instance_id: &'a str,
}

impl<'a> Payouts<'a> {
    pub(crate) fn new(api: &'a ApiClient, instance_id: &'a str) -> Self {
        Self { api, instance_id }
    }

    fn path(&self, suffix: &str) -> String {
        instance_path(self.instance_id, &format!("/payouts{}", suffix))
    }

    /// List payouts.
    pub async fn list(&self, params: &ListPayoutsParams) -> Result<ApiResponse<PayoutList>> {
        self.api.get_with_params(&self.path(""), params).await
    }

    /// Fetch a payout.
    pub async fn get(&self, payout_id: &str) -> Result<ApiResponse<Payout>> {
        self.api.get(&self.path(&format!("/{}", payout_id))).await
    }

    /// Public tracking view of a payout.
    pub async fn track(&self, payout_id: &str) -> Result<ApiResponse<Payout>> {
        let path = format!("{}/{}", external::PAYOUTS, payout_id);
        self.api.get(&path).await
    }

    /// Execute a quote with funds from an EVM wallet.
    ///
    /// The wallet must already have approved the quote's contract.
    pub async fn create_evm(&self, request: &CreateEvmPayoutRequest) -> Result<ApiResponse<CreatedPayout>> {
        self.api.post(&self.path("/evm"), request).await
    }

    /// Execute a quote with funds from a Stellar wallet.
    pub async fn create_stellar(
        &self,
        request: &CreateStellarPayoutRequest,
    ) -> Result<ApiResponse<CreatedPayout>> {
        self.api.post(&self.path("/stellar"), request).await
    }

    /// Build the Stellar transaction the sender signs before
    /// [`create_stellar`](Self::create_stellar).
    pub async fn authorize_stellar(
        &self,
        request: &AuthorizeStellarRequest,
    ) -> Result<ApiResponse<StellarAuthorization>> {
        self.api.post(&self.path("/stellar/authorize"), request).await
    }
}
