//! Receivers, their limits, and accessors for receiver-scoped resources.

mod types;

pub use types::*;

use crate::Result;
use crate::resources::bank_accounts::BankAccounts;
use crate::resources::blockchain_wallets::BlockchainWallets;
use crate::resources::virtual_accounts::VirtualAccounts;
use crate::rest::endpoints::{instance_path, receiver_path};
use crate::rest::{ApiClient, ApiResponse};
use crate::types::{IdResponse, SuccessResponse};

/// Endpoints under `/v1/instances/{instance_id}/receivers`.
#[derive(Debug, Clone, Copy)]
pub struct Receivers<'a> {
    api: &'a ApiClient,
    instance_id: &'a str,
}

impl<'a> Receivers<'a> {
    pub(crate) fn new(api: &'a ApiClient, instance_id: &'a str) -> Self {
        Self { api, instance_id }
    }

    fn path(&self, receiver_id: &str, suffix: &str) -> String {
        receiver_path(self.instance_id, receiver_id, suffix)
    }

    /// Create a receiver and return its id.
    pub async fn create(&self, request: &CreateReceiverRequest) -> Result<ApiResponse<IdResponse>> {
        self.api
            .post(&instance_path(self.instance_id, "/receivers"), request)
            .await
    }

    /// List receivers, optionally filtered and paginated.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use blindpay_client::BlindPay;
    /// use blindpay_client::resources::receivers::ListReceiversParams;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = BlindPay::new("api_key", "in_000000000000")?;
    ///     let params = ListReceiversParams::default().limit(50);
    ///     if let Some(page) = client.receivers().list(&params).await?.into_result()? {
    ///         println!("{} receivers, more: {}", page.data.len(), page.pagination.has_more);
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub async fn list(&self, params: &ListReceiversParams) -> Result<ApiResponse<ReceiverList>> {
        self.api
            .get_with_params(&instance_path(self.instance_id, "/receivers"), params)
            .await
    }

    /// Fetch a receiver.
    pub async fn get(&self, receiver_id: &str) -> Result<ApiResponse<Receiver>> {
        self.api.get(&self.path(receiver_id, "")).await
    }

    /// Update the fields set on `request`.
    pub async fn update(
        &self,
        receiver_id: &str,
        request: &UpdateReceiverRequest,
    ) -> Result<ApiResponse<SuccessResponse>> {
        self.api.put(&self.path(receiver_id, ""), request).await
    }

    /// Permanently delete a receiver.
    pub async fn delete(&self, receiver_id: &str) -> Result<ApiResponse<SuccessResponse>> {
        self.api.delete(&self.path(receiver_id, "")).await
    }

    /// Current payin and payout limits of a receiver.
    pub async fn limits(&self, receiver_id: &str) -> Result<ApiResponse<ReceiverLimits>> {
        let path = instance_path(self.instance_id, &format!("/limits/receivers/{}", receiver_id));
        self.api.get(&path).await
    }

    /// Ask for higher limits.
    pub async fn request_limit_increase(
        &self,
        receiver_id: &str,
        request: &LimitIncreaseRequest,
    ) -> Result<ApiResponse<IdResponse>> {
        self.api
            .post(&self.path(receiver_id, "/limit-increase"), request)
            .await
    }

    /// Limit increase requests submitted for a receiver.
    pub async fn limit_increase_requests(&self, receiver_id: &str) -> Result<ApiResponse<Vec<LimitIncrease>>> {
        self.api
            .get(&self.path(receiver_id, "/limit-increase"))
            .await
    }

    /// Blockchain wallets of a receiver.
    pub fn blockchain_wallets(&self, receiver_id: impl Into<String>) -> BlockchainWallets<'a> {
        BlockchainWallets::new(self.api, self.instance_id, receiver_id.into())
    }

    /// Virtual accounts of a receiver.
    pub fn virtual_accounts(&self, receiver_id: impl Into<String>) -> VirtualAccounts<'a> {
        VirtualAccounts::new(self.api, self.instance_id, receiver_id.into())
    }

    /// Bank accounts of a receiver.
    pub fn bank_accounts(&self, receiver_id: impl Into<String>) -> BankAccounts<'a> {
        BankAccounts::new(self.api, self.instance_id, receiver_id.into())
    }
}
