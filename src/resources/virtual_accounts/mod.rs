//! Virtual accounts of a receiver.

mod types;

pub use types::*;

use crate::Result;
use crate::rest::endpoints::receiver_path;
use crate::rest::{ApiClient, ApiResponse};
use crate::types::SuccessResponse;

/// Endpoints under `/v1/instances/{instance_id}/receivers/{receiver_id}/virtual-accounts`.
#[derive(Debug, Clone)]
pub struct VirtualAccounts<'a> {
    api: &'a ApiClient,
    instance_id: &'a str,
    receiver_id: String,
}

impl<'a> VirtualAccounts<'a> {
    pub(crate) fn new(api: &'a ApiClient, instance_id: &'a str, receiver_id: String) -> Self {
        Self {
            api,
            instance_id,
            receiver_id,
        }
    }

    fn path(&self, suffix: &str) -> String {
        receiver_path(
            self.instance_id,
            &self.receiver_id,
            &format!("/virtual-accounts{}", suffix),
        )
    }

    /// All virtual accounts of the receiver.
    pub async fn list(&self) -> Result<ApiResponse<Vec<VirtualAccount>>> {
        self.api.get(&self.path("")).await
    }

    /// Open a virtual account.
    pub async fn create(&self, request: &CreateVirtualAccountRequest) -> Result<ApiResponse<VirtualAccount>> {
        self.api.post(&self.path(""), request).await
    }

    /// Fetch a virtual account.
    pub async fn get(&self, account_id: &str) -> Result<ApiResponse<VirtualAccount>> {
        self.api.get(&self.path(&format!("/{}", account_id))).await
    }

    /// Point a virtual account at a different wallet or token.
    pub async fn update(
        &self,
        account_id: &str,
        request: &UpdateVirtualAccountRequest,
    ) -> Result<ApiResponse<SuccessResponse>> {
        self.api
            .put(&self.path(&format!("/{}", account_id)), request)
            .await
    }
}
