//! Blockchain wallets of a receiver.

mod types;

pub use types::*;

use crate::Result;
use crate::rest::endpoints::receiver_path;
use crate::rest::{ApiClient, ApiResponse};
use crate::types::VoidResponse;

/// Endpoints under `/v1/instances/{instance_id}/receivers/{receiver_id}/blockchain-wallets`.
#[derive(Debug, Clone)]
pub struct BlockchainWallets<'a> {
    api: &'a ApiClient,
    instance_id: &'a str,
    receiver_id: String,
}

impl<'a> BlockchainWallets<'a> {
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
            &format!("/blockchain-wallets{}", suffix),
        )
    }

    /// The message the wallet owner must sign before registering it.
    pub async fn sign_message(&self) -> Result<ApiResponse<SignMessage>> {
        self.api.get(&self.path("/sign-message")).await
    }

    /// All wallets of the receiver.
    pub async fn list(&self) -> Result<ApiResponse<Vec<BlockchainWallet>>> {
        self.api.get(&self.path("")).await
    }

    /// Register a wallet.
    pub async fn create(
        &self,
        request: &CreateBlockchainWalletRequest,
    ) -> Result<ApiResponse<BlockchainWallet>> {
        self.api.post(&self.path(""), request).await
    }

    /// Fetch a wallet.
    pub async fn get(&self, wallet_id: &str) -> Result<ApiResponse<BlockchainWallet>> {
        self.api.get(&self.path(&format!("/{}", wallet_id))).await
    }

    /// Remove a wallet.
    pub async fn delete(&self, wallet_id: &str) -> Result<ApiResponse<VoidResponse>> {
        self.api.delete(&self.path(&format!("/{}", wallet_id))).await
    }
}
