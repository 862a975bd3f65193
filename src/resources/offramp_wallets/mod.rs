//! Offramp wallets attached to a receiver's bank account.

mod types;

pub use types::*;

use crate::Result;
use crate::rest::endpoints::receiver_path;
use crate::rest::{ApiClient, ApiResponse};

/// Endpoints under `.../receivers/{receiver_id}/bank-accounts/{bank_account_id}/offramp-wallets`.
#[derive(Debug, Clone)]
pub struct OfframpWallets<'a> {
    api: &'a ApiClient,
    instance_id: &'a str,
    receiver_id: String,
    bank_account_id: String,
}

impl<'a> OfframpWallets<'a> {
    pub(crate) fn new(
        api: &'a ApiClient,
        instance_id: &'a str,
        receiver_id: String,
        bank_account_id: String,
    ) -> Self {
        Self {
            api,
            instance_id,
            receiver_id,
            bank_account_id,
        }
    }

    fn path(&self, suffix: &str) -> String {
        receiver_path(
            self.instance_id,
            &self.receiver_id,
            &format!("/bank-accounts/{}/offramp-wallets{}", self.bank_account_id, suffix),
        )
    }

    /// All offramp wallets of the bank account.
    pub async fn list(&self) -> Result<ApiResponse<Vec<OfframpWallet>>> {
        self.api.get(&self.path("")).await
    }

    /// Create an offramp wallet.
    pub async fn create(&self, request: &CreateOfframpWalletRequest) -> Result<ApiResponse<CreatedOfframpWallet>> {
        self.api.post(&self.path(""), request).await
    }

    /// Fetch an offramp wallet.
    pub async fn get(&self, wallet_id: &str) -> Result<ApiResponse<OfframpWallet>> {
        self.api.get(&self.path(&format!("/{}", wallet_id))).await
    }
}
