//! Bank accounts of a receiver.

mod types;

pub use types::*;

use crate::Result;
use crate::resources::offramp_wallets::OfframpWallets;
use crate::rest::endpoints::receiver_path;
use crate::rest::{ApiClient, ApiResponse};
use crate::types::VoidResponse;

/// Endpoints under `/v1/instances/{instance_id}/receivers/{receiver_id}/bank-accounts`.
#[derive(Debug, Clone)]
pub struct BankAccounts<'a> {
    api: &'a ApiClient,
    instance_id: &'a str,
    receiver_id: String,
}

impl<'a> BankAccounts<'a> {
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
            &format!("/bank-accounts{}", suffix),
        )
    }

    /// All bank accounts of the receiver.
    pub async fn list(&self) -> Result<ApiResponse<Vec<BankAccount>>> {
        self.api.get(&self.path("")).await
    }

    /// Add a bank account.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use blindpay_client::BlindPay;
    /// use blindpay_client::resources::bank_accounts::{BankAccountDetails, CreateBankAccountRequest};
    /// use blindpay_client::types::Rail;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = BlindPay::new("api_key", "in_000000000000")?;
    ///     let request = CreateBankAccountRequest::new(
    ///         "PIX",
    ///         Rail::Pix,
    ///         BankAccountDetails {
    ///             pix_key: Some("14947677768".to_string()),
    ///             ..Default::default()
    ///         },
    ///     );
    ///     let response = client
    ///         .receivers()
    ///         .bank_accounts("re_000000000000")
    ///         .create(&request)
    ///         .await?;
    ///     println!("{:?}", response.into_result()?);
    ///     Ok(())
    /// }
    /// ```
    pub async fn create(&self, request: &CreateBankAccountRequest) -> Result<ApiResponse<BankAccount>> {
        self.api.post(&self.path(""), request).await
    }

    /// Fetch a bank account.
    pub async fn get(&self, bank_account_id: &str) -> Result<ApiResponse<BankAccount>> {
        self.api.get(&self.path(&format!("/{}", bank_account_id))).await
    }

    /// Remove a bank account.
    pub async fn delete(&self, bank_account_id: &str) -> Result<ApiResponse<VoidResponse>> {
        self.api
            .delete(&self.path(&format!("/{}", bank_account_id)))
            .await
    }

    /// Offramp wallets of one of the receiver's bank accounts.
    pub fn offramp_wallets(&self, bank_account_id: impl Into<String>) -> OfframpWallets<'a> {
        OfframpWallets::new(
            self.api,
            self.instance_id,
            self.receiver_id.clone(),
            bank_account_id.into(),
        )
    }
}
