use serde::{Deserialize, Serialize};

use crate::types::Network;

/// A deposit address whose incoming stablecoins are paid out to a bank account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfframpWallet {
    /// Wallet identifier
    pub id: String,
    /// Your own identifier for the wallet
    #[serde(default)]
    pub external_id: Option<String>,
    /// Network of the deposit address
    pub network: Network,
    /// Deposit address
    pub address: String,
    /// Bank account the funds are sent to
    pub bank_account_id: String,
    pub instance_id: String,
    pub receiver_id: String,
    /// Creation time (ISO 8601)
    pub created_at: String,
    /// Last update time (ISO 8601)
    pub updated_at: String,
}

/// Request to create an offramp wallet.
#[derive(Debug, Clone, Serialize)]
pub struct CreateOfframpWalletRequest {
    /// Network of the deposit address
    pub network: Network,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
}

impl CreateOfframpWalletRequest {
    /// Create a wallet on `network`.
    pub fn new(network: Network) -> Self {
        Self {
            network,
            external_id: None,
        }
    }

    /// Tag the wallet with your own identifier.
    pub fn external_id(mut self, external_id: impl Into<String>) -> Self {
        self.external_id = Some(external_id.into());
        self
    }
}

/// The created offramp wallet.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreatedOfframpWallet {
    pub id: String,
    #[serde(default)]
    pub external_id: Option<String>,
    pub network: Network,
    pub address: String,
}
