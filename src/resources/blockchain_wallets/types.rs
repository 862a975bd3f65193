use serde::{Deserialize, Serialize};

use crate::types::Network;

/// A receiver's on-chain wallet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockchainWallet {
    /// Wallet identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Network the wallet lives on
    pub network: Network,
    /// Owning receiver
    pub receiver_id: String,
    /// On-chain address
    #[serde(default)]
    pub address: Option<String>,
    /// Whether the wallet is a smart (account abstraction) wallet
    #[serde(default)]
    pub is_account_abstraction: Option<bool>,
    /// Hash of the ownership proof signature
    #[serde(default)]
    pub signature_tx_hash: Option<String>,
}

/// Message a wallet owner signs to prove ownership.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SignMessage {
    /// Text to sign
    pub message: String,
}

/// Request to register a blockchain wallet.
#[derive(Debug, Clone, Serialize)]
pub struct CreateBlockchainWalletRequest {
    /// Display name
    pub name: String,
    /// Network the wallet lives on
    pub network: Network,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_account_abstraction: Option<bool>,
    /// Signature over the [`SignMessage`] text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature_tx_hash: Option<String>,
}

impl CreateBlockchainWalletRequest {
    /// Register a wallet by name and network.
    pub fn new(name: impl Into<String>, network: Network) -> Self {
        Self {
            name: name.into(),
            network,
            address: None,
            is_account_abstraction: None,
            signature_tx_hash: None,
        }
    }

    /// Set the wallet address.
    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Mark the wallet as account abstraction.
    pub fn account_abstraction(mut self, enabled: bool) -> Self {
        self.is_account_abstraction = Some(enabled);
        self
    }

    /// Attach the ownership proof.
    pub fn signature_tx_hash(mut self, hash: impl Into<String>) -> Self {
        self.signature_tx_hash = Some(hash.into());
        self
    }
}
