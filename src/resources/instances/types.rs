//! Types for instance administration endpoints.

use serde::{Deserialize, Serialize};

/// Role of a member within an instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InstanceMemberRole {
    /// Full control, including deleting the instance
    Owner,
    /// Administrative access
    Admin,
    /// Finance operations
    Finance,
    /// Approval workflows
    Checker,
    /// Day to day operations
    Operations,
    /// API and integration access
    Developer,
    /// Read only
    Viewer,
}

/// A member of the instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceMember {
    /// Member identifier
    pub id: String,
    /// Email address
    pub email: String,
    /// First name
    pub first_name: String,
    /// Middle name
    #[serde(default)]
    pub middle_name: Option<String>,
    /// Last name
    pub last_name: String,
    /// Avatar URL
    #[serde(default)]
    pub image_url: Option<String>,
    /// When the member joined (ISO 8601)
    pub created_at: String,
    /// Member role
    pub role: InstanceMemberRole,
}

/// Request to rename an instance or change its receiver invite redirect.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateInstanceRequest {
    /// New instance name
    pub name: String,
    /// Where receivers land after completing an invite
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receiver_invite_redirect_url: Option<String>,
}

impl UpdateInstanceRequest {
    /// Create a rename request.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the receiver invite redirect URL.
    pub fn receiver_invite_redirect_url(mut self, url: impl Into<String>) -> Self {
        self.receiver_invite_redirect_url = Some(url.into());
        self
    }
}

/// Body of a member role change.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct UpdateMemberRoleRequest {
    /// The new role
    pub role: InstanceMemberRole,
}

/// Request to build a Stellar trustline transaction for an address.
#[derive(Debug, Clone, Serialize)]
pub struct CreateAssetTrustlineRequest {
    /// Stellar account address
    pub address: String,
}

/// An unsigned Stellar transaction.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AssetTrustline {
    /// Transaction envelope in XDR, to be signed and submitted
    pub xdr: String,
}

/// Request to mint test USDB on Stellar.
#[derive(Debug, Clone, Serialize)]
pub struct MintUsdbStellarRequest {
    /// Recipient address
    pub address: String,
    /// Amount to mint, as a decimal string
    pub amount: String,
    /// Signed trustline transaction, when the account has none yet
    #[serde(rename = "signedXdr", skip_serializing_if = "Option::is_none")]
    pub signed_xdr: Option<String>,
}

impl MintUsdbStellarRequest {
    /// Create a mint request.
    pub fn new(address: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            amount: amount.into(),
            signed_xdr: None,
        }
    }

    /// Attach a signed trustline transaction.
    pub fn signed_xdr(mut self, xdr: impl Into<String>) -> Self {
        self.signed_xdr = Some(xdr.into());
        self
    }
}

/// Request to mint test USDB on Solana.
#[derive(Debug, Clone, Serialize)]
pub struct MintUsdbSolanaRequest {
    /// Recipient address
    pub address: String,
    /// Amount to mint, as a decimal string
    pub amount: String,
}

/// Result of a Solana mint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MintUsdbSolanaResponse {
    /// Whether the mint was submitted
    pub success: bool,
    /// Transaction signature
    #[serde(default)]
    pub signature: Option<String>,
    /// Failure reason reported by the chain
    #[serde(default)]
    pub error: Option<String>,
}

/// Request to prepare a Solana token delegation.
#[derive(Debug, Clone, Serialize)]
pub struct PrepareDelegateSolanaRequest {
    /// Amount to delegate, as a decimal string
    pub amount: String,
    /// Token owner address
    pub owner_address: String,
    /// Token mint address
    pub token_address: String,
}

/// A prepared Solana delegation transaction.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PrepareDelegateSolanaResponse {
    /// Whether the transaction was prepared
    pub success: bool,
    /// Serialized transaction to sign
    #[serde(default)]
    pub transaction: Option<String>,
    /// Diagnostic output
    #[serde(default)]
    pub debug: Option<String>,
}
