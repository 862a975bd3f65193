use serde::{Deserialize, Serialize};

/// A fee the instance charges on top of BlindPay's own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartnerFee {
    /// Fee identifier
    pub id: String,
    pub instance_id: String,
    /// Display name
    pub name: String,
    pub payout_percentage_fee: i64,
    /// Flat payout fee, in cents
    pub payout_flat_fee: i64,
    pub payin_percentage_fee: i64,
    /// Flat payin fee, in cents
    pub payin_flat_fee: i64,
    /// Wallets the collected fees are sent to
    #[serde(default)]
    pub evm_wallet_address: Option<String>,
    #[serde(default)]
    pub stellar_wallet_address: Option<String>,
    #[serde(default)]
    pub virtual_account_set: Option<bool>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Request to create a partner fee.
#[derive(Debug, Clone, Serialize)]
pub struct CreatePartnerFeeRequest {
    /// Apply the fee to virtual account deposits
    #[serde(skip_serializing_if = "Option::is_none")]
    pub virtual_account_set: Option<bool>,
    pub evm_wallet_address: String,
    pub name: String,
    pub payin_flat_fee: i64,
    pub payin_percentage_fee: i64,
    pub payout_flat_fee: i64,
    pub payout_percentage_fee: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stellar_wallet_address: Option<String>,
}
