use serde::{Deserialize, Serialize};

use crate::types::{Network, StablecoinToken};

/// US bank issuing the virtual account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BankingPartner {
    Jpmorgan,
    Citi,
}

/// Account type as shown to senders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VirtualAccountType {
    #[serde(rename = "Personal checking")]
    PersonalChecking,
    #[serde(rename = "Business checking")]
    BusinessChecking,
}

/// Routing and account number for one US rail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutingDetails {
    pub routing_number: String,
    pub account_number: String,
}

/// Name and address block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartyAddress {
    pub name: String,
    pub address_line_1: String,
    pub address_line_2: String,
    #[serde(default)]
    pub swift_bic_code: Option<String>,
}

/// US deposit instructions of a virtual account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsDepositInstructions {
    pub ach: RoutingDetails,
    pub rtp: RoutingDetails,
    pub wire: RoutingDetails,
    #[serde(default)]
    pub swift_bic_code: Option<String>,
    #[serde(default)]
    pub account_type: Option<VirtualAccountType>,
    #[serde(default)]
    pub beneficiary: Option<PartyAddress>,
    #[serde(default)]
    pub receiving_bank: Option<PartyAddress>,
}

/// Wallet a virtual account settles into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletRef {
    pub network: Network,
    pub address: String,
}

/// A USD virtual account that converts deposits to stablecoins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VirtualAccount {
    /// Virtual account identifier
    pub id: String,
    /// Issuing bank
    pub banking_partner: BankingPartner,
    /// KYC status of the account holder
    #[serde(default)]
    pub kyc_status: Option<String>,
    /// Deposit instructions
    pub us: UsDepositInstructions,
    /// Token deposits are converted to
    pub token: StablecoinToken,
    #[serde(default)]
    pub blockchain_wallet_id: Option<String>,
    #[serde(default)]
    pub blockchain_wallet: Option<WalletRef>,
}

/// Request to open a virtual account.
#[derive(Debug, Clone, Serialize)]
pub struct CreateVirtualAccountRequest {
    pub banking_partner: BankingPartner,
    pub token: StablecoinToken,
    pub blockchain_wallet_id: String,
}

/// Request to change where a virtual account settles.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateVirtualAccountRequest {
    pub blockchain_wallet_id: String,
    pub token: StablecoinToken,
}
