//! Payout (stablecoin to fiat) types.

use serde::{Deserialize, Serialize};

use crate::resources::bank_accounts::{AchCopDocumentType, SpeiProtocol, TransfersType};
use crate::types::{
    AccountClass, Country, Currency, Network, PaginationMetadata, Rail, StablecoinToken,
    TransactionDocumentType,
};

/// Lifecycle state of a payout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayoutStatus {
    Processing,
    OnHold,
    Failed,
    Refunded,
    Completed,
}

/// Progress of one tracking stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackingStep {
    Processing,
    OnHold,
    Completed,
}

/// State of the liquidity provider leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderStatus {
    Deposited,
    Converted,
    Withdrawn,
}

/// State of the fiat payment leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentProviderStatus {
    Canceled,
    Failed,
    Returned,
    Sent,
}

/// Expected delivery time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EstimatedTimeOfArrival {
    #[serde(rename = "5_min")]
    FiveMinutes,
    #[serde(rename = "30_min")]
    ThirtyMinutes,
    #[serde(rename = "2_hours")]
    TwoHours,
    #[serde(rename = "1_business_day")]
    OneBusinessDay,
    #[serde(rename = "2_business_days")]
    TwoBusinessDays,
    #[serde(rename = "5_business_days")]
    FiveBusinessDays,
}

/// Outcome of the final stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackingCompleteStatus {
    TokensRefunded,
    Paid,
}

/// Whether the sender's on-chain transfer was seen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackingTransactionStatus {
    Failed,
    Found,
}

/// On-chain transfer from the sender.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoutTrackingTransaction {
    pub step: TrackingStep,
    #[serde(default)]
    pub status: Option<TrackingTransactionStatus>,
    #[serde(default)]
    pub transaction_hash: Option<String>,
    #[serde(default)]
    pub completed_at: Option<String>,
}

/// Fiat payment to the receiver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoutTrackingPayment {
    pub step: TrackingStep,
    #[serde(default)]
    pub provider_name: Option<String>,
    #[serde(default)]
    pub provider_transaction_id: Option<String>,
    #[serde(default)]
    pub provider_status: Option<PaymentProviderStatus>,
    #[serde(default)]
    pub recipient_name: Option<String>,
    #[serde(default)]
    pub recipient_tax_id: Option<String>,
    #[serde(default)]
    pub recipient_bank_code: Option<String>,
    #[serde(default)]
    pub recipient_branch_code: Option<String>,
    #[serde(default)]
    pub recipient_account_number: Option<String>,
    #[serde(default)]
    pub recipient_account_type: Option<String>,
    #[serde(default)]
    pub estimated_time_of_arrival: Option<EstimatedTimeOfArrival>,
    #[serde(default)]
    pub completed_at: Option<String>,
}

/// Stablecoin to fiat conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoutTrackingLiquidity {
    pub step: TrackingStep,
    #[serde(default)]
    pub provider_transaction_id: Option<String>,
    #[serde(default)]
    pub provider_status: Option<ProviderStatus>,
    #[serde(default)]
    pub estimated_time_of_arrival: Option<EstimatedTimeOfArrival>,
    #[serde(default)]
    pub completed_at: Option<String>,
}

/// Final stage of a payout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoutTrackingComplete {
    pub step: TrackingStep,
    #[serde(default)]
    pub status: Option<TrackingCompleteStatus>,
    #[serde(default)]
    pub transaction_hash: Option<String>,
    #[serde(default)]
    pub completed_at: Option<String>,
}

/// Partner fee transfer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoutTrackingPartnerFee {
    pub step: TrackingStep,
    #[serde(default)]
    pub transaction_hash: Option<String>,
    #[serde(default)]
    pub completed_at: Option<String>,
}

/// A payout.
///
/// Destination fields mirror the bank account the payout was sent to; only
/// those relevant to its rail are present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payout {
    /// Payout identifier
    pub id: String,
    pub receiver_id: String,
    pub status: PayoutStatus,
    pub sender_wallet_address: String,
    #[serde(default)]
    pub signed_transaction: Option<String>,
    pub quote_id: String,
    pub instance_id: String,
    #[serde(default)]
    pub tracking_transaction: Option<PayoutTrackingTransaction>,
    #[serde(default)]
    pub tracking_payment: Option<PayoutTrackingPayment>,
    #[serde(default)]
    pub tracking_liquidity: Option<PayoutTrackingLiquidity>,
    #[serde(default)]
    pub tracking_complete: Option<PayoutTrackingComplete>,
    #[serde(default)]
    pub tracking_partner_fee: Option<PayoutTrackingPartnerFee>,
    /// Creation time (ISO 8601)
    pub created_at: String,
    /// Last update time (ISO 8601)
    pub updated_at: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub legal_name: Option<String>,
    pub network: Network,
    pub token: StablecoinToken,
    #[serde(default)]
    pub description: Option<String>,
    /// Amount debited from the sender, in cents
    pub sender_amount: i64,
    /// Amount credited to the receiver, in cents
    pub receiver_amount: i64,
    #[serde(default)]
    pub partner_fee_amount: Option<i64>,
    #[serde(default)]
    pub commercial_quotation: Option<f64>,
    #[serde(default)]
    pub blindpay_quotation: Option<f64>,
    #[serde(default)]
    pub total_fee_amount: Option<f64>,
    #[serde(default)]
    pub receiver_local_amount: Option<i64>,
    pub currency: Currency,
    #[serde(default)]
    pub transaction_document_file: Option<String>,
    #[serde(default)]
    pub transaction_document_type: Option<TransactionDocumentType>,
    #[serde(default)]
    pub transaction_document_id: Option<String>,
    /// Bank account display name
    pub name: String,
    /// Rail the payout travels on
    #[serde(rename = "type")]
    pub rail: Rail,
    #[serde(default)]
    pub pix_key: Option<String>,
    #[serde(default)]
    pub pix_safe_bank_code: Option<String>,
    #[serde(default)]
    pub pix_safe_branch_code: Option<String>,
    #[serde(default)]
    pub pix_safe_cpf_cnpj: Option<String>,
    #[serde(default)]
    pub account_number: Option<String>,
    #[serde(default)]
    pub routing_number: Option<String>,
    #[serde(default)]
    pub country: Option<Country>,
    #[serde(default)]
    pub account_class: Option<AccountClass>,
    #[serde(default)]
    pub address_line_1: Option<String>,
    #[serde(default)]
    pub address_line_2: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state_province_region: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
    /// "checking" or "saving"
    #[serde(default)]
    pub account_type: Option<String>,
    #[serde(default)]
    pub ach_cop_beneficiary_first_name: Option<String>,
    #[serde(default)]
    pub ach_cop_bank_account: Option<String>,
    #[serde(default)]
    pub ach_cop_bank_code: Option<String>,
    #[serde(default)]
    pub ach_cop_beneficiary_last_name: Option<String>,
    #[serde(default)]
    pub ach_cop_document_id: Option<String>,
    #[serde(default)]
    pub ach_cop_document_type: Option<AchCopDocumentType>,
    #[serde(default)]
    pub ach_cop_email: Option<String>,
    #[serde(default)]
    pub beneficiary_name: Option<String>,
    #[serde(default)]
    pub spei_clabe: Option<String>,
    #[serde(default)]
    pub spei_protocol: Option<SpeiProtocol>,
    #[serde(default)]
    pub spei_institution_code: Option<String>,
    #[serde(default)]
    pub swift_beneficiary_country: Option<Country>,
    #[serde(default)]
    pub swift_code_bic: Option<String>,
    #[serde(default)]
    pub swift_account_holder_name: Option<String>,
    #[serde(default)]
    pub swift_account_number_iban: Option<String>,
    #[serde(default)]
    pub transfers_account: Option<String>,
    #[serde(default)]
    pub transfers_type: Option<TransfersType>,
    #[serde(default)]
    pub has_virtual_account: Option<bool>,
}

/// A page of payouts.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PayoutList {
    pub data: Vec<Payout>,
    pub pagination: PaginationMetadata,
}

/// Query for [`Payouts::list`](super::Payouts::list).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListPayoutsParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starting_after: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ending_before: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receiver_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PayoutStatus>,
}

impl ListPayoutsParams {
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn receiver_id(mut self, receiver_id: impl Into<String>) -> Self {
        self.receiver_id = Some(receiver_id.into());
        self
    }

    pub fn status(mut self, status: PayoutStatus) -> Self {
        self.status = Some(status);
        self
    }
}

/// Request to execute a quote from an EVM wallet.
#[derive(Debug, Clone, Serialize)]
pub struct CreateEvmPayoutRequest {
    pub quote_id: String,
    pub sender_wallet_address: String,
}

/// Request to execute a quote from a Stellar wallet.
#[derive(Debug, Clone, Serialize)]
pub struct CreateStellarPayoutRequest {
    pub quote_id: String,
    pub sender_wallet_address: String,
    /// Signed transaction returned by [`Payouts::authorize_stellar`](super::Payouts::authorize_stellar)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signed_transaction: Option<String>,
}

/// Request to build the Stellar transaction for a quote.
#[derive(Debug, Clone, Serialize)]
pub struct AuthorizeStellarRequest {
    pub quote_id: String,
    pub sender_wallet_address: String,
}

/// Stellar transaction to sign.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StellarAuthorization {
    pub transaction_hash: String,
}

/// The started payout.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreatedPayout {
    pub id: String,
    pub status: PayoutStatus,
    pub sender_wallet_address: String,
    pub tracking_complete: PayoutTrackingComplete,
    pub tracking_payment: PayoutTrackingPayment,
    pub tracking_transaction: PayoutTrackingTransaction,
    #[serde(default)]
    pub tracking_partner_fee: Option<PayoutTrackingPartnerFee>,
    #[serde(default)]
    pub tracking_liquidity: Option<PayoutTrackingLiquidity>,
    #[serde(default)]
    pub receiver_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eta_wire_format() {
        let eta: EstimatedTimeOfArrival = serde_json::from_str(r#""1_business_day""#).unwrap();
        assert_eq!(eta, EstimatedTimeOfArrival::OneBusinessDay);
        assert_eq!(
            serde_json::to_string(&EstimatedTimeOfArrival::FiveMinutes).unwrap(),
            r#""5_min""#
        );
    }

    #[test]
    fn test_stellar_request_omits_missing_signature() {
        let request = CreateStellarPayoutRequest {
            quote_id: "qu_1".to_string(),
            sender_wallet_address: "GABC".to_string(),
            signed_transaction: None,
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({"quote_id": "qu_1", "sender_wallet_address": "GABC"})
        );
    }

    #[test]
    fn test_created_payout_decodes() {
        let json = r#"{
            "id": "pa_1",
            "status": "processing",
            "sender_wallet_address": "0xabc",
            "tracking_complete": {"step": "on_hold", "status": null},
            "tracking_payment": {"step": "on_hold", "estimated_time_of_arrival": "2_business_days"},
            "tracking_transaction": {"step": "processing", "status": "found", "transaction_hash": "0x1"},
            "tracking_liquidity": {"step": "processing", "provider_status": "deposited"}
        }"#;
        let payout: CreatedPayout = serde_json::from_str(json).unwrap();
        assert_eq!(payout.tracking_transaction.status, Some(TrackingTransactionStatus::Found));
        assert_eq!(
            payout.tracking_payment.estimated_time_of_arrival,
            Some(EstimatedTimeOfArrival::TwoBusinessDays)
        );
        assert_eq!(
            payout.tracking_liquidity.unwrap().provider_status,
            Some(ProviderStatus::Deposited)
        );
    }
}
