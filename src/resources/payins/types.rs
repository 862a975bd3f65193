//! Payin (fiat to stablecoin) types.

use serde::{Deserialize, Serialize};

use crate::types::PaginationMetadata;

/// Lifecycle state of a payin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayinStatus {
    Processing,
    OnHold,
    Failed,
    Refunded,
    Completed,
}

/// How the payer sends fiat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum PaymentMethod {
    /// Brazilian PIX
    Pix,
}

/// Kind of payer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayinType {
    Individual,
    Company,
}

/// Fiat leg of a payin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayinTrackingTransaction {
    pub step: String,
    pub status: String,
    #[serde(default)]
    pub external_id: Option<String>,
    #[serde(default)]
    pub completed_at: Option<String>,
    #[serde(default)]
    pub sender_name: Option<String>,
    #[serde(default)]
    pub sender_tax_id: Option<String>,
    #[serde(default)]
    pub sender_bank_code: Option<String>,
    #[serde(default)]
    pub sender_account_number: Option<String>,
    #[serde(default)]
    pub trace_number: Option<String>,
    #[serde(default)]
    pub transaction_reference: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Payment provider leg of a payin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayinTrackingPayment {
    pub step: String,
    #[serde(default)]
    pub provider_name: Option<String>,
    #[serde(default)]
    pub completed_at: Option<String>,
}

/// On-chain leg of a payin (delivery or partner fee).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayinTrackingChain {
    pub step: String,
    #[serde(default)]
    pub transaction_hash: Option<String>,
    #[serde(default)]
    pub completed_at: Option<String>,
}

/// Routing and account number pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountRouting {
    pub routing_number: String,
    pub account_number: String,
}

/// Name and address of a party to a transfer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartyInfo {
    pub name: String,
    pub address_line_1: String,
    pub address_line_2: String,
}

/// Account the payer sends fiat to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlindPayBankDetails {
    pub routing_number: String,
    pub account_number: String,
    pub account_type: String,
    pub swift_bic_code: String,
    #[serde(default)]
    pub ach: Option<AccountRouting>,
    #[serde(default)]
    pub wire: Option<AccountRouting>,
    #[serde(default)]
    pub rtp: Option<AccountRouting>,
    #[serde(default)]
    pub beneficiary: Option<PartyInfo>,
    #[serde(default)]
    pub receiving_bank: Option<PartyInfo>,
}

/// A payin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payin {
    /// Payin identifier
    pub id: String,
    pub receiver_id: String,
    /// PIX copy-and-paste code
    #[serde(default)]
    pub pix_code: Option<String>,
    #[serde(default)]
    pub memo_code: Option<String>,
    #[serde(default)]
    pub clabe: Option<String>,
    pub status: PayinStatus,
    #[serde(default)]
    pub payin_quote_id: Option<String>,
    pub instance_id: String,
    #[serde(default)]
    pub tracking_transaction: Option<PayinTrackingTransaction>,
    #[serde(default)]
    pub tracking_payment: Option<PayinTrackingPayment>,
    #[serde(default)]
    pub tracking_complete: Option<PayinTrackingChain>,
    #[serde(default)]
    pub tracking_partner_fee: Option<PayinTrackingChain>,
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
    #[serde(default, rename = "type")]
    pub payin_type: Option<PayinType>,
    #[serde(default)]
    pub payment_method: Option<PaymentMethod>,
    /// Amounts in cents
    #[serde(default)]
    pub sender_amount: Option<i64>,
    #[serde(default)]
    pub receiver_amount: Option<i64>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub partner_fee_amount: Option<i64>,
    #[serde(default)]
    pub total_fee_amount: Option<f64>,
    #[serde(default)]
    pub commercial_quotation: Option<f64>,
    #[serde(default)]
    pub blindpay_quotation: Option<f64>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub billing_fee: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub network: Option<String>,
    #[serde(default)]
    pub blindpay_bank_details: Option<BlindPayBankDetails>,
}

/// A page of payins.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PayinList {
    pub data: Vec<Payin>,
    pub pagination: PaginationMetadata,
}

/// Query for [`Payins::list`](super::Payins::list).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListPayinsParams {
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
    pub status: Option<PayinStatus>,
}

impl ListPayinsParams {
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn receiver_id(mut self, receiver_id: impl Into<String>) -> Self {
        self.receiver_id = Some(receiver_id.into());
        self
    }

    pub fn status(mut self, status: PayinStatus) -> Self {
        self.status = Some(status);
        self
    }
}

/// Request to start a payin from a quote.
#[derive(Debug, Clone, Serialize)]
pub struct CreatePayinRequest {
    pub payin_quote_id: String,
}

/// The started payin and the instructions for the payer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreatedPayin {
    pub id: String,
    pub status: PayinStatus,
    #[serde(default)]
    pub pix_code: Option<String>,
    #[serde(default)]
    pub memo_code: Option<String>,
    #[serde(default)]
    pub clabe: Option<String>,
    #[serde(default)]
    pub tracking_complete: Option<PayinTrackingChain>,
    #[serde(default)]
    pub tracking_payment: Option<PayinTrackingPayment>,
    #[serde(default)]
    pub tracking_transaction: Option<PayinTrackingTransaction>,
    #[serde(default)]
    pub tracking_partner_fee: Option<PayinTrackingChain>,
    #[serde(default)]
    pub blindpay_bank_details: Option<BlindPayBankDetails>,
    pub receiver_id: String,
    /// Amounts in cents
    pub receiver_amount: i64,
    pub payment_method: PaymentMethod,
    pub billing_fee: i64,
    pub sender_amount: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_params_status_query() {
        let params = ListPayinsParams::default()
            .limit(10)
            .status(PayinStatus::OnHold);
        assert_eq!(
            serde_urlencoded::to_string(&params).unwrap(),
            "limit=10&status=on_hold"
        );
    }

    #[test]
    fn test_payin_decodes_tracking() {
        let json = r#"{
            "id": "pi_1",
            "receiver_id": "re_1",
            "pix_code": "000201...",
            "status": "processing",
            "instance_id": "in_1",
            "tracking_transaction": {"step": "processing", "status": "waiting"},
            "tracking_complete": {"step": "on_hold", "transaction_hash": null},
            "created_at": "2025-01-01T00:00:00Z",
            "updated_at": "2025-01-01T00:00:00Z",
            "type": "company",
            "sender_amount": 5240,
            "commercial_quotation": 5.43
        }"#;
        let payin: Payin = serde_json::from_str(json).unwrap();
        assert_eq!(payin.status, PayinStatus::Processing);
        assert_eq!(payin.payin_type, Some(PayinType::Company));
        assert_eq!(payin.sender_amount, Some(5240));
        assert_eq!(payin.tracking_transaction.unwrap().status, "waiting");
    }
}
