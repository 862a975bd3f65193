use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::resources::payins::PaymentMethod;
use crate::types::serde_helpers::minor_units;
use crate::types::{Currency, CurrencyType, Network, StablecoinToken};

/// Restrictions on who may pay a payin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayerRules {
    /// Tax ids allowed to pay via PIX
    #[serde(default)]
    pub pix_allowed_tax_ids: Option<Vec<String>>,
}

/// A quote for converting fiat into stablecoins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayinQuote {
    /// Quote identifier
    pub id: String,
    pub receiver_id: String,
    pub payment_method: PaymentMethod,
    #[serde(default)]
    pub token: Option<StablecoinToken>,
    /// Requested amount, in cents
    pub request_amount: i64,
    #[serde(default)]
    pub cover_fees: Option<bool>,
    pub currency_type: CurrencyType,
    /// Expiry as a Unix timestamp in milliseconds
    pub expires_at: i64,
    #[serde(default)]
    pub currency: Option<Currency>,
    pub commercial_quotation: f64,
    pub blindpay_quotation: f64,
    pub receiver_amount: f64,
    pub sender_amount: f64,
    pub partner_fee_amount: f64,
    pub flat_fee: f64,
    #[serde(default)]
    pub total_fee_amount: Option<f64>,
    #[serde(default)]
    pub receiver_local_amount: Option<f64>,
    #[serde(default)]
    pub payer_rules: Option<PayerRules>,
    #[serde(default)]
    pub blockchain_wallet_id: Option<String>,
    pub instance_id: String,
    #[serde(default)]
    pub partner_fee_id: Option<String>,
    #[serde(default)]
    pub billing_fee: Option<i64>,
    #[serde(default)]
    pub description: Option<String>,
    /// Creation time (ISO 8601)
    pub created_at: String,
    /// Last update time (ISO 8601)
    pub updated_at: String,
}

/// Request for a payin quote. `request_amount` is sent in cents.
#[derive(Debug, Clone, Serialize)]
pub struct CreatePayinQuoteRequest {
    pub receiver_id: String,
    /// Wallet the stablecoins are delivered to
    pub blockchain_wallet_id: String,
    pub payment_method: PaymentMethod,
    pub currency_type: CurrencyType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network: Option<Network>,
    /// Amount in major units
    #[serde(with = "minor_units")]
    pub request_amount: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<StablecoinToken>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_fees: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partner_fee_id: Option<String>,
}

impl CreatePayinQuoteRequest {
    /// Create a request with only the mandatory fields.
    pub fn new(
        receiver_id: impl Into<String>,
        blockchain_wallet_id: impl Into<String>,
        payment_method: PaymentMethod,
        currency_type: CurrencyType,
        request_amount: Decimal,
    ) -> Self {
        Self {
            receiver_id: receiver_id.into(),
            blockchain_wallet_id: blockchain_wallet_id.into(),
            payment_method,
            currency_type,
            network: None,
            request_amount,
            token: None,
            cover_fees: None,
            description: None,
            partner_fee_id: None,
        }
    }

    pub fn network(mut self, network: Network) -> Self {
        self.network = Some(network);
        self
    }

    pub fn token(mut self, token: StablecoinToken) -> Self {
        self.token = Some(token);
        self
    }

    pub fn cover_fees(mut self, cover_fees: bool) -> Self {
        self.cover_fees = Some(cover_fees);
        self
    }

    pub fn partner_fee_id(mut self, partner_fee_id: impl Into<String>) -> Self {
        self.partner_fee_id = Some(partner_fee_id.into());
        self
    }
}

/// Query for [`PayinQuotes::list`](super::PayinQuotes::list).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListPayinQuotesParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starting_after: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ending_before: Option<String>,
    /// Only quotes for this receiver
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receiver_id: Option<String>,
}
