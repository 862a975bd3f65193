//! Payout quote and FX rate types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::serde_helpers::minor_units;
use crate::types::{Currency, CurrencyType, Network, StablecoinToken, TransactionDocumentType};

/// Request for a payout quote.
///
/// `request_amount` is given in major units and sent in cents.
#[derive(Debug, Clone, Serialize)]
pub struct CreateQuoteRequest {
    /// Destination bank account
    pub bank_account_id: String,
    /// Which side `request_amount` fixes
    pub currency_type: CurrencyType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network: Option<Network>,
    /// Amount in major units (e.g. 10.50)
    #[serde(with = "minor_units")]
    pub request_amount: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<StablecoinToken>,
    /// Whether the sender covers the fees
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_fees: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partner_fee_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_document_file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_document_id: Option<String>,
    /// Kind of document backing the transaction
    pub transaction_document_type: TransactionDocumentType,
}

impl CreateQuoteRequest {
    /// Create a quote request with only the mandatory fields.
    pub fn new(
        bank_account_id: impl Into<String>,
        currency_type: CurrencyType,
        request_amount: Decimal,
        transaction_document_type: TransactionDocumentType,
    ) -> Self {
        Self {
            bank_account_id: bank_account_id.into(),
            currency_type,
            network: None,
            request_amount,
            token: None,
            cover_fees: None,
            description: None,
            partner_fee_id: None,
            transaction_document_file: None,
            transaction_document_id: None,
            transaction_document_type,
        }
    }

    /// Network the stablecoins are sent from.
    pub fn network(mut self, network: Network) -> Self {
        self.network = Some(network);
        self
    }

    /// Token the payout is funded with.
    pub fn token(mut self, token: StablecoinToken) -> Self {
        self.token = Some(token);
        self
    }

    /// Let the sender cover the fees.
    pub fn cover_fees(mut self, cover_fees: bool) -> Self {
        self.cover_fees = Some(cover_fees);
        self
    }

    /// Apply a partner fee.
    pub fn partner_fee_id(mut self, partner_fee_id: impl Into<String>) -> Self {
        self.partner_fee_id = Some(partner_fee_id.into());
        self
    }

    /// Free text description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Network a contract lives on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractNetwork {
    pub name: String,
    #[serde(rename = "chainId")]
    pub chain_id: i64,
}

/// Token approval the sender must submit before the payout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteContract {
    /// Contract ABI
    pub abi: Vec<serde_json::Value>,
    /// Token contract address
    pub address: String,
    /// Function to call (e.g. "approve")
    pub function_name: String,
    /// BlindPay contract to approve
    pub blindpay_contract_address: String,
    /// Amount to approve, in token base units
    pub amount: String,
    pub network: ContractNetwork,
}

/// A payout quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// Quote identifier
    pub id: String,
    /// Expiry as a Unix timestamp in milliseconds
    pub expires_at: i64,
    /// Market rate
    pub commercial_quotation: f64,
    /// Rate applied by BlindPay
    pub blindpay_quotation: f64,
    /// Amount the receiver gets, in cents
    pub receiver_amount: f64,
    /// Amount the sender pays, in cents
    pub sender_amount: f64,
    pub partner_fee_amount: f64,
    pub flat_fee: f64,
    /// Approval the sender must submit on chain
    pub contract: QuoteContract,
    /// Amount in the receiver's local currency, in cents
    pub receiver_local_amount: f64,
    pub description: String,
}

/// Request for an indicative FX rate.
#[derive(Debug, Clone, Serialize)]
pub struct FxRateRequest {
    /// Which side `request_amount` fixes
    pub currency_type: CurrencyType,
    pub from: Currency,
    pub to: Currency,
    /// Amount in major units, sent in cents
    #[serde(with = "minor_units")]
    pub request_amount: Decimal,
}

/// An indicative FX rate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FxRate {
    pub commercial_quotation: f64,
    pub blindpay_quotation: f64,
    /// Converted amount, in cents
    pub result_amount: f64,
    pub instance_flat_fee: f64,
    pub instance_percentage_fee: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_request_sends_cents() {
        let request = CreateQuoteRequest::new(
            "ba_1",
            CurrencyType::Sender,
            Decimal::new(1050, 2),
            TransactionDocumentType::Invoice,
        )
        .network(Network::Base)
        .token(StablecoinToken::Usdc);

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "bank_account_id": "ba_1",
                "currency_type": "sender",
                "network": "base",
                "request_amount": 1050,
                "token": "USDC",
                "transaction_document_type": "invoice"
            })
        );
    }

    #[test]
    fn test_fx_rate_request_rounds_half_even() {
        let request = FxRateRequest {
            currency_type: CurrencyType::Receiver,
            from: Currency::Usdc,
            to: Currency::Brl,
            request_amount: Decimal::new(10005, 3),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["request_amount"], 1000);
        assert_eq!(json["from"], "USDC");
    }

    #[test]
    fn test_quote_contract_camel_case() {
        let json = r#"{
            "abi": [{"type": "function", "name": "approve"}],
            "address": "0xToken",
            "functionName": "approve",
            "blindpayContractAddress": "0xBlindPay",
            "amount": "10500000",
            "network": {"name": "Base", "chainId": 8453}
        }"#;
        let contract: QuoteContract = serde_json::from_str(json).unwrap();
        assert_eq!(contract.function_name, "approve");
        assert_eq!(contract.network.chain_id, 8453);
        assert_eq!(contract.abi.len(), 1);
    }
}
