use serde::{Deserialize, Serialize};

use crate::resources::offramp_wallets::OfframpWallet;
use crate::types::{AccountClass, BankAccountType, Country, Rail};

/// SPEI destination kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpeiProtocol {
    Clabe,
    Debitcard,
    Phonenum,
}

/// Argentine account identifier kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransfersType {
    Cvu,
    Cbu,
    Alias,
}

/// Colombian identity document kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AchCopDocumentType {
    Cc,
    Ce,
    Nit,
    Pass,
    Pep,
}

/// Rail specific bank details.
///
/// Which fields are required depends on the rail; see
/// [`Available::bank_details`](crate::resources::available::Available::bank_details).
/// Unset fields are omitted from request bodies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankAccountDetails {
    // US rails (ACH, wire, RTP)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_class: Option<AccountClass>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_type: Option<BankAccountType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub routing_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beneficiary_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_line_1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_line_2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_province_region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<Country>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    // PIX
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pix_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pix_safe_bank_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pix_safe_branch_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pix_safe_cpf_cnpj: Option<String>,
    // SPEI
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spei_clabe: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spei_institution_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spei_protocol: Option<SpeiProtocol>,
    // Argentine transfers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transfers_account: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transfers_type: Option<TransfersType>,
    // Colombian ACH
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ach_cop_bank_account: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ach_cop_bank_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ach_cop_beneficiary_first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ach_cop_beneficiary_last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ach_cop_document_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ach_cop_document_type: Option<AchCopDocumentType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ach_cop_email: Option<String>,
    // International SWIFT
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swift_code_bic: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swift_account_holder_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swift_account_number_iban: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swift_beneficiary_address_line_1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swift_beneficiary_address_line_2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swift_beneficiary_city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swift_beneficiary_state_province_region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swift_beneficiary_country: Option<Country>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swift_beneficiary_postal_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swift_bank_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swift_bank_address_line_1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swift_bank_address_line_2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swift_bank_city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swift_bank_state_province_region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swift_bank_country: Option<Country>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swift_bank_postal_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swift_intermediary_bank_swift_code_bic: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swift_intermediary_bank_account_number_iban: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swift_intermediary_bank_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swift_intermediary_bank_country: Option<Country>,
}

/// A receiver's bank account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankAccount {
    /// Bank account identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Rail the account is paid through
    #[serde(rename = "type")]
    pub rail: Rail,
    /// Rail specific details
    #[serde(flatten)]
    pub details: BankAccountDetails,
    /// Tron wallet hash, for accounts funded from Tron
    #[serde(default)]
    pub tron_wallet_hash: Option<String>,
    /// Offramp wallets attached to this account
    #[serde(default)]
    pub offramp_wallets: Option<Vec<OfframpWallet>>,
    /// Creation time (ISO 8601)
    pub created_at: String,
}

/// Request to add a bank account to a receiver.
#[derive(Debug, Clone, Serialize)]
pub struct CreateBankAccountRequest {
    /// Display name
    pub name: String,
    /// Rail the account is paid through
    #[serde(rename = "type")]
    pub rail: Rail,
    /// Rail specific details
    #[serde(flatten)]
    pub details: BankAccountDetails,
}

impl CreateBankAccountRequest {
    /// Create a request for `rail` with the given details.
    pub fn new(name: impl Into<String>, rail: Rail, details: BankAccountDetails) -> Self {
        Self {
            name: name.into(),
            rail,
            details,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_pix_account_body() {
        let request = CreateBankAccountRequest::new(
            "Main",
            Rail::Pix,
            BankAccountDetails {
                pix_key: Some("14947677768".to_string()),
                ..Default::default()
            },
        );
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"name": "Main", "type": "pix", "pix_key": "14947677768"})
        );
    }

    #[test]
    fn test_bank_account_decodes_flattened_details() {
        let json = r#"{
            "id": "ba_1",
            "name": "Wire",
            "type": "wire",
            "account_class": "business",
            "routing_number": "021000021",
            "country": "US",
            "spei_protocol": null,
            "created_at": "2025-01-01T00:00:00.000Z"
        }"#;
        let account: BankAccount = serde_json::from_str(json).unwrap();
        assert_eq!(account.rail, Rail::Wire);
        assert_eq!(account.details.account_class, Some(AccountClass::Business));
        assert_eq!(account.details.routing_number.as_deref(), Some("021000021"));
        assert_eq!(account.details.country, Some(Country::Us));
        assert_eq!(account.details.spei_protocol, None);
        assert!(account.offramp_wallets.is_none());
    }

    #[test]
    fn test_rail_enums_wire_format() {
        assert_eq!(serde_json::to_string(&TransfersType::Alias).unwrap(), r#""ALIAS""#);
        assert_eq!(serde_json::to_string(&AchCopDocumentType::Nit).unwrap(), r#""NIT""#);
        assert_eq!(serde_json::to_string(&SpeiProtocol::Debitcard).unwrap(), r#""debitcard""#);
    }
}
