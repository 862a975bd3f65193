//! Types for the availability endpoints.

use serde::{Deserialize, Serialize};

use crate::types::Rail;

/// A payment rail offered by BlindPay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RailInfo {
    /// Display name (e.g. "Domestic Wire")
    pub label: String,
    /// Rail identifier (e.g. "wire")
    pub value: String,
    /// Country the rail serves (ISO alpha-2)
    pub country: String,
}

/// Query for [`Available::bank_details`](super::Available::bank_details).
#[derive(Debug, Clone, Copy, Serialize)]
pub struct BankDetailsRequest {
    /// The rail to describe
    pub rail: Rail,
}

/// An allowed value for a select-style bank detail field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankDetailItem {
    /// Display label
    pub label: String,
    /// Value to submit
    pub value: String,
    /// Whether the option can currently be used
    #[serde(default)]
    pub is_active: Option<bool>,
}

/// A field a bank account on a given rail must (or may) provide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankDetailField {
    /// Display label
    pub label: String,
    /// Validation pattern for the value
    pub regex: String,
    /// Body key the value is submitted under (e.g. "routing_number")
    pub key: String,
    /// Allowed values, for select-style fields
    #[serde(default)]
    pub items: Option<Vec<BankDetailItem>>,
    /// Whether the field is mandatory
    pub required: bool,
}

/// Bank information for a SWIFT/BIC code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwiftCodeInfo {
    /// Record identifier
    pub id: String,
    /// Bank name
    pub bank: String,
    /// City
    pub city: String,
    /// Branch name
    pub branch: String,
    /// The SWIFT/BIC code
    pub swift_code: String,
    /// Link to the code's reference page
    pub swift_code_link: String,
    /// Country name
    pub country: String,
    /// Country slug
    pub country_slug: String,
    /// Street address
    pub address: String,
    /// Postal code
    pub postcode: String,
}
