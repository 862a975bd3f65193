//! Receiver (KYC subject) types.

use serde::{Deserialize, Serialize};

use crate::types::{Country, PaginationMetadata};

/// Depth of identity verification applied to a receiver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KycType {
    /// Minimal checks
    Light,
    /// Standard KYC
    Standard,
    /// Enhanced due diligence
    Enhanced,
}

/// Whether a receiver is a person or a company.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReceiverType {
    /// A natural person
    Individual,
    /// A legal entity
    Business,
}

/// Identity document kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IdDocType {
    Passport,
    IdCard,
    Drivers,
    DriversLicense,
    NationalId,
    Other,
}

/// Proof of address document kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProofOfAddressDocType {
    UtilityBill,
    BankStatement,
    GovernmentLetter,
    Other,
}

/// Source of funds document kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceOfFundsDocType {
    BusinessIncome,
    Salary,
    Investment,
    Gift,
    Inheritance,
    Other,
}

/// Declared purpose of the receiver's transactions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PurposeOfTransactions {
    BusinessTransactions,
    PersonalTransactions,
    Investment,
    Other,
}

/// Role of a business owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OwnerRole {
    BeneficialOwner,
    AuthorizedSigner,
    Other,
}

/// A beneficial owner or signer of a business receiver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiverOwner {
    /// First name
    pub first_name: String,
    /// Last name
    pub last_name: String,
    /// Role in the business
    pub role: OwnerRole,
    /// Date of birth (ISO 8601)
    pub date_of_birth: String,
    /// Tax identifier
    pub tax_id: String,
    /// Street address
    pub address_line_1: String,
    /// Apartment, suite, etc.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_line_2: Option<String>,
    /// City
    pub city: String,
    /// State, province or region
    pub state_province_region: String,
    /// Country of residence
    pub country: Country,
    /// Postal code
    pub postal_code: String,
    /// Country that issued the ID document
    pub id_doc_country: Country,
    /// ID document kind
    pub id_doc_type: IdDocType,
    /// URL of the front of the ID document
    pub id_doc_front_file: String,
    /// URL of the back of the ID document
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_doc_back_file: Option<String>,
}

/// Optional KYC details shared by receiver create and update requests.
///
/// Every unset field is left out of the request body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReceiverDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line_1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line_2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternate_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Date of birth (ISO 8601)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    /// Your own identifier for the receiver
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Company formation date (ISO 8601)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formation_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Registered company name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legal_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_province_region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proof_of_address_doc_type: Option<ProofOfAddressDocType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proof_of_address_doc_file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_doc_country: Option<Country>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_doc_type: Option<IdDocType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_doc_front_file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_doc_back_file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    /// Owners of a business receiver
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owners: Option<Vec<ReceiverOwner>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub incorporation_doc_file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proof_of_ownership_doc_file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_of_funds_doc_type: Option<SourceOfFundsDocType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_of_funds_doc_file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selfie_file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purpose_of_transactions: Option<PurposeOfTransactions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purpose_of_transactions_explanation: Option<String>,
    /// For-benefit-of account
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_fbo: Option<bool>,
    /// Accepted terms of service id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tos_id: Option<String>,
}

/// Request to create a receiver.
#[derive(Debug, Clone, Serialize)]
pub struct CreateReceiverRequest {
    /// Country of residence or incorporation
    pub country: Country,
    /// Contact email
    pub email: String,
    /// Verification depth
    pub kyc_type: KycType,
    /// Person or company
    #[serde(rename = "type")]
    pub receiver_type: ReceiverType,
    /// Additional KYC details
    #[serde(flatten)]
    pub details: ReceiverDetails,
}

impl CreateReceiverRequest {
    /// Create a request with only the mandatory fields.
    pub fn new(
        country: Country,
        email: impl Into<String>,
        kyc_type: KycType,
        receiver_type: ReceiverType,
    ) -> Self {
        Self {
            country,
            email: email.into(),
            kyc_type,
            receiver_type,
            details: ReceiverDetails::default(),
        }
    }

    /// Replace the optional KYC details.
    pub fn details(mut self, details: ReceiverDetails) -> Self {
        self.details = details;
        self
    }
}

/// Request to update a receiver. Only the fields that are set are changed.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateReceiverRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<Country>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// KYC details to change
    #[serde(flatten)]
    pub details: ReceiverDetails,
}

/// Query for [`Receivers::list`](super::Receivers::list).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListReceiversParams {
    /// Page size (10, 50, 100, 200, 500 or 1000)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Items to skip
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    /// Return receivers after this id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starting_after: Option<String>,
    /// Return receivers before this id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ending_before: Option<String>,
    /// Filter by full name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
}

impl ListReceiversParams {
    /// Set the page size.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Filter by full name.
    pub fn full_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = Some(full_name.into());
        self
    }
}

/// A receiver as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Receiver {
    /// Receiver identifier
    pub id: String,
    /// Person or company
    #[serde(rename = "type")]
    pub receiver_type: ReceiverType,
    /// Verification depth
    pub kyc_type: KycType,
    /// Verification status (e.g. "verifying", "approved", "rejected")
    #[serde(default)]
    pub kyc_status: Option<String>,
    /// Contact email
    pub email: String,
    /// Country of residence or incorporation
    pub country: Country,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub legal_name: Option<String>,
    #[serde(default)]
    pub external_id: Option<String>,
    #[serde(default)]
    pub tos_id: Option<String>,
    /// Instance the receiver belongs to
    #[serde(default)]
    pub instance_id: Option<String>,
    /// Creation time (ISO 8601)
    #[serde(default)]
    pub created_at: Option<String>,
    /// Last update time (ISO 8601)
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// A page of receivers.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReceiverList {
    /// Receivers on this page
    pub data: Vec<Receiver>,
    /// Cursor information
    pub pagination: PaginationMetadata,
}

/// Daily and monthly limits, in cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LimitWindow {
    /// Daily limit
    pub daily: i64,
    /// Monthly limit
    pub monthly: i64,
}

/// Payin and payout limits of a receiver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiverLimitsDetail {
    pub payin: LimitWindow,
    pub payout: LimitWindow,
}

/// Response of [`Receivers::limits`](super::Receivers::limits).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiverLimits {
    pub limits: ReceiverLimitsDetail,
}

/// Document supporting a limit increase request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SupportingDocumentType {
    IndividualBankStatement,
    IndividualTaxReturn,
    IndividualProofOfIncome,
    BusinessBankStatement,
    BusinessFinancialStatements,
    BusinessTaxReturn,
}

/// Review state of a limit increase request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LimitIncreaseStatus {
    InReview,
    Approved,
    Rejected,
}

/// Request to raise a receiver's limits. Limits are in cents.
#[derive(Debug, Clone, Serialize)]
pub struct LimitIncreaseRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_transaction: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly: Option<i64>,
    /// Kind of supporting document
    pub supporting_document_type: SupportingDocumentType,
    /// URL of the supporting document
    pub supporting_document_file: String,
}

impl LimitIncreaseRequest {
    /// Create a request backed by the given document.
    pub fn new(document_type: SupportingDocumentType, document_file: impl Into<String>) -> Self {
        Self {
            per_transaction: None,
            daily: None,
            monthly: None,
            supporting_document_type: document_type,
            supporting_document_file: document_file.into(),
        }
    }

    /// Requested per-transaction limit.
    pub fn per_transaction(mut self, cents: i64) -> Self {
        self.per_transaction = Some(cents);
        self
    }

    /// Requested daily limit.
    pub fn daily(mut self, cents: i64) -> Self {
        self.daily = Some(cents);
        self
    }

    /// Requested monthly limit.
    pub fn monthly(mut self, cents: i64) -> Self {
        self.monthly = Some(cents);
        self
    }
}

/// A submitted limit increase request.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LimitIncrease {
    /// Request identifier
    pub id: String,
    /// Receiver the request is for
    pub receiver_id: String,
    /// Review state
    pub status: LimitIncreaseStatus,
    /// Creation time (ISO 8601)
    pub created_at: String,
    /// Last update time (ISO 8601)
    pub updated_at: String,
    #[serde(default)]
    pub per_transaction: Option<i64>,
    #[serde(default)]
    pub daily: Option<i64>,
    #[serde(default)]
    pub monthly: Option<i64>,
    #[serde(default)]
    pub supporting_document_file: Option<String>,
    #[serde(default)]
    pub supporting_document_type: Option<SupportingDocumentType>,
}
