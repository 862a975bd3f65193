//! Typed façades over the BlindPay REST resources.
//!
//! Each façade borrows the shared [`ApiClient`](crate::rest::ApiClient) and
//! the instance id of its [`BlindPay`](crate::BlindPay) client, and maps one
//! method to one endpoint. Receiver scoped resources (blockchain wallets,
//! virtual accounts, bank accounts and their offramp wallets) are reached
//! through [`Receivers`](receivers::Receivers).

pub mod api_keys;
pub mod available;
pub mod bank_accounts;
pub mod blockchain_wallets;
pub mod instances;
pub mod offramp_wallets;
pub mod partner_fees;
pub mod payin_quotes;
pub mod payins;
pub mod payouts;
pub mod quotes;
pub mod receivers;
pub mod terms_of_service;
pub mod virtual_accounts;
pub mod webhook_endpoints;
