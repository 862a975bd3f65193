//! Authentication for the BlindPay API.
//!
//! BlindPay authenticates with a static API key and an instance id, both sent
//! as headers. The key is held in a [`secrecy::SecretString`].

mod credentials;

pub use credentials::{API_KEY_ENV, Credentials, EnvCredentials, INSTANCE_ID_ENV};
