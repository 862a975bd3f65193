//! Credential management for BlindPay API authentication.

use secrecy::{ExposeSecret, SecretString};

/// Default environment variable holding the API key.
pub const API_KEY_ENV: &str = "BLINDPAY_API_KEY";
/// Default environment variable holding the instance id.
pub const INSTANCE_ID_ENV: &str = "BLINDPAY_INSTANCE_ID";

/// API credentials: the secret API key and the instance it belongs to.
///
/// Both values are sent as headers on every request.
#[derive(Clone)]
pub struct Credentials {
    api_key: SecretString,
    /// The instance identifier (not secret, also used in request paths)
    pub instance_id: String,
}

impl Credentials {
    /// Create new credentials from an API key and instance id.
    pub fn new(api_key: impl Into<String>, instance_id: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::from(api_key.into()),
            instance_id: instance_id.into(),
        }
    }

    /// Get the API key.
    ///
    /// This method exposes the secret - use carefully.
    pub fn expose_api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &"[REDACTED]")
            .field("instance_id", &self.instance_id)
            .finish()
    }
}

/// Loads [`Credentials`] from environment variables.
///
/// By default, reads `BLINDPAY_API_KEY` and `BLINDPAY_INSTANCE_ID`.
pub struct EnvCredentials;

impl EnvCredentials {
    /// Try to read credentials from the default environment variables.
    ///
    /// Returns `None` if either variable is not set.
    pub fn try_from_env() -> Option<Credentials> {
        Self::try_from_env_vars(API_KEY_ENV, INSTANCE_ID_ENV)
    }

    /// Try to read credentials from custom environment variable names.
    ///
    /// Returns `None` if either variable is not set.
    pub fn try_from_env_vars(key_var: &str, instance_var: &str) -> Option<Credentials> {
        let api_key = std::env::var(key_var).ok()?;
        let instance_id = std::env::var(instance_var).ok()?;
        Some(Credentials::new(api_key, instance_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_debug_redacted() {
        let creds = Credentials::new("sk_live_super_secret", "in_000000000000");
        let debug_str = format!("{:?}", creds);
        assert!(debug_str.contains("in_000000000000"));
        assert!(!debug_str.contains("sk_live_super_secret"));
        assert!(debug_str.contains("[REDACTED]"));
    }

    #[test]
    fn test_expose_api_key() {
        let creds = Credentials::new("key", "instance");
        assert_eq!(creds.expose_api_key(), "key");
        assert_eq!(creds.instance_id, "instance");
    }

    #[test]
    fn test_missing_env_vars() {
        let creds = EnvCredentials::try_from_env_vars(
            "BLINDPAY_TEST_UNSET_KEY_VAR",
            "BLINDPAY_TEST_UNSET_INSTANCE_VAR",
        );
        assert!(creds.is_none());
    }
}
