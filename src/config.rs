//! Client configuration.

use std::time::Duration;

use crate::rest::endpoints::BLINDPAY_BASE_URL;

/// Connection settings for a [`BlindPay`](crate::BlindPay) client.
///
/// The base URL is taken as given. It is not validated here; a malformed
/// value surfaces as [`BlindPayError::InvalidUrl`](crate::BlindPayError::InvalidUrl)
/// on the first request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    base_url: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl Configuration {
    /// Create a configuration pointing at a custom base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: None,
            user_agent: None,
        }
    }

    /// Set a total timeout applied to every request.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the `User-Agent` header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// The API base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The per-request timeout, if any.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// The custom user agent, if any.
    pub fn user_agent(&self) -> Option<&str> {
        self.user_agent.as_deref()
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::new(BLINDPAY_BASE_URL)
    }
}
