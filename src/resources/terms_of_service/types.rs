use serde::{Deserialize, Serialize};

/// Request to open a terms of service session.
#[derive(Debug, Clone, Serialize)]
pub struct InitiateTosRequest {
    /// UUID identifying this attempt
    pub idempotency_key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receiver_id: Option<String>,
    /// Where the browser goes after acceptance
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_url: Option<String>,
}

impl InitiateTosRequest {
    pub fn new(idempotency_key: impl Into<String>) -> Self {
        Self {
            idempotency_key: idempotency_key.into(),
            receiver_id: None,
            redirect_url: None,
        }
    }

    pub fn receiver_id(mut self, receiver_id: impl Into<String>) -> Self {
        self.receiver_id = Some(receiver_id.into());
        self
    }

    pub fn redirect_url(mut self, url: impl Into<String>) -> Self {
        self.redirect_url = Some(url.into());
        self
    }
}

/// Hosted page where the terms are reviewed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TosSession {
    pub url: String,
}

/// Request to accept the terms of a session.
#[derive(Debug, Clone, Serialize)]
pub struct AcceptTosRequest {
    pub idempotency_key: String,
    pub session: String,
    /// Session JWT
    pub session_token: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receiver_id: Option<String>,
}

/// Record of an accepted terms of service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TosAcceptance {
    /// Id to pass as `tos_id` when creating receivers
    pub tos_id: String,
    pub idempotency_key: String,
    #[serde(default)]
    pub receiver_id: Option<String>,
    /// Accepted terms version
    pub version: String,
}
