use serde::{Deserialize, Serialize};

/// Event a webhook endpoint can subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WebhookEvent {
    #[serde(rename = "receiver.new")]
    ReceiverNew,
    #[serde(rename = "receiver.update")]
    ReceiverUpdate,
    #[serde(rename = "bankAccount.new")]
    BankAccountNew,
    #[serde(rename = "payout.new")]
    PayoutNew,
    #[serde(rename = "payout.update")]
    PayoutUpdate,
}

/// A registered webhook endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookEndpoint {
    pub id: String,
    /// Delivery URL
    pub url: String,
    /// Subscribed events
    pub events: Vec<WebhookEvent>,
    #[serde(default)]
    pub last_event_at: Option<String>,
    pub instance_id: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Request to register a webhook endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct CreateWebhookEndpointRequest {
    pub url: String,
    pub events: Vec<WebhookEvent>,
}

/// Signing secret of a webhook endpoint.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct WebhookSecret {
    pub key: String,
}

impl std::fmt::Debug for WebhookSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebhookSecret").field("key", &"[REDACTED]").finish()
    }
}

/// Link to the hosted webhook management portal.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PortalAccess {
    pub url: String,
}
