use serde::{Deserialize, Serialize};

/// Scope granted to an API key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum ApiKeyPermission {
    FullAccess,
}

/// An API key of the instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiKey {
    /// Key identifier
    pub id: String,
    /// Display name
    pub name: String,
    pub permission: ApiKeyPermission,
    /// Masked key value
    pub token: String,
    /// Addresses allowed to use the key
    #[serde(default)]
    pub ip_whitelist: Option<Vec<String>>,
    pub unkey_id: String,
    #[serde(default)]
    pub last_used_at: Option<String>,
    pub instance_id: String,
    /// Creation time (ISO 8601)
    pub created_at: String,
    /// Last update time (ISO 8601)
    pub updated_at: String,
}

/// Request to create an API key.
#[derive(Debug, Clone, Serialize)]
pub struct CreateApiKeyRequest {
    pub name: String,
    pub permission: ApiKeyPermission,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_whitelist: Option<Vec<String>>,
}

impl CreateApiKeyRequest {
    /// A full access key with no IP restriction.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            permission: ApiKeyPermission::FullAccess,
            ip_whitelist: None,
        }
    }

    /// Restrict the key to the given addresses.
    pub fn ip_whitelist(mut self, ips: Vec<String>) -> Self {
        self.ip_whitelist = Some(ips);
        self
    }
}

/// A newly created key. The token is only returned once.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct CreatedApiKey {
    pub id: String,
    pub token: String,
}

impl std::fmt::Debug for CreatedApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CreatedApiKey")
            .field("id", &self.id)
            .field("token", &"[REDACTED]")
            .finish()
    }
}
