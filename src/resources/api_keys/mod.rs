//! API keys of the instance.

mod types;

pub use types::*;

use crate::Result;
use crate::rest::endpoints::instance_path;
use crate::rest::{ApiClient, ApiResponse};
use crate::types::VoidResponse;

/// Endpoints under `/v1/instances/{instance_id}/api-keys`.
#[derive(Debug, Clone, Copy)]
pub struct ApiKeys<'a> {
    api: &'a ApiClient,
    instance_id: &'a str,
}

impl<'a> ApiKeys<'a> {
    pub(crate) fn new(api: &'a ApiClient, instance_id: &'a str) -> Self {
        Self { api, instance_id }
    }

    fn path(&self, suffix: &str) -> String {
        instance_path(self.instance_id, &format!("/api-keys{}", suffix))
    }

    pub async fn list(&self) -> Result<ApiResponse<Vec<ApiKey>>> {
        self.api.get(&self.path("")).await
    }

    /// Create a key. Store the returned token; it cannot be fetched again.
    pub async fn create(&self, request: &CreateApiKeyRequest) -> Result<ApiResponse<CreatedApiKey>> {
        self.api.post(&self.path(""), request).await
    }

    pub async fn get(&self, key_id: &str) -> Result<ApiResponse<ApiKey>> {
        self.api.get(&self.path(&format!("/{}", key_id))).await
    }

    /// Revoke a key.
    pub async fn delete(&self, key_id: &str) -> Result<ApiResponse<VoidResponse>> {
        self.api.delete(&self.path(&format!("/{}", key_id))).await
    }
}
