//! Webhook endpoints.

mod types;

pub use types::*;

use crate::Result;
use crate::rest::endpoints::instance_path;
use crate::rest::{ApiClient, ApiResponse};
use crate::types::{IdResponse, SuccessResponse};

/// Endpoints under `/v1/instances/{instance_id}/webhook-endpoints`.
#[derive(Debug, Clone, Copy)]
pub struct WebhookEndpoints<'a> {
    api: &'a ApiClient,
    instance_id: &'a str,
}

impl<'a> WebhookEndpoints<'a> {
    pub(crate) fn new(api: &'a ApiClient, instance_id: &'a str) -> Self {
        Self { api, instance_id }
    }

    fn path(&self, suffix: &str) -> String {
        instance_path(self.instance_id, &format!("/webhook-endpoints{}", suffix))
    }

    pub async fn list(&self) -> Result<ApiResponse<Vec<WebhookEndpoint>>> {
        self.api.get(&self.path("")).await
    }

    /// Register an endpoint for the given events.
    pub async fn create(&self, request: &CreateWebhookEndpointRequest) -> Result<ApiResponse<IdResponse>> {
        self.api.post(&self.path(""), request).await
    }

    pub async fn delete(&self, endpoint_id: &str) -> Result<ApiResponse<SuccessResponse>> {
        self.api.delete(&self.path(&format!("/{}", endpoint_id))).await
    }

    /// Secret used to verify deliveries to an endpoint.
    pub async fn secret(&self, endpoint_id: &str) -> Result<ApiResponse<WebhookSecret>> {
        self.api
            .get(&self.path(&format!("/{}/secret", endpoint_id)))
            .await
    }

    /// Temporary link to the webhook portal.
    pub async fn portal_access(&self) -> Result<ApiResponse<PortalAccess>> {
        self.api.get(&self.path("/portal-access")).await
    }
}
