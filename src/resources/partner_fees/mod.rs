//! Partner fees.

mod types;

pub use types::*;

use crate::Result;
use crate::rest::endpoints::instance_path;
use crate::rest::{ApiClient, ApiResponse};
use crate::types::VoidResponse;

/// Endpoints under `/v1/instances/{instance_id}/partner-fees`.
#[derive(Debug, Clone, Copy)]
pub struct PartnerFees<'a> {
    api: &'a ApiClient,
    instance_id: &'a str,
}

impl<'a> PartnerFees<'a> {
    pub(crate) fn new(api: &'a ApiClient, instance_id: &'a str) -> Self {
        Self { api, instance_id }
    }

    fn path(&self, suffix: &str) -> String {
        instance_path(self.instance_id, &format!("/partner-fees{}", suffix))
    }

    pub async fn list(&self) -> Result<ApiResponse<Vec<PartnerFee>>> {
        self.api.get(&self.path("")).await
    }

    pub async fn create(&self, request: &CreatePartnerFeeRequest) -> Result<ApiResponse<PartnerFee>> {
        self.api.post(&self.path(""), request).await
    }

    pub async fn get(&self, fee_id: &str) -> Result<ApiResponse<PartnerFee>> {
        self.api.get(&self.path(&format!("/{}", fee_id))).await
    }

    pub async fn delete(&self, fee_id: &str) -> Result<ApiResponse<VoidResponse>> {
        self.api.delete(&self.path(&format!("/{}", fee_id))).await
    }
}
