//! Instance administration: members, settings and test-token helpers.

mod types;

pub use types::*;

use crate::Result;
use crate::rest::endpoints::instance_path;
use crate::rest::{ApiClient, ApiResponse};
use crate::types::{SuccessResponse, VoidResponse};

/// Endpoints under `/v1/instances/{instance_id}` that manage the instance itself.
#[derive(Debug, Clone, Copy)]
pub struct Instances<'a> {
    api: &'a ApiClient,
    instance_id: &'a str,
}

impl<'a> Instances<'a> {
    pub(crate) fn new(api: &'a ApiClient, instance_id: &'a str) -> Self {
        Self { api, instance_id }
    }

    fn path(&self, suffix: &str) -> String {
        instance_path(self.instance_id, suffix)
    }

    /// List the members of the instance.
    pub async fn members(&self) -> Result<ApiResponse<Vec<InstanceMember>>> {
        self.api.get(&self.path("/members")).await
    }

    /// Update the instance name and receiver invite redirect.
    pub async fn update(&self, request: &UpdateInstanceRequest) -> Result<ApiResponse<VoidResponse>> {
        self.api.put(&self.path(""), request).await
    }

    /// Permanently delete the instance.
    pub async fn delete(&self) -> Result<ApiResponse<VoidResponse>> {
        self.api.delete(&self.path("")).await
    }

    /// Remove a member from the instance.
    pub async fn delete_member(&self, member_id: &str) -> Result<ApiResponse<VoidResponse>> {
        self.api
            .delete(&self.path(&format!("/members/{}", member_id)))
            .await
    }

    /// Change a member's role.
    pub async fn update_member_role(
        &self,
        member_id: &str,
        role: InstanceMemberRole,
    ) -> Result<ApiResponse<VoidResponse>> {
        self.api
            .put(
                &self.path(&format!("/members/{}", member_id)),
                &UpdateMemberRoleRequest { role },
            )
            .await
    }

    /// Build a Stellar trustline transaction for `address`.
    pub async fn create_asset_trustline(
        &self,
        request: &CreateAssetTrustlineRequest,
    ) -> Result<ApiResponse<AssetTrustline>> {
        self.api
            .post(&self.path("/create-asset-trustline"), request)
            .await
    }

    /// Mint test USDB on Stellar.
    pub async fn mint_usdb_stellar(
        &self,
        request: &MintUsdbStellarRequest,
    ) -> Result<ApiResponse<SuccessResponse>> {
        self.api.post(&self.path("/mint-usdb-stellar"), request).await
    }

    /// Mint test USDB on Solana.
    pub async fn mint_usdb_solana(
        &self,
        request: &MintUsdbSolanaRequest,
    ) -> Result<ApiResponse<MintUsdbSolanaResponse>> {
        self.api.post(&self.path("/mint-usdb-solana"), request).await
    }

    /// Prepare a Solana token delegation transaction.
    pub async fn prepare_delegate_solana(
        &self,
        request: &PrepareDelegateSolanaRequest,
    ) -> Result<ApiResponse<PrepareDelegateSolanaResponse>> {
        self.api
            .post(&self.path("/prepare-delegate-solana"), request)
            .await
    }
}
