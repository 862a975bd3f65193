//! Terms of service acceptance.

mod types;

pub use types::*;

use crate::Result;
use crate::rest::endpoints::external;
use crate::rest::{ApiClient, ApiResponse};

/// The externally reachable terms of service endpoints.
#[derive(Debug, Clone, Copy)]
pub struct TermsOfService<'a> {
    api: &'a ApiClient,
    instance_id: &'a str,
}

impl<'a> TermsOfService<'a> {
    pub(crate) fn new(api: &'a ApiClient, instance_id: &'a str) -> Self {
        Self { api, instance_id }
    }

    /// Open a session and get the URL where the terms are shown.
    pub async fn initiate(&self, request: &InitiateTosRequest) -> Result<ApiResponse<TosSession>> {
        let path = format!("{}/{}/tos", external::INSTANCES, self.instance_id);
        self.api.post(&path, request).await
    }

    /// Accept the terms of a session.
    ///
    /// BlindPay normally calls this from the hosted page; the resulting
    /// `tos_id` is what receiver creation expects.
    pub async fn accept(&self, request: &AcceptTosRequest) -> Result<ApiResponse<TosAcceptance>> {
        self.api.put(external::TOS, request).await
    }
}
