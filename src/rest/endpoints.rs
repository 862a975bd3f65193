//! BlindPay REST API endpoint constants.

/// Base URL for the BlindPay REST API.
pub const BLINDPAY_BASE_URL: &str = "https://api.blindpay.com";

/// Header carrying the API key (`X-API-Key`).
pub const API_KEY_HEADER: &str = "x-api-key";
/// Header carrying the instance id (`X-Instance-Id`).
pub const INSTANCE_ID_HEADER: &str = "x-instance-id";

/// Endpoints that are not scoped to an instance.
pub mod available {
    /// List payment rails.
    pub const RAILS: &str = "/v1/available/rails";
    /// Bank detail fields required by a rail.
    pub const BANK_DETAILS: &str = "/v1/available/bank-details";
    /// Look up a SWIFT/BIC code (append the code).
    pub const SWIFT: &str = "/v1/available/swift";
}

/// Externally shareable tracking and terms-of-service endpoints.
pub mod external {
    /// Payin tracking (append the payin id).
    pub const PAYINS: &str = "/v1/e/payins";
    /// Payout tracking (append the payout id).
    pub const PAYOUTS: &str = "/v1/e/payouts";
    /// Instance scoped endpoints (append the instance id).
    pub const INSTANCES: &str = "/v1/e/instances";
    /// Accept terms of service.
    pub const TOS: &str = "/v1/e/tos";
}

/// Prefix for every instance scoped endpoint.
pub const INSTANCES: &str = "/v1/instances";

/// Build `/v1/instances/{instance_id}{suffix}`.
pub(crate) fn instance_path(instance_id: &str, suffix: &str) -> String {
    format!("{INSTANCES}/{instance_id}{suffix}")
}

/// Build `/v1/instances/{instance_id}/receivers/{receiver_id}{suffix}`.
pub(crate) fn receiver_path(instance_id: &str, receiver_id: &str, suffix: &str) -> String {
    format!("{INSTANCES}/{instance_id}/receivers/{receiver_id}{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instance_path() {
        assert_eq!(instance_path("in_123", ""), "/v1/instances/in_123");
        assert_eq!(
            instance_path("in_123", "/receivers/re_1"),
            "/v1/instances/in_123/receivers/re_1"
        );
    }

    #[test]
    fn test_receiver_path() {
        assert_eq!(
            receiver_path("in_123", "re_1", "/bank-accounts/ba_1"),
            "/v1/instances/in_123/receivers/re_1/bank-accounts/ba_1"
        );
    }
}
