//! The top-level BlindPay client.

use std::time::Duration;

use crate::Result;
use crate::auth::Credentials;
use crate::config::Configuration;
use crate::resources::api_keys::ApiKeys;
use crate::resources::available::Available;
use crate::resources::instances::Instances;
use crate::resources::partner_fees::PartnerFees;
use crate::resources::payin_quotes::PayinQuotes;
use crate::resources::payins::Payins;
use crate::resources::payouts::Payouts;
use crate::resources::quotes::Quotes;
use crate::resources::receivers::Receivers;
use crate::resources::terms_of_service::TermsOfService;
use crate::resources::webhook_endpoints::WebhookEndpoints;
use crate::rest::ApiClient;

/// Entry point to the BlindPay API.
///
/// Owns a single [`ApiClient`] and hands out resource accessors that borrow
/// it. Cloning is cheap; clones share the underlying connection pool.
///
/// # Example
///
/// ```rust,no_run
/// use std::time::Duration;
/// use blindpay_client::BlindPay;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = BlindPay::builder("api_key", "in_000000000000")
///         .timeout(Duration::from_secs(30))
///         .build()?;
///
///     let members = client.instances().members().await?;
///     println!("{:?}", members.into_result()?);
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct BlindPay {
    api: ApiClient,
    instance_id: String,
}

impl BlindPay {
    /// Create a client for the production API.
    pub fn new(api_key: impl Into<String>, instance_id: impl Into<String>) -> Result<Self> {
        Self::builder(api_key, instance_id).build()
    }

    /// Create a client with an explicit configuration.
    pub fn with_configuration(
        api_key: impl Into<String>,
        instance_id: impl Into<String>,
        configuration: &Configuration,
    ) -> Result<Self> {
        Self::from_credentials(&Credentials::new(api_key, instance_id), configuration)
    }

    /// Create a client from loaded credentials.
    pub fn from_credentials(credentials: &Credentials, configuration: &Configuration) -> Result<Self> {
        let api = ApiClient::new(credentials, configuration)?;
        Ok(Self {
            api,
            instance_id: credentials.instance_id.clone(),
        })
    }

    /// Start building a client.
    pub fn builder(api_key: impl Into<String>, instance_id: impl Into<String>) -> BlindPayBuilder {
        BlindPayBuilder::new(Credentials::new(api_key, instance_id))
    }

    /// The instance every scoped request targets.
    pub fn instance_id(&self) -> &str {
        &self.instance_id
    }

    /// The underlying transport, for endpoints without a typed accessor.
    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    /// Rail discovery.
    pub fn available(&self) -> Available<'_> {
        Available::new(&self.api)
    }

    /// Instance administration.
    pub fn instances(&self) -> Instances<'_> {
        Instances::new(&self.api, &self.instance_id)
    }

    /// Receivers and their nested resources.
    pub fn receivers(&self) -> Receivers<'_> {
        Receivers::new(&self.api, &self.instance_id)
    }

    /// Payout quotes.
    pub fn quotes(&self) -> Quotes<'_> {
        Quotes::new(&self.api, &self.instance_id)
    }

    /// Payin quotes.
    pub fn payin_quotes(&self) -> PayinQuotes<'_> {
        PayinQuotes::new(&self.api, &self.instance_id)
    }

    /// Fiat payins and their tracking.
    pub fn payins(&self) -> Payins<'_> {
        Payins::new(&self.api, &self.instance_id)
    }

    /// Stablecoin payouts and their tracking.
    pub fn payouts(&self) -> Payouts<'_> {
        Payouts::new(&self.api, &self.instance_id)
    }

    /// Partner fees charged on top of BlindPay's.
    pub fn partner_fees(&self) -> PartnerFees<'_> {
        PartnerFees::new(&self.api, &self.instance_id)
    }

    /// API keys of the instance.
    pub fn api_keys(&self) -> ApiKeys<'_> {
        ApiKeys::new(&self.api, &self.instance_id)
    }

    /// Webhook endpoints and their signing secrets.
    pub fn webhook_endpoints(&self) -> WebhookEndpoints<'_> {
        WebhookEndpoints::new(&self.api, &self.instance_id)
    }

    /// Terms of service sessions.
    pub fn terms_of_service(&self) -> TermsOfService<'_> {
        TermsOfService::new(&self.api, &self.instance_id)
    }
}

impl std::fmt::Debug for BlindPay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BlindPay")
            .field("base_url", &self.api.base_url())
            .field("instance_id", &self.instance_id)
            .finish_non_exhaustive()
    }
}

/// Builder for [`BlindPay`].
pub struct BlindPayBuilder {
    credentials: Credentials,
    configuration: Configuration,
}

impl BlindPayBuilder {
    /// Create a builder with the default configuration.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            configuration: Configuration::default(),
        }
    }

    /// Set the base URL (useful for testing with a mock server).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        let mut configuration = Configuration::new(url);
        if let Some(timeout) = self.configuration.timeout() {
            configuration = configuration.with_timeout(timeout);
        }
        if let Some(user_agent) = self.configuration.user_agent() {
            configuration = configuration.with_user_agent(user_agent);
        }
        self.configuration = configuration;
        self
    }

    /// Set a timeout for each request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.configuration = self.configuration.with_timeout(timeout);
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.configuration = self.configuration.with_user_agent(user_agent);
        self
    }

    /// Replace the whole configuration.
    pub fn configuration(mut self, configuration: Configuration) -> Self {
        self.configuration = configuration;
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<BlindPay> {
        BlindPay::from_credentials(&self.credentials, &self.configuration)
    }
}

impl std::fmt::Debug for BlindPayBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BlindPayBuilder")
            .field("credentials", &self.credentials)
            .field("configuration", &self.configuration)
            .finish()
    }
}
