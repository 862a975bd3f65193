//! The HTTP transport every BlindPay call goes through.

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue, USER_AGENT};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_tracing::TracingMiddleware;
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::auth::Credentials;
use crate::config::Configuration;
use crate::error::BlindPayError;
use crate::rest::decode::decode_response;
use crate::rest::endpoints::{API_KEY_HEADER, INSTANCE_ID_HEADER};
use crate::rest::envelope::ApiResponse;

/// HTTP verbs used by the BlindPay API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// GET
    Get,
    /// POST
    Post,
    /// PUT
    Put,
    /// PATCH
    Patch,
    /// DELETE
    Delete,
}

impl HttpMethod {
    /// The method name as sent on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Patch => reqwest::Method::PATCH,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Low-level BlindPay API client.
///
/// Owns the HTTP stack and the fixed request headers (`Content-Type`,
/// `User-Agent`, `X-API-Key`, `X-Instance-Id`). Headers are installed once at
/// construction so every request from the same client carries identical
/// credentials. The client holds no mutable state and can be shared freely.
///
/// Most callers want [`BlindPay`](crate::BlindPay) instead; use this type
/// directly to reach endpoints the resource façades do not cover.
///
/// # Example
///
/// ```rust,no_run
/// use blindpay_client::auth::Credentials;
/// use blindpay_client::config::Configuration;
/// use blindpay_client::rest::{ApiClient, HttpMethod};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let credentials = Credentials::new("api_key", "in_000000000000");
///     let client = ApiClient::new(&credentials, &Configuration::default())?;
///
///     let response = client
///         .request::<serde_json::Value, (), ()>("/v1/available/rails", HttpMethod::Get, None, None)
///         .await?;
///     println!("{:?}", response.data);
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct ApiClient {
    http_client: ClientWithMiddleware,
    base_url: String,
}

impl ApiClient {
    /// Build a client from credentials and configuration.
    ///
    /// Fails with [`BlindPayError::Encoding`] if a credential or the user
    /// agent is not a valid header value, and with [`BlindPayError::Network`]
    /// if the HTTP stack cannot be initialised.
    pub fn new(credentials: &Credentials, configuration: &Configuration) -> Result<Self, BlindPayError> {
        let headers = default_headers(credentials, configuration)?;

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(timeout) = configuration.timeout() {
            builder = builder.timeout(timeout);
        }
        let reqwest_client = builder.build()?;

        let http_client = ClientBuilder::new(reqwest_client)
            .with(TracingMiddleware::default())
            .build();

        Ok(Self {
            http_client,
            base_url: configuration.base_url().to_string(),
        })
    }

    /// The base URL requests are issued against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue a request and decode the response envelope.
    ///
    /// `path` is appended to the base URL verbatim. `query` is form-encoded and
    /// appended only when it encodes to a non-empty string, so a params struct
    /// whose fields are all `None` produces no `?`. `body` is sent as JSON.
    ///
    /// Business errors come back as `Ok` with [`ApiResponse::error`] set; only
    /// failures that leave no usable response are returned as `Err`.
    pub async fn request<T, B, Q>(
        &self,
        path: &str,
        method: HttpMethod,
        body: Option<&B>,
        query: Option<&Q>,
    ) -> Result<ApiResponse<T>, BlindPayError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
        Q: Serialize + ?Sized,
    {
        let query_string = match query {
            Some(params) => serde_urlencoded::to_string(params).map_err(BlindPayError::encoding)?,
            None => String::new(),
        };
        let url = compose_url(&self.base_url, path, &query_string)?;

        let payload = body
            .map(serde_json::to_vec)
            .transpose()
            .map_err(BlindPayError::encoding)?;

        tracing::debug!(%method, path, "sending request");

        let mut request = self.http_client.request(method.into(), url);
        if let Some(payload) = payload {
            request = request.body(payload);
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        let bytes = response.bytes().await?;

        tracing::debug!(%method, path, status, "received response");

        decode_response(status, &bytes)
    }

    /// Make a GET request.
    pub async fn get<T>(&self, path: &str) -> Result<ApiResponse<T>, BlindPayError>
    where
        T: DeserializeOwned,
    {
        self.request::<T, (), ()>(path, HttpMethod::Get, None, None).await
    }

    /// Make a GET request with query parameters.
    pub async fn get_with_params<T, Q>(&self, path: &str, params: &Q) -> Result<ApiResponse<T>, BlindPayError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        self.request::<T, (), Q>(path, HttpMethod::Get, None, Some(params))
            .await
    }

    /// Make a POST request with a JSON body.
    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<ApiResponse<T>, BlindPayError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request::<T, B, ()>(path, HttpMethod::Post, Some(body), None)
            .await
    }

    /// Make a PUT request with a JSON body.
    pub async fn put<T, B>(&self, path: &str, body: &B) -> Result<ApiResponse<T>, BlindPayError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request::<T, B, ()>(path, HttpMethod::Put, Some(body), None)
            .await
    }

    /// Make a PATCH request with a JSON body.
    pub async fn patch<T, B>(&self, path: &str, body: &B) -> Result<ApiResponse<T>, BlindPayError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request::<T, B, ()>(path, HttpMethod::Patch, Some(body), None)
            .await
    }

    /// Make a DELETE request.
    pub async fn delete<T>(&self, path: &str) -> Result<ApiResponse<T>, BlindPayError>
    where
        T: DeserializeOwned,
    {
        self.request::<T, (), ()>(path, HttpMethod::Delete, None, None)
            .await
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

/// Concatenate base URL, path and an already-encoded query string, then parse.
pub(crate) fn compose_url(base_url: &str, path: &str, query: &str) -> Result<Url, BlindPayError> {
    let raw = if query.is_empty() {
        format!("{}{}", base_url, path)
    } else {
        format!("{}{}?{}", base_url, path, query)
    };
    Url::parse(&raw).map_err(BlindPayError::InvalidUrl)
}

fn default_headers(
    credentials: &Credentials,
    configuration: &Configuration,
) -> Result<HeaderMap, BlindPayError> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    let user_agent = configuration
        .user_agent()
        .map(str::to_string)
        .unwrap_or_else(|| format!("blindpay-rust/{}", env!("CARGO_PKG_VERSION")));
    headers.insert(USER_AGENT, HeaderValue::from_str(&user_agent).map_err(BlindPayError::encoding)?);

    let mut api_key = HeaderValue::from_str(credentials.expose_api_key()).map_err(BlindPayError::encoding)?;
    api_key.set_sensitive(true);
    headers.insert(HeaderName::from_static(API_KEY_HEADER), api_key);

    let instance_id = HeaderValue::from_str(&credentials.instance_id).map_err(BlindPayError::encoding)?;
    headers.insert(HeaderName::from_static(INSTANCE_ID_HEADER), instance_id);

    Ok(headers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize, Default)]
    struct ListParams {
        #[serde(skip_serializing_if = "Option::is_none")]
        limit: Option<u32>,
        #[serde(skip_serializing_if = "Option::is_none")]
        full_name: Option<String>,
    }

    #[test]
    fn test_compose_url_with_query() {
        let query = serde_urlencoded::to_string(ListParams {
            limit: Some(50),
            full_name: None,
        })
        .unwrap();
        let url = compose_url("https://api.blindpay.com", "/v1/instances/abc/receivers", &query).unwrap();
        assert_eq!(url.as_str(), "https://api.blindpay.com/v1/instances/abc/receivers?limit=50");
    }

    #[test]
    fn test_compose_url_without_query() {
        let query = serde_urlencoded::to_string(ListParams::default()).unwrap();
        assert!(query.is_empty());
        let url = compose_url("https://api.blindpay.com", "/v1/instances/abc/receivers", &query).unwrap();
        assert_eq!(url.as_str(), "https://api.blindpay.com/v1/instances/abc/receivers");
        assert!(url.query().is_none());
    }

    #[test]
    fn test_compose_url_percent_encodes_query() {
        let query = serde_urlencoded::to_string(ListParams {
            limit: None,
            full_name: Some("Ana & João".to_string()),
        })
        .unwrap();
        let url = compose_url("https://api.blindpay.com", "/v1/instances/abc/receivers", &query).unwrap();
        assert_eq!(url.query(), Some("full_name=Ana+%26+Jo%C3%A3o"));
    }

    #[test]
    fn test_compose_url_invalid() {
        let result = compose_url("not a base url", "/v1/available/rails", "");
        assert!(matches!(result, Err(BlindPayError::InvalidUrl(_))));
    }

    #[test]
    fn test_http_method_conversion() {
        assert_eq!(reqwest::Method::from(HttpMethod::Get), reqwest::Method::GET);
        assert_eq!(reqwest::Method::from(HttpMethod::Patch), reqwest::Method::PATCH);
        assert_eq!(HttpMethod::Delete.to_string(), "DELETE");
    }

    #[test]
    fn test_default_headers() {
        let credentials = Credentials::new("sk_test", "in_123");
        let headers = default_headers(&credentials, &Configuration::default()).unwrap();
        assert_eq!(headers[CONTENT_TYPE], "application/json");
        assert_eq!(headers["X-API-Key"], "sk_test");
        assert!(headers["X-API-Key"].is_sensitive());
        assert_eq!(headers["X-Instance-Id"], "in_123");
        assert!(
            headers[USER_AGENT]
                .to_str()
                .unwrap()
                .starts_with("blindpay-rust/")
        );
    }

    #[test]
    fn test_invalid_header_value_is_encoding_error() {
        let credentials = Credentials::new("bad\nkey", "in_123");
        let result = ApiClient::new(&credentials, &Configuration::default());
        assert!(matches!(result, Err(BlindPayError::Encoding(_))));
    }

    #[test]
    fn test_debug_hides_credentials() {
        let credentials = Credentials::new("sk_test_secret", "in_123");
        let client = ApiClient::new(&credentials, &Configuration::default()).unwrap();
        let debug_str = format!("{:?}", client);
        assert!(!debug_str.contains("sk_test_secret"));
        assert!(debug_str.contains("api.blindpay.com"));
    }
}
