use serde::Deserialize;
use tracing_subscriber::EnvFilter;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use blindpay_client::resources::available::RailInfo;
use blindpay_client::rest::HttpMethod;
use blindpay_client::types::VoidResponse;
use blindpay_client::{ApiError, ApiResponse, BlindPay, BlindPayError};

const API_KEY: &str = "test_api_key";
const INSTANCE_ID: &str = "in_test";

/// Route request logs to the test output; `RUST_LOG=blindpay_client=debug` shows them.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn build_client(server: &MockServer) -> BlindPay {
    init_tracing();
    BlindPay::builder(API_KEY, INSTANCE_ID)
        .base_url(server.uri())
        .build()
        .unwrap()
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
struct Created {
    id: String,
}

#[tokio::test]
async fn test_enveloped_success() {
    let server = MockServer::start().await;
    let response = serde_json::json!({
        "data": [{"label": "Domestic Wire", "value": "wire", "country": "US"}],
        "error": null
    });

    Mock::given(method("GET"))
        .and(path("/v1/available/rails"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let response: ApiResponse<Vec<RailInfo>> = client
        .api()
        .request::<_, (), ()>("/v1/available/rails", HttpMethod::Get, None, None)
        .await
        .unwrap();

    assert!(response.error.is_none());
    let rails = response.data.unwrap();
    assert_eq!(rails.len(), 1);
    assert_eq!(rails[0].label, "Domestic Wire");
    assert_eq!(rails[0].value, "wire");
    assert_eq!(rails[0].country, "US");
}

#[tokio::test]
async fn test_flat_message_on_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/available/rails"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(serde_json::json!({"message": "instance not found"})),
        )
        .mount(&server)
        .await;

    let client = build_client(&server);
    let response = client.available().rails().await.unwrap();

    assert_eq!(response, ApiResponse::failure(ApiError::new("instance not found")));
}

#[tokio::test]
async fn test_empty_server_error_is_http_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/available/rails"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let err = client.available().rails().await.unwrap_err();

    assert!(matches!(err, BlindPayError::Http { status_code: 500 }));
    assert_eq!(err.to_string(), "HTTP error with status code: 500");
}

#[tokio::test]
async fn test_plain_text_error_keeps_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/available/rails"))
        .respond_with(ResponseTemplate::new(502).set_body_string("plain text"))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let err = client.available().rails().await.unwrap_err();

    assert_eq!(err.status_code(), Some(502));
}

#[tokio::test]
async fn test_error_envelope_on_bad_request() {
    let server = MockServer::start().await;
    let response = serde_json::json!({
        "data": null,
        "error": {"message": "invalid bank account"},
        "request_id": "req_1"
    });

    Mock::given(method("POST"))
        .and(path("/v1/instances/in_test/quotes"))
        .respond_with(ResponseTemplate::new(400).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let response: ApiResponse<Created> = client
        .api()
        .post("/v1/instances/in_test/quotes", &serde_json::json!({}))
        .await
        .unwrap();

    assert_eq!(response.into_result(), Err(ApiError::new("invalid bank account")));
}

#[tokio::test]
async fn test_query_is_composed() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/instances/abc/receivers"))
        .and(query_param("limit", "50"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"data": [], "error": null})))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let query = [("limit", "50")];
    let response: ApiResponse<Vec<Created>> = client
        .api()
        .get_with_params("/v1/instances/abc/receivers", &query)
        .await
        .unwrap();
    assert_eq!(response.data, Some(vec![]));

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(
        requests[0].url.as_str(),
        format!("{}/v1/instances/abc/receivers?limit=50", server.uri())
    );
}

#[tokio::test]
async fn test_bare_payload_is_wrapped() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/instances/in_test/receivers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"id": "re_123"})))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let response: ApiResponse<Created> = client
        .api()
        .post("/v1/instances/in_test/receivers", &serde_json::json!({"email": "a@b.c"}))
        .await
        .unwrap();

    assert_eq!(
        response,
        ApiResponse::success(Created {
            id: "re_123".to_string()
        })
    );
}

#[tokio::test]
async fn test_envelope_with_extra_keys() {
    let server = MockServer::start().await;
    let response = serde_json::json!({
        "data": {"id": "re_1"},
        "error": null,
        "request_id": "req_9"
    });

    Mock::given(method("GET"))
        .and(path("/v1/instances/in_test/receivers/re_1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let typed: ApiResponse<Created> = client
        .api()
        .get("/v1/instances/in_test/receivers/re_1")
        .await
        .unwrap();
    assert_eq!(
        typed,
        ApiResponse::success(Created {
            id: "re_1".to_string()
        })
    );

    let untyped: ApiResponse<serde_json::Value> = client
        .api()
        .get("/v1/instances/in_test/receivers/re_1")
        .await
        .unwrap();
    assert_eq!(untyped.data, Some(serde_json::json!({"id": "re_1"})));
}

#[tokio::test]
async fn test_error_status_with_empty_envelope() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/available/rails"))
        .respond_with(ResponseTemplate::new(500).set_body_json(serde_json::json!({"data": null, "error": null})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/available/swift/BOFAUS3N"))
        .respond_with(ResponseTemplate::new(500).set_body_json(serde_json::json!({})))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let rails = client.available().rails().await.unwrap();
    assert_eq!(rails, ApiResponse::empty());

    let swift = client.available().swift_code("BOFAUS3N").await.unwrap();
    assert!(swift.data.is_none());
    assert!(swift.error.is_none());
}

#[tokio::test]
async fn test_business_error_on_success_status() {
    let server = MockServer::start().await;
    let response = serde_json::json!({"data": null, "error": {"message": "X"}});

    Mock::given(method("GET"))
        .and(path("/v1/available/rails"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let response = client.available().rails().await.unwrap();

    assert!(!response.is_success());
    assert!(response.data.is_none());
    assert_eq!(response.error, Some(ApiError::new("X")));
}

#[tokio::test]
async fn test_undecodable_success_is_decoding_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/available/rails"))
        .respond_with(ResponseTemplate::new(200).set_body_string("plain text"))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let err = client.available().rails().await.unwrap_err();

    assert!(matches!(err, BlindPayError::Decoding(_)));
}

#[tokio::test]
async fn test_no_content_is_void_success() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/v1/instances/in_test/partner-fees/fe_1"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let response = client.partner_fees().delete("fe_1").await.unwrap();

    assert_eq!(response, ApiResponse::<VoidResponse>::empty());
    assert_eq!(response.into_result(), Ok(None));
}

#[tokio::test]
async fn test_unset_query_params_are_omitted() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/instances/in_test/receivers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": [],
            "pagination": {"has_more": false, "next_page": null, "prev_page": null}
        })))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let params = blindpay_client::resources::receivers::ListReceiversParams::default();
    let response = client.receivers().list(&params).await.unwrap();
    assert!(response.is_success());

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].url.query().is_none());
    assert!(!requests[0].url.as_str().ends_with('?'));
}

#[tokio::test]
async fn test_headers_are_identical_on_every_call() {
    let server = MockServer::start().await;

    Mock::given(header("x-api-key", API_KEY))
        .and(header("x-instance-id", INSTANCE_ID))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"success": true})))
        .expect(5)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let api = client.api();
    let body = serde_json::json!({"name": "test"});

    api.get::<serde_json::Value>("/v1/available/rails").await.unwrap();
    api.post::<serde_json::Value, _>("/v1/instances/in_test/api-keys", &body)
        .await
        .unwrap();
    api.put::<serde_json::Value, _>("/v1/instances/in_test", &body)
        .await
        .unwrap();
    api.patch::<serde_json::Value, _>("/v1/instances/in_test/receivers/re_1", &body)
        .await
        .unwrap();
    api.delete::<serde_json::Value>("/v1/instances/in_test/api-keys/ap_1")
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    let first = &requests[0];
    for request in &requests[1..] {
        assert_eq!(request.headers.get("x-api-key"), first.headers.get("x-api-key"));
        assert_eq!(request.headers.get("x-instance-id"), first.headers.get("x-instance-id"));
    }
}

#[tokio::test]
async fn test_patch_sends_json_body() {
    let server = MockServer::start().await;
    let body = serde_json::json!({"email": "new@example.com"});

    Mock::given(method("PATCH"))
        .and(path("/v1/instances/in_test/receivers/re_1"))
        .and(body_json(&body))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"success": true})))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let response: ApiResponse<serde_json::Value> = client
        .api()
        .request::<_, _, ()>(
            "/v1/instances/in_test/receivers/re_1",
            HttpMethod::Patch,
            Some(&body),
            None,
        )
        .await
        .unwrap();

    assert_eq!(response.data, Some(serde_json::json!({"success": true})));
}

#[tokio::test]
async fn test_custom_user_agent() {
    let server = MockServer::start().await;

    Mock::given(header("user-agent", "my-app/2.0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"data": [], "error": null})))
        .expect(1)
        .mount(&server)
        .await;

    init_tracing();
    let client = BlindPay::builder(API_KEY, INSTANCE_ID)
        .user_agent("my-app/2.0")
        .base_url(server.uri())
        .build()
        .unwrap();

    let response = client.available().rails().await.unwrap();
    assert_eq!(response.data, Some(vec![]));
}

#[tokio::test]
async fn test_connection_refused_is_network_error() {
    init_tracing();
    let client = BlindPay::builder(API_KEY, INSTANCE_ID)
        .base_url("http://127.0.0.1:1")
        .build()
        .unwrap();

    let err = client.available().rails().await.unwrap_err();

    assert!(err.is_network());
    assert!(err.to_string().starts_with("Network error: "));
}

#[tokio::test]
async fn test_malformed_base_url_is_invalid_url() {
    init_tracing();
    let client = BlindPay::builder(API_KEY, INSTANCE_ID)
        .base_url("not a url")
        .build()
        .unwrap();

    let err = client.available().rails().await.unwrap_err();

    assert!(matches!(err, BlindPayError::InvalidUrl(_)));
    assert_eq!(err.to_string(), "Invalid URL");
}
