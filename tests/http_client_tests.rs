//! Integration tests for the HTTP client functionality.
//!
//! These tests verify bearer token injection, retry behavior, rate limit
//! parsing and the base URI guard against a mock server.

use std::time::{Duration, Instant};

use app_store_connect::clients::{
    DataType, HttpClient, HttpError, HttpMethod, HttpRequest, InvalidHttpRequestError,
    MAX_RETRY_AFTER, RETRY_WAIT_TIME,
};
use app_store_connect::{AscConfig, BaseUrl, IssuerId, KeyId, PrivateKey, RateLimit, RestClient, RestError};
use serde_json::json;
use wiremock::matchers::{header, header_exists, header_regex, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TEST_KEY: &str = include_str!("fixtures/AuthKey_TESTKEY01.p8");

fn create_test_config(server: &MockServer, tries: u32) -> AscConfig {
    AscConfig::builder()
        .issuer_id(IssuerId::new("69a6de70-03db-47e3-e053-5b8c7c11a4d1").unwrap())
        .key_id(KeyId::new("TESTKEY01").unwrap())
        .private_key(PrivateKey::from_pem(TEST_KEY).unwrap())
        .base_url(BaseUrl::new(server.uri()).unwrap())
        .user_agent_prefix("release-bot/1.0")
        .tries(tries)
        .build()
        .unwrap()
}

// ============================================================================
// Request Shape
// ============================================================================

#[tokio::test]
async fn test_request_carries_bearer_token_and_user_agent() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/apps"))
        .and(header_regex(
            "authorization",
            r"^Bearer [A-Za-z0-9_-]+\.[A-Za-z0-9_-]+\.[A-Za-z0-9_-]+$",
        ))
        .and(header_regex(
            "user-agent",
            r"^release-bot/1\.0 \| App Store Connect Rust Library v",
        ))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .expect(1)
        .mount(&server)
        .await;

    let config = create_test_config(&server, 1);
    let client = HttpClient::new("/v1", &config).unwrap();
    let request = HttpRequest::builder(HttpMethod::Get, "apps").build().unwrap();

    let response = client.request(request).await.unwrap();

    assert_eq!(response.code, 200);
    assert_eq!(response.body, json!({"data": []}));
}

#[tokio::test]
async fn test_json_body_sets_content_type() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/reviewSubmissions"))
        .and(header("content-type", "application/json"))
        .and(header_exists("authorization"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"data": {"id": "s-1"}})))
        .expect(1)
        .mount(&server)
        .await;

    let config = create_test_config(&server, 1);
    let client = HttpClient::new("/v1", &config).unwrap();
    let request = HttpRequest::builder(HttpMethod::Post, "reviewSubmissions")
        .body(json!({"data": {}}))
        .body_type(DataType::Json)
        .build()
        .unwrap();

    let response = client.request(request).await.unwrap();
    assert_eq!(response.code, 201);
}

#[tokio::test]
async fn test_rate_limit_and_request_id_are_parsed() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/apps"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("x-rate-limit", "user-hour-lim:3600;user-hour-rem:12;")
                .insert_header("x-request-id", "7QKVGXDW4MKLR")
                .set_body_json(json!({"data": []})),
        )
        .mount(&server)
        .await;

    let config = create_test_config(&server, 1);
    let client = RestClient::new(&config).unwrap();

    let response = client.get("apps", None).await.unwrap();

    assert_eq!(
        response.rate_limit,
        Some(RateLimit {
            limit: 3600,
            remaining: 12
        })
    );
    assert_eq!(response.request_id(), Some("7QKVGXDW4MKLR"));
}

// ============================================================================
// Retry Behavior
// ============================================================================

#[tokio::test]
async fn test_429_is_retried_after_retry_after() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/apps"))
        .respond_with(
            ResponseTemplate::new(429)
                .insert_header("retry-after", "0")
                .set_body_json(json!({"errors": [{"status": "429", "code": "RATE_LIMIT_EXCEEDED", "title": "Rate limit", "detail": "slow down"}]})),
        )
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/apps"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .expect(1)
        .mount(&server)
        .await;

    let config = create_test_config(&server, 3);
    let client = RestClient::new(&config).unwrap();

    let response = client.get("apps", None).await.unwrap();
    assert_eq!(response.code, 200);
}

#[tokio::test]
async fn test_server_error_is_retried() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/apps"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/apps"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .expect(1)
        .mount(&server)
        .await;

    let config = create_test_config(&server, 2);
    let client = RestClient::new(&config).unwrap();

    let response = client.get("apps", None).await.unwrap();
    assert_eq!(response.code, 200);
}

#[tokio::test]
async fn test_exhausted_retries_return_max_retries_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/apps"))
        .respond_with(
            ResponseTemplate::new(429)
                .insert_header("retry-after", "0")
                .insert_header("x-request-id", "REQ-429"),
        )
        .expect(2)
        .mount(&server)
        .await;

    let config = create_test_config(&server, 2);
    let client = RestClient::new(&config).unwrap();

    let result = client.get("apps", None).await;

    match result {
        Err(RestError::Http(HttpError::MaxRetries(error))) => {
            assert_eq!(error.code, 429);
            assert_eq!(error.tries, 2);
            assert_eq!(error.error_reference.as_deref(), Some("REQ-429"));
        }
        other => panic!("Expected MaxRetries, got {other:?}"),
    }
}

async fn mount_rate_limited_then_ok(server: &MockServer, retry_after: Option<&str>) {
    let mut rate_limited = ResponseTemplate::new(429);
    if let Some(value) = retry_after {
        rate_limited = rate_limited.insert_header("retry-after", value);
    }

    Mock::given(method("GET"))
        .and(path("/v1/apps"))
        .respond_with(rate_limited)
        .up_to_n_times(1)
        .expect(1)
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/apps"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_429_without_retry_after_waits_fixed_delay() {
    let server = MockServer::start().await;
    mount_rate_limited_then_ok(&server, None).await;

    let client = RestClient::new(&create_test_config(&server, 2)).unwrap();
    let started = Instant::now();

    let response = client.get("apps", None).await.unwrap();

    assert_eq!(response.code, 200);
    assert!(started.elapsed() >= Duration::from_secs(RETRY_WAIT_TIME));
}

#[tokio::test]
async fn test_429_honours_fractional_retry_after() {
    let server = MockServer::start().await;
    mount_rate_limited_then_ok(&server, Some("0.1")).await;

    let client = RestClient::new(&create_test_config(&server, 2)).unwrap();
    let started = Instant::now();

    let response = client.get("apps", None).await.unwrap();

    assert_eq!(response.code, 200);
    let elapsed = started.elapsed();
    assert!(elapsed >= Duration::from_millis(100), "{elapsed:?}");
    assert!(elapsed < Duration::from_secs(RETRY_WAIT_TIME), "{elapsed:?}");
}

#[tokio::test]
async fn test_429_with_unparseable_retry_after_waits_fixed_delay() {
    let server = MockServer::start().await;
    mount_rate_limited_then_ok(&server, Some("soon")).await;

    let client = RestClient::new(&create_test_config(&server, 2)).unwrap();
    let started = Instant::now();

    let response = client.get("apps", None).await.unwrap();

    assert_eq!(response.code, 200);
    assert!(started.elapsed() >= Duration::from_secs(RETRY_WAIT_TIME));
}

#[tokio::test]
async fn test_429_with_oversized_retry_after_returns_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/apps"))
        .respond_with(ResponseTemplate::new(429).insert_header("retry-after", "1e30"))
        .expect(2)
        .mount(&server)
        .await;

    let client = RestClient::new(&create_test_config(&server, 2)).unwrap();
    let started = Instant::now();

    let result = client.get("apps", None).await;

    assert!(matches!(
        result,
        Err(RestError::Http(HttpError::MaxRetries(ref error))) if error.code == 429
    ));
    assert!(started.elapsed() < MAX_RETRY_AFTER);
}

#[tokio::test]
async fn test_server_error_with_plain_text_body_keeps_raw_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/apps"))
        .respond_with(
            ResponseTemplate::new(503)
                .insert_header("content-type", "text/html")
                .insert_header("x-request-id", "REQ-503")
                .set_body_string("upstream exploded"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = RestClient::new(&create_test_config(&server, 1)).unwrap();

    match client.get("apps", None).await {
        Err(RestError::Http(HttpError::Response(error))) => {
            assert_eq!(error.code, 503);
            assert!(error.message.contains("upstream exploded"), "{}", error.message);
            assert!(error.errors.is_empty());
            assert_eq!(error.error_reference.as_deref(), Some("REQ-503"));
        }
        other => panic!("Expected Response error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_client_errors_are_not_retried() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/apps"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "errors": [{
                "status": "403",
                "code": "FORBIDDEN_ERROR",
                "title": "This request is forbidden for security reasons",
                "detail": "The API key in use does not allow this request"
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let config = create_test_config(&server, 3);
    let client = RestClient::new(&config).unwrap();

    let result = client.get("apps", None).await;

    match result {
        Err(RestError::Http(HttpError::Response(error))) => {
            assert_eq!(error.code, 403);
            assert_eq!(error.errors[0].code, "FORBIDDEN_ERROR");
        }
        other => panic!("Expected Response error, got {other:?}"),
    }
}

// ============================================================================
// Base URI Guard
// ============================================================================

#[tokio::test]
async fn test_absolute_url_under_base_uri_is_followed() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/reviewSubmissions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .expect(1)
        .mount(&server)
        .await;

    let config = create_test_config(&server, 1);
    let client = RestClient::new(&config).unwrap();

    let url = format!("{}/v1/reviewSubmissions?cursor=AQ", server.uri());
    let response = client.get_url(&url).await.unwrap();
    assert_eq!(response.code, 200);
}

#[tokio::test]
async fn test_foreign_url_is_rejected_before_sending() {
    let server = MockServer::start().await;
    let config = create_test_config(&server, 1);
    let client = RestClient::new(&config).unwrap();

    let result = client
        .get_url("https://attacker.example.com/v1/reviewSubmissions")
        .await;

    assert!(matches!(
        result,
        Err(RestError::Http(HttpError::InvalidRequest(
            InvalidHttpRequestError::ForeignUrl { .. }
        )))
    ));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[test]
fn test_resolve_url_rejects_lookalike_hosts() {
    let config = AscConfig::builder()
        .issuer_id(IssuerId::new("issuer").unwrap())
        .key_id(KeyId::new("TESTKEY01").unwrap())
        .private_key(PrivateKey::from_pem(TEST_KEY).unwrap())
        .build()
        .unwrap();
    let client = HttpClient::new("/v1", &config).unwrap();

    assert_eq!(
        client.resolve_url("apps").unwrap(),
        "https://api.appstoreconnect.apple.com/v1/apps"
    );
    assert!(client
        .resolve_url("https://api.appstoreconnect.apple.com/v1/apps?cursor=x")
        .is_ok());
    assert!(client
        .resolve_url("https://api.appstoreconnect.apple.com.evil.example/v1/apps")
        .is_err());
}
