//! HTTP client for App Store Connect API communication.
//!
//! This module provides the [`HttpClient`] type for making authenticated
//! requests to the App Store Connect API with automatic retry handling.

use std::collections::HashMap;
use std::time::Duration;

use crate::auth::TokenSigner;
use crate::clients::errors::{
    ApiErrorDetail, HttpError, HttpResponseError, InvalidHttpRequestError,
    MaxHttpRetriesExceededError,
};
use crate::clients::http_request::{is_absolute_url, HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::AscConfig;

/// Fixed retry wait time in seconds.
pub const RETRY_WAIT_TIME: u64 = 1;

/// Longest wait honoured from a `Retry-After` header.
pub const MAX_RETRY_AFTER: Duration = Duration::from_secs(60);

/// Crate version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the App Store Connect API.
///
/// The client handles:
/// - URL construction from the configured base URL and a versioned base path
/// - Default headers including `User-Agent` and `Accept`
/// - A freshly signed (or cached) bearer token on every request
/// - Automatic retries for 429 and 5xx responses
/// - Rate limit header parsing
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use app_store_connect::clients::{HttpClient, HttpRequest, HttpMethod};
///
/// let client = HttpClient::new("/v1", &config)?;
///
/// let request = HttpRequest::builder(HttpMethod::Get, "reviewSubmissions")
///     .query_param("filter[app]", "6446048795")
///     .build()?;
///
/// let response = client.request(request).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    client: reqwest::Client,
    /// Base URI (e.g., `https://api.appstoreconnect.apple.com`).
    base_uri: String,
    /// Base path (e.g., `/v1`).
    base_path: String,
    default_headers: HashMap<String, String>,
    signer: TokenSigner,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client.
    ///
    /// # Arguments
    ///
    /// * `base_path` - The base path for API requests (e.g., `/v1`)
    /// * `config` - Credentials, base URL, timeout and user agent settings
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying reqwest client cannot
    /// be created (e.g., TLS initialization failure).
    pub fn new(base_path: impl Into<String>, config: &AscConfig) -> Result<Self, HttpError> {
        let base_path = base_path.into();
        let base_uri = config.base_url().as_ref().to_string();

        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!(
            "{user_agent_prefix}App Store Connect Rust Library v{SDK_VERSION} | Rust {rust_version}"
        );

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(config.timeout())
            .build()?;

        Ok(Self {
            client,
            base_uri,
            base_path,
            default_headers,
            signer: TokenSigner::new(config),
        })
    }

    /// Returns the base URI for this client.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the base path for this client.
    #[must_use]
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Resolves a request path to a full URL.
    ///
    /// Relative paths are appended to the base URI and base path. Absolute
    /// URLs, as returned in `links.next`, are used as-is but must point
    /// under the base URI so the bearer token never leaves the API host.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError::ForeignUrl`] for absolute URLs
    /// outside the base URI.
    pub fn resolve_url(&self, path: &str) -> Result<String, InvalidHttpRequestError> {
        if !is_absolute_url(path) {
            return Ok(format!("{}{}/{}", self.base_uri, self.base_path, path));
        }

        let is_under_base = path
            .strip_prefix(&self.base_uri)
            .is_some_and(|rest| rest.is_empty() || rest.starts_with(['/', '?']));

        if is_under_base {
            Ok(path.to_string())
        } else {
            Err(InvalidHttpRequestError::ForeignUrl {
                url: path.to_string(),
                base_uri: self.base_uri.clone(),
            })
        }
    }

    /// Sends an HTTP request to the App Store Connect API.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - The bearer token cannot be signed (`Auth`)
    /// - Network error occurs (`Network`)
    /// - Non-2xx response received (`Response`)
    /// - Max retries exceeded (`MaxRetries`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = self.resolve_url(&request.path)?;

        let mut headers = self.default_headers.clone();
        if let Some(body_type) = &request.body_type {
            headers.insert(
                "Content-Type".to_string(),
                body_type.as_content_type().to_string(),
            );
        }
        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                headers.insert(key.clone(), value.clone());
            }
        }

        let mut tries: u32 = 0;
        loop {
            tries += 1;

            let mut req_builder = match request.http_method {
                HttpMethod::Get => self.client.get(&url),
                HttpMethod::Post => self.client.post(&url),
                HttpMethod::Patch => self.client.patch(&url),
                HttpMethod::Delete => self.client.delete(&url),
            };

            for (key, value) in &headers {
                req_builder = req_builder.header(key, value);
            }

            // Signed per attempt so a long retry wait never sends a stale token
            let token = self.signer.bearer_token()?;
            req_builder = req_builder.bearer_auth(token);

            if let Some(query) = &request.query {
                req_builder = req_builder.query(query);
            }

            if let Some(body) = &request.body {
                req_builder = req_builder.body(body.to_string());
            }

            tracing::debug!(
                method = %request.http_method,
                url = %url,
                attempt = tries,
                "sending App Store Connect request"
            );

            let res = req_builder.send().await?;

            let code = res.status().as_u16();
            let res_headers = Self::parse_response_headers(res.headers());
            let body_text = res.text().await.unwrap_or_default();

            let body = if body_text.trim().is_empty() {
                serde_json::json!({})
            } else {
                serde_json::from_str(&body_text).unwrap_or_else(|_| {
                    if code >= 500 {
                        serde_json::json!({ "raw_body": body_text })
                    } else {
                        serde_json::json!({})
                    }
                })
            };

            let response = HttpResponse::new(code, res_headers, body);

            if response.is_ok() {
                return Ok(response);
            }

            let error_message = Self::serialize_error(&response);
            let error_reference = response.request_id().map(String::from);

            let should_retry = code == 429 || code >= 500;
            if !should_retry {
                return Err(HttpError::Response(HttpResponseError {
                    code,
                    message: error_message,
                    errors: Self::parse_error_details(&response),
                    error_reference,
                }));
            }

            if tries >= request.tries {
                if request.tries <= 1 {
                    return Err(HttpError::Response(HttpResponseError {
                        code,
                        message: error_message,
                        errors: Self::parse_error_details(&response),
                        error_reference,
                    }));
                }
                return Err(HttpError::MaxRetries(MaxHttpRetriesExceededError {
                    code,
                    tries: request.tries,
                    message: error_message,
                    error_reference,
                }));
            }

            let delay = Self::calculate_retry_delay(&response, code);
            tracing::warn!(
                status = code,
                delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
                attempt = tries,
                "retrying App Store Connect request"
            );
            tokio::time::sleep(delay).await;
        }
    }

    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }

    /// For 429 the `Retry-After` header wins, capped at [`MAX_RETRY_AFTER`].
    /// Everything else, and any value a `Duration` cannot hold, waits the fixed delay.
    fn calculate_retry_delay(response: &HttpResponse, status: u16) -> Duration {
        let retry_after = (status == 429)
            .then_some(response.retry_request_after)
            .flatten()
            .and_then(|seconds| Duration::try_from_secs_f64(seconds).ok());

        retry_after.map_or(Duration::from_secs(RETRY_WAIT_TIME), |delay| {
            delay.min(MAX_RETRY_AFTER)
        })
    }

    fn parse_error_details(response: &HttpResponse) -> Vec<ApiErrorDetail> {
        response
            .body
            .get("errors")
            .and_then(|errors| serde_json::from_value(errors.clone()).ok())
            .unwrap_or_default()
    }

    fn serialize_error(response: &HttpResponse) -> String {
        let mut error_body = serde_json::Map::new();

        if let Some(errors) = response.body.get("errors") {
            error_body.insert("errors".to_string(), errors.clone());
        } else if let Some(raw) = response.body.get("raw_body") {
            error_body.insert("error".to_string(), raw.clone());
        }

        if let Some(request_id) = response.request_id() {
            error_body.insert(
                "error_reference".to_string(),
                serde_json::json!(format!(
                    "If you report this error, please include this id: {request_id}."
                )),
            );
        }

        serde_json::to_string(&error_body).unwrap_or_else(|_| "{}".to_string())
    }
}
