//! REST client implementation for the App Store Connect API.
//!
//! This module provides the [`RestClient`] type for making REST API requests
//! with path normalization, the configured retry count and an API version
//! prefix.

use std::collections::HashMap;

use crate::clients::rest::RestError;
use crate::clients::{DataType, HttpClient, HttpMethod, HttpRequest, HttpResponse};
use crate::config::{ApiVersion, AscConfig};

/// REST API client for App Store Connect.
///
/// Provides `get`, `post`, `patch` and `delete` methods plus [`get_url`](Self::get_url)
/// for following pagination links.
///
/// # Thread Safety
///
/// `RestClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use app_store_connect::{AscConfig, RestClient};
///
/// let client = RestClient::new(&config)?;
///
/// let response = client.get("reviewSubmissions", None).await?;
///
/// let body = serde_json::json!({"data": {"type": "reviewSubmissions", "id": "abc",
///     "attributes": {"submitted": true}}});
/// let response = client.patch("reviewSubmissions/abc", body, None).await?;
/// ```
#[derive(Debug)]
pub struct RestClient {
    http_client: HttpClient,
    api_version: ApiVersion,
    tries: u32,
}

// Verify RestClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestClient>();
};

impl RestClient {
    /// Creates a new REST client using the API version from the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Http`] if the HTTP client cannot be created.
    pub fn new(config: &AscConfig) -> Result<Self, RestError> {
        Self::create_client(config, config.api_version().clone())
    }

    /// Creates a new REST client with a specific API version override.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Http`] if the HTTP client cannot be created.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use app_store_connect::{ApiVersion, RestClient};
    ///
    /// let client = RestClient::with_version(&config, ApiVersion::V2)?;
    /// ```
    pub fn with_version(config: &AscConfig, version: ApiVersion) -> Result<Self, RestError> {
        let config_version = config.api_version();
        if &version == config_version {
            tracing::debug!(
                "Rest client has a redundant API version override to the default {}",
                config_version
            );
        } else {
            tracing::debug!(
                "Rest client overriding default API version {} with {}",
                config_version,
                version
            );
        }

        Self::create_client(config, version)
    }

    fn create_client(config: &AscConfig, api_version: ApiVersion) -> Result<Self, RestError> {
        let base_path = format!("/{api_version}");
        let http_client = HttpClient::new(base_path, config)?;

        Ok(Self {
            http_client,
            api_version,
            tries: config.tries(),
        })
    }

    /// Returns the API version being used by this client.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the base URI requests are sent to.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        self.http_client.base_uri()
    }

    /// Sends a GET request to the specified path.
    ///
    /// # Arguments
    ///
    /// * `path` - The API path (e.g., `reviewSubmissions/abc`)
    /// * `query` - Optional query parameters
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is empty.
    /// Returns [`RestError::Http`] for HTTP-level errors.
    pub async fn get(
        &self,
        path: &str,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Get, path, None, query).await
    }

    /// Sends a GET request to an absolute URL, such as a document's
    /// `links.next`.
    ///
    /// The URL must start with the client's base URI.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Http`] wrapping
    /// [`InvalidHttpRequestError::ForeignUrl`](crate::clients::InvalidHttpRequestError::ForeignUrl)
    /// for URLs outside the API host, or for any HTTP-level error.
    pub async fn get_url(&self, url: &str) -> Result<HttpResponse, RestError> {
        let request = HttpRequest::builder(HttpMethod::Get, url)
            .tries(self.tries)
            .build()
            .map_err(|e| RestError::Http(e.into()))?;

        self.http_client.request(request).await.map_err(Into::into)
    }

    /// Sends a POST request to the specified path.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is empty.
    /// Returns [`RestError::Http`] for HTTP-level errors.
    pub async fn post(
        &self,
        path: &str,
        body: serde_json::Value,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Post, path, Some(body), query)
            .await
    }

    /// Sends a PATCH request to the specified path.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is empty.
    /// Returns [`RestError::Http`] for HTTP-level errors.
    pub async fn patch(
        &self,
        path: &str,
        body: serde_json::Value,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Patch, path, Some(body), query)
            .await
    }

    /// Sends a DELETE request to the specified path.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is empty.
    /// Returns [`RestError::Http`] for HTTP-level errors.
    pub async fn delete(
        &self,
        path: &str,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Delete, path, None, query)
            .await
    }

    async fn make_request(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<serde_json::Value>,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, RestError> {
        let normalized_path = normalize_path(path)?;

        let mut builder = HttpRequest::builder(method, &normalized_path).tries(self.tries);

        if let Some(body_value) = body {
            builder = builder.body(body_value).body_type(DataType::Json);
        }

        if let Some(query_params) = query.filter(|q| !q.is_empty()) {
            builder = builder.query(query_params);
        }

        let request = builder.build().map_err(|e| RestError::Http(e.into()))?;

        self.http_client.request(request).await.map_err(Into::into)
    }
}

/// Strips leading `/` characters and rejects empty paths.
///
/// ```rust,ignore
/// assert_eq!(normalize_path("/reviewSubmissions")?, "reviewSubmissions");
/// ```
fn normalize_path(path: &str) -> Result<String, RestError> {
    let path = path.trim().trim_start_matches('/');

    if path.is_empty() {
        return Err(RestError::InvalidPath {
            path: String::new(),
        });
    }

    Ok(path.to_string())
}
