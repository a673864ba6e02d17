//! Requests sent by [`HttpClient`](crate::clients::HttpClient).
//!
//! An [`HttpRequest`] names a path under the versioned API root
//! (`reviewSubmissions/6f3b`, resolved against `{base_url}/v1`) or, for
//! pagination, the absolute `links.next` URL App Store Connect returned.
//! Absolute URLs are sent verbatim with their `cursor` and `limit` query;
//! the client refuses any that point outside the configured base URL.
//!
//! Requests carry no credentials. The client signs a bearer token for
//! every attempt, so a request can be retried or replayed freely.

use std::collections::HashMap;
use std::fmt;

use crate::clients::errors::InvalidHttpRequestError;

/// The verbs App Store Connect accepts. There is no `PUT`; updates are
/// JSON:API `PATCH` documents.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// Reads a resource or a page of a collection.
    Get,
    /// Creates a resource (`reviewSubmissions`, `reviewSubmissionItems`).
    Post,
    /// Changes attributes, e.g. `submitted` or `canceled` on a submission.
    Patch,
    /// Removes a resource, e.g. an item from an open submission.
    Delete,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Post => write!(f, "POST"),
            Self::Patch => write!(f, "PATCH"),
            Self::Delete => write!(f, "DELETE"),
        }
    }
}

/// Content type of a request body. App Store Connect only takes JSON:API
/// documents.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataType {
    /// `application/json`.
    Json,
}

impl DataType {
    /// Returns the MIME type string for this data type.
    #[must_use]
    pub const fn as_content_type(&self) -> &'static str {
        match self {
            Self::Json => "application/json",
        }
    }
}

/// One call to the App Store Connect API.
///
/// Filters, sparse fieldsets and includes travel as bracketed query keys
/// (`filter[app]`, `fields[reviewSubmissions]`, `include`), with list values
/// already comma-joined. `POST` and `PATCH` must carry a JSON:API document
/// with [`DataType::Json`].
///
/// # Example
///
/// ```rust
/// use app_store_connect::clients::{HttpRequest, HttpMethod, DataType};
/// use serde_json::json;
///
/// let list = HttpRequest::builder(HttpMethod::Get, "reviewSubmissions")
///     .query_param("filter[app]", "6446048795")
///     .query_param("filter[state]", "READY_FOR_REVIEW,WAITING_FOR_REVIEW")
///     .build()
///     .unwrap();
/// assert!(!list.is_absolute());
///
/// let next_page = HttpRequest::builder(
///     HttpMethod::Get,
///     "https://api.appstoreconnect.apple.com/v1/reviewSubmissions?cursor=Mg&limit=2",
/// )
/// .build()
/// .unwrap();
/// assert!(next_page.is_absolute());
///
/// let submit = HttpRequest::builder(HttpMethod::Patch, "reviewSubmissions/6f3b")
///     .body(json!({
///         "data": {"type": "reviewSubmissions", "id": "6f3b", "attributes": {"submitted": true}}
///     }))
///     .body_type(DataType::Json)
///     .build()
///     .unwrap();
/// ```
#[derive(Clone, Debug)]
pub struct HttpRequest {
    pub http_method: HttpMethod,
    /// A path under the versioned API root, or an absolute `links.next` URL.
    pub path: String,
    /// A JSON:API document (`{"data": {...}}`).
    pub body: Option<serde_json::Value>,
    pub body_type: Option<DataType>,
    /// Bracketed query keys mapped to comma-joined values. Appended after
    /// any query an absolute URL already carries.
    pub query: Option<HashMap<String, String>>,
    /// Headers on top of `User-Agent`, `Accept` and `Authorization`.
    pub extra_headers: Option<HashMap<String, String>>,
    /// Attempts allowed for 429 and 5xx responses (default: 1).
    pub tries: u32,
}

/// Returns `true` for `http://` and `https://` URLs, as found in
/// `links.next` and `links.self`.
pub(crate) fn is_absolute_url(path: &str) -> bool {
    path.starts_with("https://") || path.starts_with("http://")
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, path)
    }

    /// Returns `true` if `path` is a full URL rather than a path under the
    /// API root.
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        is_absolute_url(&self.path)
    }

    /// Validates the request.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if:
    /// - `body` is `Some` but `body_type` is `None`
    /// - `http_method` is `Post` or `Patch` but `body` is `None`
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        if self.body.is_some() && self.body_type.is_none() {
            return Err(InvalidHttpRequestError::MissingBodyType);
        }

        if matches!(self.http_method, HttpMethod::Post | HttpMethod::Patch) && self.body.is_none()
        {
            return Err(InvalidHttpRequestError::MissingBody {
                method: self.http_method.to_string(),
            });
        }

        Ok(())
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    path: String,
    body: Option<serde_json::Value>,
    body_type: Option<DataType>,
    query: Option<HashMap<String, String>>,
    extra_headers: Option<HashMap<String, String>>,
    tries: u32,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            http_method: method,
            path: path.into(),
            body: None,
            body_type: None,
            query: None,
            extra_headers: None,
            tries: 1,
        }
    }

    /// Sets the JSON:API document to send.
    ///
    /// Pair it with [`body_type`](Self::body_type); `build` rejects a body
    /// without one.
    #[must_use]
    pub fn body(mut self, body: impl Into<serde_json::Value>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Sets the content type of the request body.
    #[must_use]
    pub const fn body_type(mut self, body_type: DataType) -> Self {
        self.body_type = Some(body_type);
        self
    }

    /// Sets all query parameters at once.
    #[must_use]
    pub fn query(mut self, query: HashMap<String, String>) -> Self {
        self.query = Some(query);
        self
    }

    /// Adds a single query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Adds a single extra header.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_headers
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Sets how many attempts a rate-limited (429) or failing (5xx) request
    /// gets. Default is 1 (no retries).
    #[must_use]
    pub const fn tries(mut self, tries: u32) -> Self {
        self.tries = tries;
        self
    }

    /// Builds the [`HttpRequest`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the request fails validation.
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        let request = HttpRequest {
            http_method: self.http_method,
            path: self.path,
            body: self.body,
            body_type: self.body_type,
            query: self.query,
            extra_headers: self.extra_headers,
            tries: self.tries,
        };
        request.verify()?;
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_http_method_display() {
        assert_eq!(HttpMethod::Get.to_string(), "GET");
        assert_eq!(HttpMethod::Post.to_string(), "POST");
        assert_eq!(HttpMethod::Patch.to_string(), "PATCH");
        assert_eq!(HttpMethod::Delete.to_string(), "DELETE");
    }

    #[test]
    fn test_builder_creates_valid_get_request() {
        let request = HttpRequest::builder(HttpMethod::Get, "reviewSubmissions")
            .build()
            .unwrap();

        assert_eq!(request.http_method, HttpMethod::Get);
        assert_eq!(request.path, "reviewSubmissions");
        assert!(request.body.is_none());
        assert_eq!(request.tries, 1);
    }

    #[test]
    fn test_verify_requires_body_for_patch() {
        let result = HttpRequest::builder(HttpMethod::Patch, "reviewSubmissions/1").build();

        assert!(matches!(
            result,
            Err(InvalidHttpRequestError::MissingBody { method }) if method == "PATCH"
        ));
    }

    #[test]
    fn test_delete_does_not_require_body() {
        let request = HttpRequest::builder(HttpMethod::Delete, "reviewSubmissionItems/1")
            .build()
            .unwrap();
        assert!(request.body.is_none());
    }

    #[test]
    fn test_verify_requires_body_type_when_body_present() {
        let result = HttpRequest::builder(HttpMethod::Post, "reviewSubmissions")
            .body(json!({"data": {}}))
            .build();

        assert!(matches!(
            result,
            Err(InvalidHttpRequestError::MissingBodyType)
        ));
    }

    #[test]
    fn test_builder_with_bracketed_query_params() {
        let request = HttpRequest::builder(HttpMethod::Get, "reviewSubmissions")
            .query_param("filter[platform]", "IOS")
            .query_param("limit", "50")
            .build()
            .unwrap();

        let query = request.query.unwrap();
        assert_eq!(query.get("filter[platform]"), Some(&"IOS".to_string()));
        assert_eq!(query.get("limit"), Some(&"50".to_string()));
    }

    #[test]
    fn test_next_page_url_is_kept_verbatim() {
        let next = "https://api.appstoreconnect.apple.com/v1/reviewSubmissions?cursor=Mg&limit=2";
        let request = HttpRequest::builder(HttpMethod::Get, next).build().unwrap();

        assert!(request.is_absolute());
        assert_eq!(request.path, next);
        assert!(request.query.is_none());
    }

    #[test]
    fn test_relative_paths_are_not_absolute() {
        for path in ["reviewSubmissions", "/reviewSubmissions/1", "https:/typo"] {
            let request = HttpRequest::builder(HttpMethod::Get, path).build().unwrap();
            assert!(!request.is_absolute(), "{path}");
        }
    }

    #[test]
    fn test_builder_with_extra_headers() {
        let request = HttpRequest::builder(HttpMethod::Get, "apps")
            .header("X-Trace", "abc")
            .tries(3)
            .build()
            .unwrap();

        assert_eq!(
            request.extra_headers.unwrap().get("X-Trace"),
            Some(&"abc".to_string())
        );
        assert_eq!(request.tries, 3);
    }
}
