//! HTTP-specific error types for the App Store Connect client.
//!
//! This module contains error types for HTTP operations, including response
//! errors, retry exhaustion, and request validation failures.
//!
//! # Error Handling
//!
//! - [`HttpResponseError`]: Non-2xx HTTP responses from the API
//! - [`MaxHttpRetriesExceededError`]: When retry attempts are exhausted
//! - [`InvalidHttpRequestError`]: When a request fails validation before sending
//! - [`HttpError`]: Unified error type encompassing all HTTP-related errors
//!
//! App Store Connect reports failures as a JSON:API error document:
//!
//! ```json
//! {"errors": [{"id": "...", "status": "409", "code": "ENTITY_ERROR",
//!              "title": "...", "detail": "...", "source": {"pointer": "/data"}}]}
//! ```
//!
//! Each entry is parsed into an [`ApiErrorDetail`].
//!
//! # Example
//!
//! ```rust,ignore
//! use app_store_connect::clients::HttpError;
//!
//! match client.request(request).await {
//!     Ok(response) => println!("Success: {}", response.body),
//!     Err(HttpError::Response(e)) => {
//!         for detail in &e.errors {
//!             println!("{}: {}", detail.code, detail.detail);
//!         }
//!     }
//!     Err(HttpError::MaxRetries(e)) => {
//!         println!("Retries exhausted after {} tries", e.tries);
//!     }
//!     Err(other) => println!("Request failed: {other}"),
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::auth::AuthError;

/// One entry of an App Store Connect error document.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorDetail {
    /// Unique id of this error occurrence.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// HTTP status code as a string (`"409"`).
    #[serde(default)]
    pub status: String,
    /// Machine-readable code (`ENTITY_ERROR.ATTRIBUTE.INVALID`).
    #[serde(default)]
    pub code: String,
    /// Short summary.
    #[serde(default)]
    pub title: String,
    /// Human-readable explanation.
    #[serde(default)]
    pub detail: String,
    /// Where in the request the problem was found.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<ErrorSource>,
}

/// The request location an error points at.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorSource {
    /// A JSON pointer into the request body (`/data/attributes/platform`).
    Pointer {
        /// The JSON pointer.
        pointer: String,
    },
    /// A query parameter name.
    Parameter {
        /// The parameter name.
        parameter: String,
    },
    /// Any other shape, kept as received.
    Other(serde_json::Value),
}

/// Error returned when an HTTP request receives a non-successful response.
///
/// `message` holds the serialized error body (or a JSON object with an
/// `error` field when the body was not a JSON:API error document). `errors`
/// holds the parsed entries of the body's `errors` array.
///
/// # Example
///
/// ```rust
/// use app_store_connect::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 404,
///     message: r#"{"errors":[{"status":"404","code":"NOT_FOUND"}]}"#.to_string(),
///     errors: Vec::new(),
///     error_reference: Some("abc-123".to_string()),
/// };
///
/// println!("Status {}: {}", error.code, error.message);
/// ```
#[derive(Debug, Error)]
#[error("{message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// Serialized error message in JSON format.
    pub message: String,
    /// Parsed `errors` entries of the response body.
    pub errors: Vec<ApiErrorDetail>,
    /// Reference ID for error reporting (from the `x-request-id` header).
    pub error_reference: Option<String>,
}

/// Error returned when maximum retry attempts have been exhausted.
///
/// Raised when a request continues to fail with 429 or 5xx responses after
/// all configured attempts have been made.
#[derive(Debug, Error)]
#[error("Exceeded maximum retry count of {tries}. Last message: {message}")]
pub struct MaxHttpRetriesExceededError {
    /// The HTTP status code of the last response.
    pub code: u16,
    /// The number of tries that were attempted.
    pub tries: u32,
    /// Serialized error message from the last response.
    pub message: String,
    /// Reference ID for error reporting (from the `x-request-id` header).
    pub error_reference: Option<String>,
}

/// Error returned when an HTTP request fails validation.
///
/// This error is raised before a request is sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A request body was provided without specifying the body type.
    #[error("Cannot set a body without also setting body_type.")]
    MissingBodyType,

    /// A POST or PATCH request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },

    /// An absolute URL pointed outside the configured API host.
    #[error("Refusing to send credentials to '{url}': URL does not start with '{base_uri}'.")]
    ForeignUrl {
        /// The rejected URL.
        url: String,
        /// The client's base URI.
        base_uri: String,
    },
}

/// Unified error type for all HTTP-related errors.
///
/// # Example
///
/// ```rust,ignore
/// use app_store_connect::HttpError;
///
/// match client.request(request).await {
///     Ok(response) => { /* handle success */ }
///     Err(HttpError::Response(e)) => { /* handle API error */ }
///     Err(HttpError::MaxRetries(e)) => { /* handle retry exhaustion */ }
///     Err(HttpError::InvalidRequest(e)) => { /* handle validation error */ }
///     Err(HttpError::Network(e)) => { /* handle network error */ }
///     Err(HttpError::Auth(e)) => { /* handle token signing error */ }
/// }
/// ```
#[derive(Debug, Error)]
pub enum HttpError {
    /// An HTTP response error (non-2xx status code).
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Maximum retry attempts exhausted.
    #[error(transparent)]
    MaxRetries(#[from] MaxHttpRetriesExceededError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The bearer token could not be produced.
    #[error(transparent)]
    Auth(#[from] AuthError),
}
