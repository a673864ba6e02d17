//! Resource-specific error types for REST API operations.
//!
//! This module contains error types for REST resource operations, extending
//! the base [`RestError`](crate::clients::RestError) with resource-specific
//! semantics like `NotFound` and `ValidationFailed`.
//!
//! # Error Handling
//!
//! HTTP status codes are mapped to semantic error variants:
//!
//! - **404**: [`ResourceError::NotFound`] - Resource doesn't exist
//! - **409 / 422**: [`ResourceError::ValidationFailed`] - App Store Connect rejected the payload
//! - **Other 4xx/5xx**: [`ResourceError::Http`] - Wrapped HTTP error
//!
//! # Example
//!
//! ```rust,ignore
//! use app_store_connect::rest::{RestResource, ResourceError};
//!
//! match ReviewSubmission::find(&client, "abc", None).await {
//!     Ok(submission) => println!("State: {:?}", submission.data.state()),
//!     Err(ResourceError::NotFound { resource, id, .. }) => {
//!         println!("{resource} with id {id} not found");
//!     }
//!     Err(ResourceError::ValidationFailed { errors, .. }) => {
//!         for error in errors {
//!             println!("{}: {}", error.code, error.detail);
//!         }
//!     }
//!     Err(e) => println!("Other error: {e}"),
//! }
//! ```

use crate::clients::{ApiErrorDetail, HttpError, HttpResponseError, RestError};
use thiserror::Error;

/// Error type for REST resource operations.
///
/// # Example
///
/// ```rust
/// use app_store_connect::rest::ResourceError;
///
/// let error = ResourceError::NotFound {
///     resource: "ReviewSubmission",
///     id: "abc".to_string(),
///     request_id: None,
/// };
/// assert!(error.to_string().contains("ReviewSubmission"));
/// assert!(error.to_string().contains("abc"));
/// ```
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The resource was not found (HTTP 404).
    #[error("{resource} with id {id} not found")]
    NotFound {
        /// The type name of the resource (e.g., `ReviewSubmission`).
        resource: &'static str,
        /// The ID that was requested.
        id: String,
        /// The request ID for debugging (from the `x-request-id` header).
        request_id: Option<String>,
    },

    /// App Store Connect rejected the request (HTTP 409 or 422).
    #[error("Validation failed: {}", summarize(.errors))]
    ValidationFailed {
        /// The entries of the error document.
        errors: Vec<ApiErrorDetail>,
        /// The request ID for debugging (from the `x-request-id` header).
        request_id: Option<String>,
    },

    /// No valid path matches the provided IDs and operation.
    #[error("Cannot resolve path for {resource}::{operation} with provided IDs")]
    PathResolutionFailed {
        /// The type name of the resource.
        resource: &'static str,
        /// The operation being attempted (e.g., "find", "all", "delete").
        operation: &'static str,
    },

    /// Request parameters could not be turned into a query string.
    #[error("Invalid parameters: {message}")]
    InvalidParams {
        /// Why the parameters were rejected.
        message: String,
    },

    /// A successful response did not hold the expected document.
    #[error("Failed to decode {resource} response: {message}")]
    Decode {
        /// The type name of the resource.
        resource: &'static str,
        /// The deserialization failure.
        message: String,
    },

    /// An HTTP-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// A REST-level error occurred.
    #[error(transparent)]
    Rest(#[from] RestError),
}

impl ResourceError {
    /// Maps a failed REST call to a semantic error.
    ///
    /// - 404 -> `NotFound`
    /// - 409 / 422 -> `ValidationFailed`
    /// - anything else is passed through
    ///
    /// # Example
    ///
    /// ```rust
    /// use app_store_connect::clients::{HttpError, HttpResponseError, RestError};
    /// use app_store_connect::rest::ResourceError;
    ///
    /// let error = RestError::Http(HttpError::Response(HttpResponseError {
    ///     code: 404,
    ///     message: "{}".to_string(),
    ///     errors: Vec::new(),
    ///     error_reference: None,
    /// }));
    ///
    /// let error = ResourceError::from_rest_error(error, "ReviewSubmission", Some("abc"));
    /// assert!(matches!(error, ResourceError::NotFound { .. }));
    /// ```
    #[must_use]
    pub fn from_rest_error(error: RestError, resource: &'static str, id: Option<&str>) -> Self {
        match error {
            RestError::Http(HttpError::Response(response)) => {
                Self::from_http_response(response, resource, id)
            }
            other => Self::Rest(other),
        }
    }

    /// Maps a non-2xx response to a semantic error.
    #[must_use]
    pub fn from_http_response(
        response: HttpResponseError,
        resource: &'static str,
        id: Option<&str>,
    ) -> Self {
        match response.code {
            404 => Self::NotFound {
                resource,
                id: id.unwrap_or("unknown").to_string(),
                request_id: response.error_reference,
            },
            409 | 422 => Self::ValidationFailed {
                errors: response.errors,
                request_id: response.error_reference,
            },
            _ => Self::Http(HttpError::Response(response)),
        }
    }

    /// Returns the request ID if available.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Self::NotFound { request_id, .. } | Self::ValidationFailed { request_id, .. } => {
                request_id.as_deref()
            }
            Self::Http(HttpError::Response(e)) | Self::Rest(RestError::Http(HttpError::Response(e))) => {
                e.error_reference.as_deref()
            }
            Self::Http(HttpError::MaxRetries(e)) | Self::Rest(RestError::Http(HttpError::MaxRetries(e))) => {
                e.error_reference.as_deref()
            }
            _ => None,
        }
    }
}

fn summarize(errors: &[ApiErrorDetail]) -> String {
    if errors.is_empty() {
        return "no details returned".to_string();
    }
    errors
        .iter()
        .map(|e| {
            if e.detail.is_empty() {
                e.code.clone()
            } else {
                format!("{} ({})", e.detail, e.code)
            }
        })
        .collect::<Vec<_>>()
        .join("; ")
}

// Verify ResourceError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceError>();
};
