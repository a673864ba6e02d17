//! Response wrapper for REST resource operations.
//!
//! This module provides [`ResourceResponse<T>`], a wrapper that combines the
//! decoded document with metadata like the hourly rate limit and the request
//! ID. The wrapper implements `Deref` for ergonomic access to the inner data.
//!
//! # Deref Pattern
//!
//! `ResourceResponse<T>` implements `Deref<Target = T>`, which means you can
//! use it like the inner document directly:
//!
//! ```rust,ignore
//! let page = ReviewSubmission::list_for_app(&client, "6446048795", None).await?;
//!
//! // Document fields via Deref
//! for submission in &page.data {
//!     println!("{} {:?}", submission.id, submission.state());
//! }
//!
//! if page.has_next_page() {
//!     let next = ReviewSubmission::next_page(&client, &page).await?;
//! }
//!
//! // Hourly quota
//! if let Some(limit) = page.rate_limit() {
//!     println!("{}/{} requests left", limit.remaining, limit.limit);
//! }
//! ```

use std::ops::{Deref, DerefMut};

use serde::de::DeserializeOwned;

use crate::clients::{HttpResponse, RateLimit};
use crate::rest::ResourceError;

/// A response from a REST resource operation.
///
/// # Example
///
/// ```rust
/// use app_store_connect::rest::ResourceResponse;
/// use app_store_connect::clients::RateLimit;
///
/// let response = ResourceResponse::new(
///     vec!["a", "b", "c"],
///     Some(RateLimit { limit: 3600, remaining: 3512 }),
///     Some("req-123".to_string()),
/// );
///
/// assert_eq!(response.len(), 3);
/// assert_eq!(response.rate_limit().unwrap().remaining, 3512);
/// assert_eq!(response.request_id(), Some("req-123"));
/// ```
#[derive(Debug, Clone)]
pub struct ResourceResponse<T> {
    data: T,
    rate_limit: Option<RateLimit>,
    request_id: Option<String>,
}

impl<T> ResourceResponse<T> {
    /// Creates a new `ResourceResponse` with the given data and metadata.
    #[must_use]
    pub const fn new(data: T, rate_limit: Option<RateLimit>, request_id: Option<String>) -> Self {
        Self {
            data,
            rate_limit,
            request_id,
        }
    }

    /// Consumes the response and returns the inner data.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.data
    }

    /// Returns a reference to the inner data.
    #[must_use]
    pub const fn data(&self) -> &T {
        &self.data
    }

    /// Returns a mutable reference to the inner data.
    #[must_use]
    pub fn data_mut(&mut self) -> &mut T {
        &mut self.data
    }

    /// Returns the hourly quota reported by `X-Rate-Limit`, if present.
    #[must_use]
    pub const fn rate_limit(&self) -> Option<&RateLimit> {
        self.rate_limit.as_ref()
    }

    /// Returns the request ID from the `x-request-id` header.
    ///
    /// Quote it when contacting Apple about a failing call.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    /// Maps the inner data to a new type, preserving metadata.
    #[must_use]
    pub fn map<U, F>(self, f: F) -> ResourceResponse<U>
    where
        F: FnOnce(T) -> U,
    {
        ResourceResponse {
            data: f(self.data),
            rate_limit: self.rate_limit,
            request_id: self.request_id,
        }
    }
}

impl<T: DeserializeOwned> ResourceResponse<T> {
    /// Decodes a successful HTTP response body into `T`.
    ///
    /// # Arguments
    ///
    /// * `response` - The HTTP response
    /// * `resource` - The resource name used in error messages
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Decode`] if the body does not match `T`.
    pub fn from_http_response(
        response: HttpResponse,
        resource: &'static str,
    ) -> Result<Self, ResourceError> {
        let request_id = response.request_id().map(ToString::to_string);

        let data: T = serde_json::from_value(response.body).map_err(|e| {
            tracing::warn!(
                resource,
                request_id = request_id.as_deref().unwrap_or("-"),
                error = %e,
                "response body did not match the expected document"
            );
            ResourceError::Decode {
                resource,
                message: e.to_string(),
            }
        })?;

        Ok(Self {
            data,
            rate_limit: response.rate_limit,
            request_id,
        })
    }
}

impl<T> Deref for ResourceResponse<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl<T> DerefMut for ResourceResponse<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.data
    }
}

// Verify ResourceResponse is Send + Sync when T is Send + Sync
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceResponse<String>>();
    assert_send_sync::<ResourceResponse<Vec<String>>>();
};
