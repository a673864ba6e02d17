//! HTTP response types for the App Store Connect client.
//!
//! This module provides the [`HttpResponse`] type and the [`RateLimit`]
//! parsed from App Store Connect's rate limit header.

use std::collections::HashMap;

/// Hourly request quota parsed from the `X-Rate-Limit` header.
///
/// App Store Connect reports the quota as
/// `user-hour-lim:3600;user-hour-rem:3599;`.
///
/// # Example
///
/// ```rust
/// use app_store_connect::clients::RateLimit;
///
/// let limit = RateLimit::parse("user-hour-lim:3600;user-hour-rem:3599;").unwrap();
/// assert_eq!(limit.limit, 3600);
/// assert_eq!(limit.remaining, 3599);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RateLimit {
    /// Requests allowed per hour.
    pub limit: u32,
    /// Requests left in the current hour.
    pub remaining: u32,
}

impl RateLimit {
    /// Parses the header value.
    ///
    /// Returns `None` unless both the limit and the remaining count are
    /// present and numeric. Unknown entries are ignored.
    #[must_use]
    pub fn parse(header_value: &str) -> Option<Self> {
        let mut limit = None;
        let mut remaining = None;

        for entry in header_value.split(';') {
            let Some((key, value)) = entry.split_once(':') else {
                continue;
            };
            match key.trim() {
                "user-hour-lim" => limit = value.trim().parse().ok(),
                "user-hour-rem" => remaining = value.trim().parse().ok(),
                _ => {}
            }
        }

        Some(Self {
            limit: limit?,
            remaining: remaining?,
        })
    }
}

/// An HTTP response from the App Store Connect API.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, keyed by lowercase name.
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed response body (`{}` when the body is empty).
    pub body: serde_json::Value,
    /// Hourly quota (from the `X-Rate-Limit` header).
    pub rate_limit: Option<RateLimit>,
    /// Seconds to wait before retrying (from the `Retry-After` header).
    pub retry_request_after: Option<f64>,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`, parsing `X-Rate-Limit` and `Retry-After`.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: serde_json::Value) -> Self {
        let rate_limit = headers
            .get("x-rate-limit")
            .and_then(|values| values.first())
            .and_then(|value| RateLimit::parse(value));

        let retry_request_after = headers
            .get("retry-after")
            .and_then(|values| values.first())
            .and_then(|value| value.trim().parse::<f64>().ok())
            .filter(|seconds| seconds.is_finite() && *seconds >= 0.0);

        Self {
            code,
            headers,
            body,
            rate_limit,
            retry_request_after,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the `X-Request-Id` header value, if present.
    ///
    /// Apple support asks for this ID when investigating failed requests.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.headers
            .get("x-request-id")
            .and_then(|values| values.first())
            .map(String::as_str)
    }
}
