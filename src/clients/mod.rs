//! HTTP client types for App Store Connect API communication.
//!
//! This module provides the HTTP layer for making authenticated requests to
//! the App Store Connect API. It handles request/response processing, retry
//! logic, bearer token injection and rate limit header parsing.
//!
//! # Overview
//!
//! - [`HttpClient`]: The async HTTP client for API communication
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A parsed response from the API
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PATCH, DELETE)
//! - [`DataType`]: Content types for request bodies
//! - [`RateLimit`]: The hourly quota reported by `X-Rate-Limit`
//! - [`rest::RestClient`]: Higher-level REST API client
//! - [`rest::RestError`]: REST-specific error types
//!
//! # Example
//!
//! ```rust,ignore
//! use app_store_connect::clients::{HttpClient, HttpRequest, HttpMethod};
//!
//! let client = HttpClient::new("/v1", &config)?;
//!
//! let request = HttpRequest::builder(HttpMethod::Get, "reviewSubmissions")
//!     .build()
//!     .unwrap();
//!
//! let response = client.request(request).await?;
//! ```
//!
//! # Retry Behavior
//!
//! - **429 (Rate Limited)**: Retries using the `Retry-After` header value, or 1 second if not present
//! - **5xx (Server Error)**: Retries with a fixed 1-second delay
//! - **Other errors (4xx)**: Returns immediately without retry
//!
//! The default `tries` is 1, meaning no automatic retries.

mod errors;
mod http_client;
mod http_request;
mod http_response;
pub mod rest;

pub use errors::{
    ApiErrorDetail, ErrorSource, HttpError, HttpResponseError, InvalidHttpRequestError,
    MaxHttpRetriesExceededError,
};
pub use http_client::{HttpClient, MAX_RETRY_AFTER, RETRY_WAIT_TIME, SDK_VERSION};
pub use http_request::{DataType, HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::{HttpResponse, RateLimit};

pub use rest::{RestClient, RestError};
