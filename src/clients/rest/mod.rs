//! REST API client for App Store Connect.
//!
//! This module provides a higher-level REST API client built on top of the
//! [`HttpClient`](crate::clients::HttpClient).
//!
//! # Overview
//!
//! - [`RestClient`]: The REST API client with `get()`, `post()`, `patch()`, `delete()` methods
//! - [`RestError`]: Error type for REST API operations
//!
//! # Example
//!
//! ```rust,ignore
//! use app_store_connect::{AscConfig, RestClient};
//!
//! let config = AscConfig::builder()
//!     .issuer_id(issuer_id)
//!     .key_id(key_id)
//!     .private_key(private_key)
//!     .build()?;
//!
//! let client = RestClient::new(&config)?;
//! let response = client.get("reviewSubmissions", None).await?;
//! println!("Submissions: {}", response.body);
//! ```
//!
//! # Path Normalization
//!
//! Leading slashes are stripped (`/reviewSubmissions` becomes
//! `reviewSubmissions`) and the result is appended to `/{version}/`.
//! Empty paths are rejected.
//!
//! # Retry Behavior
//!
//! Requests are attempted `AscConfig::tries()` times when the API answers
//! with 429 (rate limited) or a 5xx status.

mod client;
mod errors;

pub use client::RestClient;
pub use errors::RestError;
