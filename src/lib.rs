//! # App Store Connect Rust Client
//!
//! A Rust client for the review submission endpoints of the App Store
//! Connect API, providing type-safe configuration, bearer token signing and
//! an async HTTP client.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`AscConfig`] and [`AscConfigBuilder`]
//! - Validated newtypes for the API key identifiers and base URL
//! - ES256 bearer token signing and caching via [`auth::TokenSigner`]
//! - Async HTTP client with retry logic and `X-Rate-Limit` parsing
//! - JSON:API documents with typed access to `included` resources
//! - The `reviewSubmissions` and `reviewSubmissionItems` resources
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use app_store_connect::{AscConfig, IssuerId, KeyId, PrivateKey, RestClient};
//!
//! let config = AscConfig::builder()
//!     .issuer_id(IssuerId::new("57246542-96fe-1a63-e053-0824d011072a")?)
//!     .key_id(KeyId::new("2X9R4HXF34")?)
//!     .private_key(PrivateKey::from_file("AuthKey_2X9R4HXF34.p8")?)
//!     .tries(3)
//!     .build()?;
//!
//! let client = RestClient::new(&config)?;
//! ```
//!
//! Or read the key from `ASC_ISSUER_ID`, `ASC_KEY_ID` and
//! `ASC_PRIVATE_KEY_PATH`:
//!
//! ```rust,ignore
//! let config = AscConfigBuilder::from_env()?.build()?;
//! ```
//!
//! ## Submitting for Review
//!
//! ```rust,ignore
//! use app_store_connect::rest::resources::v1::{Platform, ReviewSubmission, ReviewSubmissionItem};
//!
//! let submission = ReviewSubmission::create(&client, Platform::Ios, "1234567890").await?;
//!
//! ReviewSubmissionItem::create_for_app_store_version(
//!     &client,
//!     Some("b7c1"),
//!     &submission.data.id,
//! )
//! .await?;
//!
//! let submitted = ReviewSubmission::submit(&client, &submission.data.id).await?;
//! println!("{:?}, {:?} requests left", submitted.data.state(), submitted.rate_limit());
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime
//! - **Tolerant decoding**: Unknown enum values and `included` types never fail a response

pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use auth::{AuthError, TokenSigner};
pub use config::{AscConfig, AscConfigBuilder, ApiVersion, BaseUrl, IssuerId, KeyId, PrivateKey};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    ApiErrorDetail, DataType, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder,
    HttpResponse, HttpResponseError, InvalidHttpRequestError, MaxHttpRetriesExceededError,
    RateLimit, RestClient, RestError,
};

// Re-export REST resource infrastructure
pub use rest::{Included, IncludedResource, ResourceError, ResourceResponse, RestResource};
