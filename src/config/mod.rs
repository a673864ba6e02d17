//! Configuration types for the App Store Connect client.
//!
//! This module provides the configuration types used to authenticate and
//! reach the App Store Connect API.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`AscConfig`]: The main configuration struct holding all client settings
//! - [`AscConfigBuilder`]: A builder for constructing [`AscConfig`] instances
//! - [`IssuerId`], [`KeyId`]: Validated API key identifiers
//! - [`PrivateKey`]: A parsed `.p8` signing key with masked debug output
//! - [`BaseUrl`]: A validated API host URL
//! - [`ApiVersion`]: The API version path segment
//!
//! # Example
//!
//! ```rust,ignore
//! use app_store_connect::{AscConfig, IssuerId, KeyId, PrivateKey};
//!
//! let config = AscConfig::builder()
//!     .issuer_id(IssuerId::new("57246542-96fe-1a63-e053-0824d011072a")?)
//!     .key_id(KeyId::new("2X9R4HXF34")?)
//!     .private_key(PrivateKey::from_file("AuthKey_2X9R4HXF34.p8")?)
//!     .build()?;
//! ```

mod newtypes;
mod version;

pub use newtypes::{BaseUrl, IssuerId, KeyId, PrivateKey};
pub use version::ApiVersion;

use std::time::Duration;

use crate::error::ConfigError;

/// Longest token lifetime App Store Connect accepts (20 minutes).
pub const MAX_TOKEN_LIFETIME: Duration = Duration::from_secs(20 * 60);

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for the App Store Connect client.
///
/// Holds the API key used to sign bearer tokens along with transport
/// settings.
///
/// # Thread Safety
///
/// `AscConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
#[derive(Clone, Debug)]
pub struct AscConfig {
    issuer_id: IssuerId,
    key_id: KeyId,
    private_key: PrivateKey,
    base_url: BaseUrl,
    api_version: ApiVersion,
    token_lifetime: Duration,
    timeout: Duration,
    tries: u32,
    user_agent_prefix: Option<String>,
}

impl AscConfig {
    /// Creates a new builder for constructing an `AscConfig`.
    #[must_use]
    pub fn builder() -> AscConfigBuilder {
        AscConfigBuilder::new()
    }

    /// Returns the issuer ID.
    #[must_use]
    pub const fn issuer_id(&self) -> &IssuerId {
        &self.issuer_id
    }

    /// Returns the key ID.
    #[must_use]
    pub const fn key_id(&self) -> &KeyId {
        &self.key_id
    }

    /// Returns the signing key.
    #[must_use]
    pub const fn private_key(&self) -> &PrivateKey {
        &self.private_key
    }

    /// Returns the API base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the API version.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns how long each signed token stays valid.
    #[must_use]
    pub const fn token_lifetime(&self) -> Duration {
        self.token_lifetime
    }

    /// Returns the per-request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns how many times a rate-limited or failed request is attempted.
    #[must_use]
    pub const fn tries(&self) -> u32 {
        self.tries
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify AscConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AscConfig>();
};

/// Builder for constructing [`AscConfig`] instances.
///
/// Required fields are `issuer_id`, `key_id` and `private_key`.
///
/// # Defaults
///
/// - `base_url`: `https://api.appstoreconnect.apple.com`
/// - `api_version`: `v1`
/// - `token_lifetime`: 20 minutes
/// - `timeout`: 30 seconds
/// - `tries`: 1 (no retries)
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct AscConfigBuilder {
    issuer_id: Option<IssuerId>,
    key_id: Option<KeyId>,
    private_key: Option<PrivateKey>,
    base_url: Option<BaseUrl>,
    api_version: Option<ApiVersion>,
    token_lifetime: Option<Duration>,
    timeout: Option<Duration>,
    tries: Option<u32>,
    user_agent_prefix: Option<String>,
}

impl AscConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder pre-filled from environment variables.
    ///
    /// Reads:
    /// - `ASC_ISSUER_ID`: issuer ID (required)
    /// - `ASC_KEY_ID`: key ID (required)
    /// - `ASC_PRIVATE_KEY`: PEM text of the key, or
    /// - `ASC_PRIVATE_KEY_PATH`: path to the `.p8` file
    /// - `ASC_BASE_URL`: base URL override (optional)
    ///
    /// The returned builder can still be adjusted before calling
    /// [`build`](Self::build).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnvVar`] if a required variable is not
    /// set, or the validation error of the offending value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let issuer_id = lookup("ASC_ISSUER_ID").ok_or(ConfigError::MissingEnvVar {
            name: "ASC_ISSUER_ID",
        })?;
        let key_id = lookup("ASC_KEY_ID").ok_or(ConfigError::MissingEnvVar { name: "ASC_KEY_ID" })?;

        let private_key = if let Some(pem) = lookup("ASC_PRIVATE_KEY") {
            PrivateKey::from_pem(pem)?
        } else if let Some(path) = lookup("ASC_PRIVATE_KEY_PATH") {
            PrivateKey::from_file(path)?
        } else {
            return Err(ConfigError::MissingEnvVar {
                name: "ASC_PRIVATE_KEY_PATH",
            });
        };

        let mut builder = Self::new()
            .issuer_id(IssuerId::new(issuer_id)?)
            .key_id(KeyId::new(key_id)?)
            .private_key(private_key);

        if let Some(url) = lookup("ASC_BASE_URL") {
            builder = builder.base_url(BaseUrl::new(url)?);
        }

        Ok(builder)
    }

    /// Sets the issuer ID (required).
    #[must_use]
    pub fn issuer_id(mut self, issuer_id: IssuerId) -> Self {
        self.issuer_id = Some(issuer_id);
        self
    }

    /// Sets the key ID (required).
    #[must_use]
    pub fn key_id(mut self, key_id: KeyId) -> Self {
        self.key_id = Some(key_id);
        self
    }

    /// Sets the signing key (required).
    #[must_use]
    pub fn private_key(mut self, key: PrivateKey) -> Self {
        self.private_key = Some(key);
        self
    }

    /// Sets the API base URL.
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the API version.
    #[must_use]
    pub fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Sets the lifetime of signed tokens. Must be between 1 second and
    /// 20 minutes.
    #[must_use]
    pub const fn token_lifetime(mut self, lifetime: Duration) -> Self {
        self.token_lifetime = Some(lifetime);
        self
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets how many times a request answered with 429 or 5xx is attempted.
    ///
    /// Values below 1 are treated as 1.
    #[must_use]
    pub const fn tries(mut self, tries: u32) -> Self {
        self.tries = Some(tries);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`AscConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if a required field is
    /// not set, or [`ConfigError::InvalidTokenLifetime`] if the token
    /// lifetime is zero or longer than 20 minutes.
    pub fn build(self) -> Result<AscConfig, ConfigError> {
        let issuer_id = self
            .issuer_id
            .ok_or(ConfigError::MissingRequiredField { field: "issuer_id" })?;
        let key_id = self
            .key_id
            .ok_or(ConfigError::MissingRequiredField { field: "key_id" })?;
        let private_key = self.private_key.ok_or(ConfigError::MissingRequiredField {
            field: "private_key",
        })?;

        let token_lifetime = self.token_lifetime.unwrap_or(MAX_TOKEN_LIFETIME);
        if token_lifetime.as_secs() == 0 || token_lifetime > MAX_TOKEN_LIFETIME {
            return Err(ConfigError::InvalidTokenLifetime {
                seconds: token_lifetime.as_secs(),
            });
        }

        Ok(AscConfig {
            issuer_id,
            key_id,
            private_key,
            base_url: self.base_url.unwrap_or_default(),
            api_version: self.api_version.unwrap_or_default(),
            token_lifetime,
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
            tries: self.tries.unwrap_or(1).max(1),
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
