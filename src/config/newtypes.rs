//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around credential and URL values
//! that validate their contents on construction. Invalid values are rejected
//! with clear error messages.

use crate::error::ConfigError;
use jsonwebtoken::EncodingKey;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::path::Path;

/// A validated App Store Connect issuer ID.
///
/// The issuer ID identifies the team that owns the API key. It is shown on
/// the Keys page of App Store Connect and is usually a UUID.
///
/// # Example
///
/// ```rust
/// use app_store_connect::IssuerId;
///
/// let issuer = IssuerId::new("57246542-96fe-1a63-e053-0824d011072a").unwrap();
/// assert_eq!(issuer.as_ref(), "57246542-96fe-1a63-e053-0824d011072a");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IssuerId(String);

impl IssuerId {
    /// Creates a new validated issuer ID.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyIssuerId`] if the ID is empty or whitespace.
    pub fn new(id: impl Into<String>) -> Result<Self, ConfigError> {
        let id = id.into();
        let id = id.trim();
        if id.is_empty() {
            return Err(ConfigError::EmptyIssuerId);
        }
        Ok(Self(id.to_string()))
    }
}

impl AsRef<str> for IssuerId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for IssuerId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for IssuerId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

/// A validated App Store Connect API key ID.
///
/// Sent as the `kid` header of every signed token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyId(String);

impl KeyId {
    /// Creates a new validated key ID.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyKeyId`] if the ID is empty or whitespace.
    pub fn new(id: impl Into<String>) -> Result<Self, ConfigError> {
        let id = id.into();
        let id = id.trim();
        if id.is_empty() {
            return Err(ConfigError::EmptyKeyId);
        }
        Ok(Self(id.to_string()))
    }
}

impl AsRef<str> for KeyId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A parsed App Store Connect private key.
///
/// App Store Connect hands out keys as `AuthKey_<KEY_ID>.p8` files holding a
/// PKCS#8 PEM encoded EC P-256 key. The key is parsed on construction so a
/// broken key fails at configuration time rather than on the first request.
///
/// # Security
///
/// The `Debug` implementation masks the key, displaying only
/// `PrivateKey(*****)`. The PEM text is not retained.
///
/// # Example
///
/// ```rust,ignore
/// use app_store_connect::PrivateKey;
///
/// let key = PrivateKey::from_file("AuthKey_2X9R4HXF34.p8")?;
/// assert_eq!(format!("{key:?}"), "PrivateKey(*****)");
/// ```
#[derive(Clone)]
pub struct PrivateKey(EncodingKey);

impl PrivateKey {
    /// Parses a private key from PEM text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPrivateKey`] if the text is not a PEM
    /// encoded EC key.
    pub fn from_pem(pem: impl AsRef<[u8]>) -> Result<Self, ConfigError> {
        let pem = pem.as_ref();
        if pem.iter().all(u8::is_ascii_whitespace) {
            return Err(ConfigError::InvalidPrivateKey {
                reason: "key is empty".to_string(),
            });
        }

        EncodingKey::from_ec_pem(pem)
            .map(Self)
            .map_err(|e| ConfigError::InvalidPrivateKey {
                reason: e.to_string(),
            })
    }

    /// Reads and parses a `.p8` private key file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::PrivateKeyUnreadable`] if the file cannot be
    /// read, or [`ConfigError::InvalidPrivateKey`] if it does not hold a key.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let pem = std::fs::read(path).map_err(|e| ConfigError::PrivateKeyUnreadable {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_pem(pem)
    }

    pub(crate) const fn encoding_key(&self) -> &EncodingKey {
        &self.0
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivateKey(*****)")
    }
}

/// A validated API base URL.
///
/// Defaults to `https://api.appstoreconnect.apple.com`. Overriding it is
/// mostly useful for proxies and tests. Trailing slashes are trimmed so
/// paths can be appended directly.
///
/// # Example
///
/// ```rust
/// use app_store_connect::BaseUrl;
///
/// let url = BaseUrl::new("http://localhost:8080/").unwrap();
/// assert_eq!(url.as_ref(), "http://localhost:8080");
/// assert_eq!(url.scheme(), "http");
/// assert_eq!(url.host_name(), Some("localhost"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl {
    url: String,
    scheme_end: usize,
    host_start: usize,
    host_end: usize,
}

impl BaseUrl {
    /// The production App Store Connect API host.
    pub const APPLE: &'static str = "https://api.appstoreconnect.apple.com";

    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the URL has no `http` or
    /// `https` scheme, or no host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();

        let scheme_end = url
            .find("://")
            .ok_or_else(|| ConfigError::InvalidBaseUrl { url: url.clone() })?;

        let scheme = &url[..scheme_end];
        if !matches!(scheme, "http" | "https") {
            return Err(ConfigError::InvalidBaseUrl { url: url.clone() });
        }

        let host_start = scheme_end + 3;
        if host_start >= url.len() {
            return Err(ConfigError::InvalidBaseUrl { url: url.clone() });
        }

        let remainder = &url[host_start..];
        let host_end = remainder
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);

        if host_end == host_start {
            return Err(ConfigError::InvalidBaseUrl { url: url.clone() });
        }

        Ok(Self {
            url,
            scheme_end,
            host_start,
            host_end,
        })
    }

    /// Returns the URL scheme (`http` or `https`).
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> Option<&str> {
        let host = &self.url[self.host_start..self.host_end];
        if host.is_empty() {
            None
        } else {
            Some(host)
        }
    }
}

impl Default for BaseUrl {
    fn default() -> Self {
        Self {
            url: Self::APPLE.to_string(),
            scheme_end: 5,
            host_start: 8,
            host_end: Self::APPLE.len(),
        }
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}
