//! Error types for the App Store Connect client.
//!
//! This module contains error types used throughout the crate for configuration
//! and validation errors.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use app_store_connect::{IssuerId, ConfigError};
//!
//! let result = IssuerId::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyIssuerId)));
//! ```

use thiserror::Error;

/// Errors that can occur during client configuration.
///
/// Each variant provides a clear, actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Issuer ID cannot be empty.
    #[error("Issuer ID cannot be empty. Copy it from the Keys page in App Store Connect.")]
    EmptyIssuerId,

    /// Key ID cannot be empty.
    #[error("Key ID cannot be empty. Please provide the ID of your App Store Connect API key.")]
    EmptyKeyId,

    /// The private key could not be parsed.
    #[error("Invalid private key: {reason}. Expected a PKCS#8 PEM encoded EC P-256 key (.p8).")]
    InvalidPrivateKey {
        /// Why the key was rejected.
        reason: String,
    },

    /// The private key file could not be read.
    #[error("Cannot read private key from '{path}': {reason}")]
    PrivateKeyUnreadable {
        /// The path that was provided.
        path: String,
        /// The underlying I/O failure.
        reason: String,
    },

    /// Base URL is invalid.
    #[error("Invalid base URL '{url}'. Please provide a URL with scheme (e.g., 'https://api.appstoreconnect.apple.com').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// API version is invalid.
    #[error("Invalid API version '{version}'. Expected format: 'v1', 'v2', ...")]
    InvalidApiVersion {
        /// The invalid version string that was provided.
        version: String,
    },

    /// Token lifetime is outside the range App Store Connect accepts.
    #[error("Invalid token lifetime of {seconds} seconds. App Store Connect accepts 1 to 1200 seconds.")]
    InvalidTokenLifetime {
        /// The rejected lifetime in seconds.
        seconds: u64,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// A required environment variable is not set.
    #[error("Environment variable '{name}' is not set.")]
    MissingEnvVar {
        /// The name of the variable.
        name: &'static str,
    },
}
