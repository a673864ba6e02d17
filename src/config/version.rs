//! App Store Connect API version definitions.
//!
//! This module provides the [`ApiVersion`] enum used as the first path
//! segment of every request (`/v1/reviewSubmissions`).

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// App Store Connect API version.
///
/// App Store Connect versions endpoints individually rather than the whole
/// API. Review submissions live under `v1`; newer endpoints sometimes only
/// exist under `v2` or later, which `Custom` covers.
///
/// # Example
///
/// ```rust
/// use app_store_connect::ApiVersion;
///
/// let version: ApiVersion = "v1".parse().unwrap();
/// assert_eq!(version, ApiVersion::V1);
/// assert_eq!(ApiVersion::V2.to_string(), "v2");
/// assert_eq!("v3".parse::<ApiVersion>().unwrap(), ApiVersion::Custom("v3".to_string()));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ApiVersion {
    /// The `v1` endpoints, including review submissions.
    #[default]
    V1,
    /// The `v2` endpoints.
    V2,
    /// Any other `vN` version string.
    Custom(String),
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let version_str = match self {
            Self::V1 => "v1",
            Self::V2 => "v2",
            Self::Custom(s) => s,
        };
        f.write_str(version_str)
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();

        match s.as_str() {
            "v1" => Ok(Self::V1),
            "v2" => Ok(Self::V2),
            _ => {
                if Self::is_valid_version_format(&s) {
                    Ok(Self::Custom(s))
                } else {
                    Err(ConfigError::InvalidApiVersion { version: s })
                }
            }
        }
    }
}

impl ApiVersion {
    fn is_valid_version_format(s: &str) -> bool {
        // Format: v<digits>, no leading zero
        let Some(number) = s.strip_prefix('v') else {
            return false;
        };
        !number.is_empty()
            && !number.starts_with('0')
            && number.chars().all(|c| c.is_ascii_digit())
    }
}
