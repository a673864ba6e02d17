//! The `appStoreVersions` resource as it appears in `included` arrays.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::Platform;
use crate::rest::{IncludedResource, ResourceLinks};

/// A version of an app on the App Store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppStoreVersion {
    pub id: String,

    /// Always `appStoreVersions`.
    #[serde(rename = "type")]
    pub kind: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<AppStoreVersionAttributes>,

    /// Relationships, kept as received.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationships: Option<serde_json::Value>,

    #[serde(default)]
    pub links: ResourceLinks,
}

/// Attributes of an [`AppStoreVersion`].
///
/// State and release type values are kept as strings; Apple adds new ones
/// regularly.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AppStoreVersionAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<Platform>,

    /// The marketing version (e.g., `2.4.1`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_string: Option<String>,

    /// e.g., `PREPARE_FOR_SUBMISSION`, `WAITING_FOR_REVIEW`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_store_state: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_version_state: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,

    /// `MANUAL`, `AFTER_APPROVAL` or `SCHEDULED`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_type: Option<String>,

    #[serde(
        default,
        with = "crate::rest::datetime::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub earliest_release_date: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub downloadable: Option<bool>,

    #[serde(
        default,
        with = "crate::rest::datetime::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_date: Option<DateTime<Utc>>,
}

impl IncludedResource for AppStoreVersion {
    const TYPE: &'static str = "appStoreVersions";
}

impl AppStoreVersion {
    /// Returns the marketing version, if the response carried attributes.
    #[must_use]
    pub fn version_string(&self) -> Option<&str> {
        self.attributes.as_ref()?.version_string.as_deref()
    }
}
