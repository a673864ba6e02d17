//! The `apps` resource as it appears in `included` arrays.

use serde::{Deserialize, Serialize};

use crate::rest::{IncludedResource, ResourceLinks};

/// An app in App Store Connect.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct App {
    /// The app's Apple ID.
    pub id: String,

    /// Always `apps`.
    #[serde(rename = "type")]
    pub kind: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<AppAttributes>,

    /// Relationships, kept as received.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationships: Option<serde_json::Value>,

    #[serde(default)]
    pub links: ResourceLinks,
}

/// Attributes of an [`App`].
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AppAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bundle_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,

    /// Locale of the app's primary metadata (e.g., `en-US`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_locale: Option<String>,
}

impl IncludedResource for App {
    const TYPE: &'static str = "apps";
}

impl App {
    /// Returns the app's name, if the response carried attributes.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.attributes.as_ref()?.name.as_deref()
    }

    /// Returns the app's bundle ID, if the response carried attributes.
    #[must_use]
    pub fn bundle_id(&self) -> Option<&str> {
        self.attributes.as_ref()?.bundle_id.as_deref()
    }
}
