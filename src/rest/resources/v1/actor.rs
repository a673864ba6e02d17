//! The `actors` resource: who submitted or last changed a review submission.

use serde::{Deserialize, Serialize};

use crate::rest::{IncludedResource, ResourceLinks};

/// A user or API key that acted on a resource.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Actor {
    pub id: String,

    /// Always `actors`.
    #[serde(rename = "type")]
    pub kind: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<ActorAttributes>,

    #[serde(default)]
    pub links: ResourceLinks,
}

/// Attributes of an [`Actor`].
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ActorAttributes {
    /// `USER`, `API_KEY`, `XCODE_CLOUD` or `APPLE`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actor_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_first_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_last_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key_id: Option<String>,
}

impl IncludedResource for Actor {
    const TYPE: &'static str = "actors";
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_actor_api_key() {
        let actor: Actor = serde_json::from_value(json!({
            "type": "actors",
            "id": "a-1",
            "attributes": {"actorType": "API_KEY", "apiKeyId": "2X9R4HXF34"}
        }))
        .unwrap();

        let attributes = actor.attributes.unwrap();
        assert_eq!(attributes.actor_type.as_deref(), Some("API_KEY"));
        assert_eq!(attributes.api_key_id.as_deref(), Some("2X9R4HXF34"));
        assert!(attributes.user_email.is_none());
    }
}
