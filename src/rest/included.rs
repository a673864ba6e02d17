//! Decoding of the heterogeneous `included` array.
//!
//! When a request asks for related resources with `include=`, App Store
//! Connect embeds them in the document's `included` array. The array mixes
//! resource types, told apart only by their `type` member:
//!
//! ```json
//! "included": [
//!   { "type": "apps", "id": "6446048795", "attributes": { "name": "Atlas" } },
//!   { "type": "appStoreVersions", "id": "a1b2", "attributes": { "versionString": "2.4" } }
//! ]
//! ```
//!
//! Each element decodes into an [`Included`], which keeps the raw record and
//! its tag. Typed access goes through [`Included::extract`], which returns a
//! value only when the tag matches the requested [`IncludedResource`].
//! Elements with a tag this crate does not model stay inert: they never fail
//! the surrounding document and every accessor returns `None` for them.
//!
//! # Example
//!
//! ```rust
//! use app_store_connect::rest::Included;
//! use app_store_connect::rest::resources::v1::{App, AppStoreVersion};
//!
//! let item: Included = serde_json::from_str(
//!     r#"{"type": "apps", "id": "6446048795", "attributes": {"name": "Atlas"}}"#,
//! ).unwrap();
//!
//! assert!(item.is::<App>());
//! assert_eq!(item.extract::<App>().unwrap().id, "6446048795");
//! assert!(item.extract::<AppStoreVersion>().is_none());
//! ```

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// A resource type that can appear in an `included` array.
pub trait IncludedResource: DeserializeOwned {
    /// The JSON:API `type` tag of this resource (e.g., `apps`).
    const TYPE: &'static str;
}

/// One element of an `included` array: the raw record and its `type` tag.
#[derive(Clone, Debug, PartialEq)]
pub struct Included {
    kind: String,
    raw: Value,
}

impl Included {
    /// Wraps a raw record. The tag is read from its `type` member.
    #[must_use]
    pub fn new(raw: Value) -> Self {
        let kind = raw
            .get("type")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        Self { kind, raw }
    }

    /// Returns the `type` tag, or an empty string if the record had none.
    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Returns the record's `id`, if present.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.raw.get("id").and_then(Value::as_str)
    }

    /// Returns the raw record as received.
    #[must_use]
    pub const fn raw(&self) -> &Value {
        &self.raw
    }

    /// Consumes the wrapper and returns the raw record.
    #[must_use]
    pub fn into_raw(self) -> Value {
        self.raw
    }

    /// Returns `true` if the record is tagged as `T`.
    #[must_use]
    pub fn is<T: IncludedResource>(&self) -> bool {
        self.kind == T::TYPE
    }

    /// Decodes the record as `T` if its tag matches.
    ///
    /// # Errors
    ///
    /// Returns the serde error if the tag matches but the record does not
    /// fit `T`.
    pub fn try_extract<T: IncludedResource>(&self) -> Result<Option<T>, serde_json::Error> {
        if !self.is::<T>() {
            return Ok(None);
        }
        T::deserialize(&self.raw).map(Some)
    }

    /// Decodes the record as `T` if its tag matches.
    ///
    /// A record with a matching tag that fails to decode is logged and
    /// treated as absent; use [`try_extract`](Self::try_extract) to see the
    /// error.
    #[must_use]
    pub fn extract<T: IncludedResource>(&self) -> Option<T> {
        match self.try_extract::<T>() {
            Ok(value) => value,
            Err(error) => {
                tracing::warn!(
                    kind = %self.kind,
                    id = self.id().unwrap_or("-"),
                    %error,
                    "included resource could not be decoded"
                );
                None
            }
        }
    }
}

impl AsRef<Self> for Included {
    fn as_ref(&self) -> &Self {
        self
    }
}

impl From<Value> for Included {
    fn from(raw: Value) -> Self {
        Self::new(raw)
    }
}

impl<'de> Deserialize<'de> for Included {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(Self::new)
    }
}

impl Serialize for Included {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.raw.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Clone, PartialEq, Deserialize)]
    struct Widget {
        id: String,
        #[serde(default)]
        attributes: Option<WidgetAttributes>,
    }

    #[derive(Debug, Clone, PartialEq, Deserialize)]
    struct WidgetAttributes {
        name: String,
    }

    impl IncludedResource for Widget {
        const TYPE: &'static str = "widgets";
    }

    #[derive(Debug, Clone, PartialEq, Deserialize)]
    struct Gadget {
        id: String,
    }

    impl IncludedResource for Gadget {
        const TYPE: &'static str = "gadgets";
    }

    #[test]
    fn test_matching_accessor_returns_fields() {
        let item: Included = serde_json::from_value(json!({
            "type": "widgets",
            "id": "w1",
            "attributes": {"name": "Sprocket"}
        }))
        .unwrap();

        assert_eq!(item.kind(), "widgets");
        assert_eq!(item.id(), Some("w1"));

        let widget = item.extract::<Widget>().unwrap();
        assert_eq!(widget.id, "w1");
        assert_eq!(widget.attributes.unwrap().name, "Sprocket");
        assert!(item.extract::<Gadget>().is_none());
    }

    #[test]
    fn test_unknown_tag_is_inert() {
        let item: Included = serde_json::from_value(json!({
            "type": "appEvents",
            "id": "e1",
            "attributes": {"referenceName": "Launch"}
        }))
        .unwrap();

        assert_eq!(item.kind(), "appEvents");
        assert!(item.extract::<Widget>().is_none());
        assert!(item.extract::<Gadget>().is_none());
        assert!(item.try_extract::<Widget>().unwrap().is_none());
    }

    #[test]
    fn test_record_without_type_is_inert() {
        let item = Included::new(json!({"id": "x"}));
        assert_eq!(item.kind(), "");
        assert!(item.extract::<Widget>().is_none());

        let item = Included::new(json!("not an object"));
        assert_eq!(item.kind(), "");
        assert!(item.id().is_none());
    }

    #[test]
    fn test_malformed_record_surfaces_error_through_try_extract() {
        let item = Included::new(json!({"type": "widgets", "id": 42}));

        assert!(item.is::<Widget>());
        assert!(item.try_extract::<Widget>().is_err());
        assert!(item.extract::<Widget>().is_none());
    }

    #[test]
    fn test_unknown_elements_do_not_fail_the_array() {
        let items: Vec<Included> = serde_json::from_value(json!([
            {"type": "widgets", "id": "w1"},
            {"type": "somethingNew", "id": "n1", "attributes": {"x": [1, 2]}},
            {"type": "gadgets", "id": "g1"}
        ]))
        .unwrap();

        assert_eq!(items.len(), 3);
        let widgets: Vec<Widget> = items.iter().filter_map(Included::extract::<Widget>).collect();
        let gadgets: Vec<Gadget> = items.iter().filter_map(Included::extract::<Gadget>).collect();
        assert_eq!(widgets.len(), 1);
        assert_eq!(gadgets.len(), 1);
    }

    #[test]
    fn test_serializes_as_raw_record() {
        let raw = json!({"type": "somethingNew", "id": "n1", "meta": {"k": true}});
        let item = Included::new(raw.clone());
        assert_eq!(serde_json::to_value(&item).unwrap(), raw);
        assert_eq!(item.into_raw(), raw);
    }
}
