//! Review submission item resource implementation.
//!
//! An item is one reviewable thing inside a review submission: an app store
//! version, a custom product page version, an in-app event or a product page
//! experiment.
//!
//! Items are listed under their submission
//! (`reviewSubmissions/{review_submission_id}/items`) but created, updated
//! and deleted at `reviewSubmissionItems`.
//!
//! # Example
//!
//! ```rust,ignore
//! use app_store_connect::rest::resources::v1::{
//!     ReviewSubmissionItem, ReviewSubmissionItemTarget, ReviewSubmissionItemUpdate,
//! };
//!
//! // Add an in-app event to an open submission
//! let item = ReviewSubmissionItem::create(
//!     &client,
//!     "6f3b0a2e",
//!     Some(ReviewSubmissionItemTarget::AppEvent("e-42".to_string())),
//! )
//! .await?;
//!
//! // Mark a rejected item as resolved
//! ReviewSubmissionItem::update(&client, &item.data.id, ReviewSubmissionItemUpdate::resolve()).await?;
//!
//! // Take it out of the submission again
//! ReviewSubmissionItem::delete(&client, &item.data.id).await?;
//! ```

use std::ops::Deref;

use serde::{Deserialize, Serialize};

use super::app_store_version::AppStoreVersion;
use super::common::wire_enum;
use super::review_submission::ReviewSubmission;
use crate::clients::{HttpMethod, RestClient};
use crate::rest::{
    CollectionDocument, CollectionResponse, Included, IncludedResource, Relationship,
    RelationshipDeclaration, RequestBody, ResourceError, ResourceLinks, ResourceOperation,
    ResourcePath, ResourceResponse, RestResource, SingleDocument, SingleResponse,
};

wire_enum! {
    /// The state of a review submission item.
    ///
    /// Values this crate does not know yet decode as
    /// [`ReviewSubmissionItemState::Unknown`] and are sent back unchanged.
    pub enum ReviewSubmissionItemState {
        ReadyForReview => "READY_FOR_REVIEW",
        Accepted => "ACCEPTED",
        Approved => "APPROVED",
        Rejected => "REJECTED",
        Removed => "REMOVED",
    }
}

/// An item in a review submission.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReviewSubmissionItem {
    pub id: String,

    /// Always `reviewSubmissionItems`.
    #[serde(rename = "type")]
    pub kind: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<ReviewSubmissionItemAttributes>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationships: Option<ReviewSubmissionItemRelationships>,

    #[serde(default)]
    pub links: ResourceLinks,
}

/// Attributes of a [`ReviewSubmissionItem`].
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ReviewSubmissionItemAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<ReviewSubmissionItemState>,
}

/// Relationships of a [`ReviewSubmissionItem`]. At most one is set.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ReviewSubmissionItemRelationships {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_custom_product_page_version: Option<Relationship>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_event: Option<Relationship>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_store_version: Option<Relationship>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_store_version_experiment: Option<Relationship>,

    #[serde(
        rename = "appStoreVersionExperimentV2",
        skip_serializing_if = "Option::is_none"
    )]
    pub app_store_version_experiment_v2: Option<Relationship>,
}

impl ReviewSubmissionItem {
    /// Returns the item's state, if the response carried attributes.
    #[must_use]
    pub fn state(&self) -> Option<ReviewSubmissionItemState> {
        self.attributes.as_ref()?.state.clone()
    }
}

/// A single review submission item document.
pub type ReviewSubmissionItemResponse =
    SingleDocument<ReviewSubmissionItem, ReviewSubmissionItemIncluded>;

/// A page of review submission items.
pub type ReviewSubmissionItemsResponse =
    CollectionDocument<ReviewSubmissionItem, ReviewSubmissionItemIncluded>;

/// An element of a review submission item document's `included` array.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct ReviewSubmissionItemIncluded(Included);

impl ReviewSubmissionItemIncluded {
    /// Returns the [`AppStoreVersion`], if this element is one.
    #[must_use]
    pub fn app_store_version(&self) -> Option<AppStoreVersion> {
        self.0.extract()
    }

    /// Returns the [`ReviewSubmission`], if this element is one.
    #[must_use]
    pub fn review_submission(&self) -> Option<ReviewSubmission> {
        self.0.extract()
    }
}

impl Deref for ReviewSubmissionItemIncluded {
    type Target = Included;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<Included> for ReviewSubmissionItemIncluded {
    fn as_ref(&self) -> &Included {
        &self.0
    }
}

impl From<Included> for ReviewSubmissionItemIncluded {
    fn from(included: Included) -> Self {
        Self(included)
    }
}

impl IncludedResource for ReviewSubmissionItem {
    const TYPE: &'static str = "reviewSubmissionItems";
}

impl RestResource for ReviewSubmissionItem {
    type Included = ReviewSubmissionItemIncluded;
    type FindParams = ();
    type AllParams = ReviewSubmissionItemListParams;

    const NAME: &'static str = "ReviewSubmissionItem";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::All,
            &["review_submission_id"],
            "reviewSubmissions/{review_submission_id}/items",
        ),
        ResourcePath::new(
            HttpMethod::Post,
            ResourceOperation::Create,
            &[],
            "reviewSubmissionItems",
        ),
        ResourcePath::new(
            HttpMethod::Patch,
            ResourceOperation::Update,
            &["id"],
            "reviewSubmissionItems/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Delete,
            &["id"],
            "reviewSubmissionItems/{id}",
        ),
    ];

    fn id(&self) -> &str {
        &self.id
    }
}

/// The reviewable thing a new item points at.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ReviewSubmissionItemTarget {
    /// An app store version (`appStoreVersions`).
    AppStoreVersion(String),
    /// A custom product page version (`appCustomProductPageVersions`).
    AppCustomProductPageVersion(String),
    /// An in-app event (`appEvents`).
    AppEvent(String),
    /// A product page optimization test (`appStoreVersionExperiments`).
    AppStoreVersionExperiment(String),
    /// A product page optimization test created with the v2 API
    /// (`appStoreVersionExperiments`).
    AppStoreVersionExperimentV2(String),
}

impl ReviewSubmissionItemTarget {
    /// Returns the JSON:API `type` of the target resource.
    #[must_use]
    pub const fn resource_type(&self) -> &'static str {
        match self {
            Self::AppStoreVersion(_) => AppStoreVersion::TYPE,
            Self::AppCustomProductPageVersion(_) => "appCustomProductPageVersions",
            Self::AppEvent(_) => "appEvents",
            Self::AppStoreVersionExperiment(_) | Self::AppStoreVersionExperimentV2(_) => {
                "appStoreVersionExperiments"
            }
        }
    }

    /// Returns the target resource's ID.
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::AppStoreVersion(id)
            | Self::AppCustomProductPageVersion(id)
            | Self::AppEvent(id)
            | Self::AppStoreVersionExperiment(id)
            | Self::AppStoreVersionExperimentV2(id) => id,
        }
    }
}

impl ReviewSubmissionItem {
    /// Adds an item to a review submission.
    ///
    /// Sends `POST /v1/reviewSubmissionItems`. Without a target, only the
    /// `reviewSubmission` relationship is sent.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::ValidationFailed`] if App Store Connect
    /// rejects the item, e.g. when the submission is no longer open.
    pub async fn create(
        client: &RestClient,
        review_submission_id: &str,
        target: Option<ReviewSubmissionItemTarget>,
    ) -> Result<SingleResponse<Self>, ResourceError> {
        let body = RequestBody::new(ReviewSubmissionItemCreateRequest::new(
            review_submission_id,
            target.as_ref(),
        ));
        Self::create_with(client, &body).await
    }

    /// Adds an app store version to a review submission.
    ///
    /// # Errors
    ///
    /// See [`create`](Self::create).
    pub async fn create_for_app_store_version(
        client: &RestClient,
        app_store_version_id: Option<&str>,
        review_submission_id: &str,
    ) -> Result<SingleResponse<Self>, ResourceError> {
        let target = app_store_version_id
            .map(|id| ReviewSubmissionItemTarget::AppStoreVersion(id.to_string()));
        Self::create(client, review_submission_id, target).await
    }

    /// Lists the items of a review submission.
    ///
    /// Sends `GET /v1/reviewSubmissions/{review_submission_id}/items`. Use
    /// [`next_page`](RestResource::next_page) for further pages.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the submission doesn't exist.
    pub async fn list_for_submission(
        client: &RestClient,
        review_submission_id: &str,
        params: Option<ReviewSubmissionItemListParams>,
    ) -> Result<CollectionResponse<Self>, ResourceError> {
        Self::all_with_parent(client, "review_submission_id", review_submission_id, params).await
    }

    /// Updates a review submission item.
    ///
    /// Sends `PATCH /v1/reviewSubmissionItems/{id}`. When neither flag is
    /// set, the request carries no `attributes`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the item doesn't exist.
    pub async fn update(
        client: &RestClient,
        id: &str,
        update: ReviewSubmissionItemUpdate,
    ) -> Result<SingleResponse<Self>, ResourceError> {
        let body = RequestBody::new(ReviewSubmissionItemUpdateRequest::new(id, update));
        Self::update_with(client, id, &body).await
    }

    /// Removes an item from its review submission.
    ///
    /// Sends `DELETE /v1/reviewSubmissionItems/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the item doesn't exist.
    pub async fn delete(
        client: &RestClient,
        id: &str,
    ) -> Result<ResourceResponse<()>, ResourceError> {
        Self::delete_by_id(client, id).await
    }
}

/// Changes to a review submission item.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ReviewSubmissionItemUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub removed: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved: Option<bool>,
}

impl ReviewSubmissionItemUpdate {
    /// An update that marks the item as removed.
    #[must_use]
    pub const fn remove() -> Self {
        Self {
            removed: Some(true),
            resolved: None,
        }
    }

    /// An update that marks the item's issues as resolved.
    #[must_use]
    pub const fn resolve() -> Self {
        Self {
            removed: None,
            resolved: Some(true),
        }
    }

    /// Returns `true` if no flag is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.removed.is_none() && self.resolved.is_none()
    }
}

#[derive(Debug, Serialize)]
struct ReviewSubmissionItemCreateRequest {
    #[serde(rename = "type")]
    kind: &'static str,
    relationships: ReviewSubmissionItemCreateRelationships,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ReviewSubmissionItemCreateRelationships {
    #[serde(skip_serializing_if = "Option::is_none")]
    app_custom_product_page_version: Option<RelationshipDeclaration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    app_event: Option<RelationshipDeclaration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    app_store_version: Option<RelationshipDeclaration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    app_store_version_experiment: Option<RelationshipDeclaration>,
    #[serde(
        rename = "appStoreVersionExperimentV2",
        skip_serializing_if = "Option::is_none"
    )]
    app_store_version_experiment_v2: Option<RelationshipDeclaration>,
    review_submission: RelationshipDeclaration,
}

impl ReviewSubmissionItemCreateRequest {
    fn new(review_submission_id: &str, target: Option<&ReviewSubmissionItemTarget>) -> Self {
        let mut relationships = ReviewSubmissionItemCreateRelationships {
            app_custom_product_page_version: None,
            app_event: None,
            app_store_version: None,
            app_store_version_experiment: None,
            app_store_version_experiment_v2: None,
            review_submission: RelationshipDeclaration::new(
                ReviewSubmission::TYPE,
                review_submission_id,
            ),
        };

        if let Some(target) = target {
            let declaration = Some(RelationshipDeclaration::new(target.resource_type(), target.id()));
            match target {
                ReviewSubmissionItemTarget::AppStoreVersion(_) => {
                    relationships.app_store_version = declaration;
                }
                ReviewSubmissionItemTarget::AppCustomProductPageVersion(_) => {
                    relationships.app_custom_product_page_version = declaration;
                }
                ReviewSubmissionItemTarget::AppEvent(_) => relationships.app_event = declaration,
                ReviewSubmissionItemTarget::AppStoreVersionExperiment(_) => {
                    relationships.app_store_version_experiment = declaration;
                }
                ReviewSubmissionItemTarget::AppStoreVersionExperimentV2(_) => {
                    relationships.app_store_version_experiment_v2 = declaration;
                }
            }
        }

        Self {
            kind: ReviewSubmissionItem::TYPE,
            relationships,
        }
    }
}

#[derive(Debug, Serialize)]
struct ReviewSubmissionItemUpdateRequest {
    id: String,
    #[serde(rename = "type")]
    kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    attributes: Option<ReviewSubmissionItemUpdate>,
}

impl ReviewSubmissionItemUpdateRequest {
    fn new(id: &str, update: ReviewSubmissionItemUpdate) -> Self {
        Self {
            id: id.to_string(),
            kind: ReviewSubmissionItem::TYPE,
            attributes: (!update.is_empty()).then_some(update),
        }
    }
}

/// Parameters for listing the items of a review submission.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct ReviewSubmissionItemListParams {
    #[serde(rename = "fields[reviewSubmissionItems]", skip_serializing_if = "Vec::is_empty")]
    pub fields_review_submission_items: Vec<String>,

    #[serde(rename = "fields[appStoreVersions]", skip_serializing_if = "Vec::is_empty")]
    pub fields_app_store_versions: Vec<String>,

    /// Relationships to embed (e.g., `appStoreVersion`).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub include: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::get_path;
    use serde_json::json;

    #[test]
    fn test_review_submission_item_deserialization() {
        let item: ReviewSubmissionItem = serde_json::from_value(json!({
            "type": "reviewSubmissionItems",
            "id": "i-1",
            "attributes": {"state": "REJECTED"},
            "relationships": {
                "appStoreVersion": {"data": {"type": "appStoreVersions", "id": "b7c1"}},
                "appStoreVersionExperimentV2": {"links": {"related": "https://api.appstoreconnect.apple.com/v1/reviewSubmissionItems/i-1/appStoreVersionExperimentV2"}}
            },
            "links": {"self": "https://api.appstoreconnect.apple.com/v1/reviewSubmissionItems/i-1"}
        }))
        .unwrap();

        assert_eq!(item.id(), "i-1");
        assert_eq!(item.state(), Some(ReviewSubmissionItemState::Rejected));
        let relationships = item.relationships.unwrap();
        assert_eq!(relationships.app_store_version.unwrap().data.unwrap().id, "b7c1");
        assert!(relationships.app_store_version_experiment_v2.is_some());
        assert!(relationships.app_event.is_none());
    }

    #[test]
    fn test_item_state_tolerates_unknown_values() {
        let state: ReviewSubmissionItemState = serde_json::from_str("\"READY_FOR_REVIEW\"").unwrap();
        assert_eq!(state, ReviewSubmissionItemState::ReadyForReview);

        let state: ReviewSubmissionItemState = serde_json::from_str("\"PARKED\"").unwrap();
        assert_eq!(state, ReviewSubmissionItemState::Unknown("PARKED".to_string()));
        assert_eq!(serde_json::to_value(&state).unwrap(), "PARKED");
    }

    #[test]
    fn test_create_request_without_target() {
        let body = RequestBody::new(ReviewSubmissionItemCreateRequest::new("6f3b", None));

        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({
                "data": {
                    "type": "reviewSubmissionItems",
                    "relationships": {
                        "reviewSubmission": {"data": {"type": "reviewSubmissions", "id": "6f3b"}}
                    }
                }
            })
        );
    }

    #[test]
    fn test_create_request_with_app_store_version() {
        let target = ReviewSubmissionItemTarget::AppStoreVersion("b7c1".to_string());
        let body = RequestBody::new(ReviewSubmissionItemCreateRequest::new("6f3b", Some(&target)));

        assert_eq!(
            serde_json::to_value(&body).unwrap()["data"]["relationships"],
            json!({
                "appStoreVersion": {"data": {"type": "appStoreVersions", "id": "b7c1"}},
                "reviewSubmission": {"data": {"type": "reviewSubmissions", "id": "6f3b"}}
            })
        );
    }

    #[test]
    fn test_create_request_routes_each_target_to_its_key() {
        let cases = [
            (
                ReviewSubmissionItemTarget::AppCustomProductPageVersion("c".to_string()),
                "appCustomProductPageVersion",
                "appCustomProductPageVersions",
            ),
            (ReviewSubmissionItemTarget::AppEvent("e".to_string()), "appEvent", "appEvents"),
            (
                ReviewSubmissionItemTarget::AppStoreVersionExperiment("x".to_string()),
                "appStoreVersionExperiment",
                "appStoreVersionExperiments",
            ),
            (
                ReviewSubmissionItemTarget::AppStoreVersionExperimentV2("y".to_string()),
                "appStoreVersionExperimentV2",
                "appStoreVersionExperiments",
            ),
        ];

        for (target, key, kind) in cases {
            let body = serde_json::to_value(ReviewSubmissionItemCreateRequest::new("s", Some(&target)))
                .unwrap();
            let relationships = body["relationships"].as_object().unwrap();

            assert_eq!(relationships.len(), 2, "{key}");
            assert_eq!(relationships[key]["data"]["type"], kind);
            assert_eq!(relationships[key]["data"]["id"], target.id());
        }
    }

    #[test]
    fn test_update_request_body() {
        let body = RequestBody::new(ReviewSubmissionItemUpdateRequest::new(
            "i-1",
            ReviewSubmissionItemUpdate::resolve(),
        ));
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"data": {"id": "i-1", "type": "reviewSubmissionItems", "attributes": {"resolved": true}}})
        );

        let body = RequestBody::new(ReviewSubmissionItemUpdateRequest::new(
            "i-1",
            ReviewSubmissionItemUpdate::default(),
        ));
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"data": {"id": "i-1", "type": "reviewSubmissionItems"}})
        );
    }

    #[test]
    fn test_included_accessors() {
        let version: ReviewSubmissionItemIncluded =
            serde_json::from_value(json!({"type": "appStoreVersions", "id": "b7c1"})).unwrap();
        assert_eq!(version.app_store_version().unwrap().id, "b7c1");
        assert!(version.review_submission().is_none());

        let submission: ReviewSubmissionItemIncluded = serde_json::from_value(
            json!({"type": "reviewSubmissions", "id": "6f3b", "attributes": {"state": "IN_REVIEW"}}),
        )
        .unwrap();
        assert!(submission.app_store_version().is_none());
        assert_eq!(
            submission.review_submission().unwrap().state(),
            Some(crate::rest::resources::v1::ReviewSubmissionState::InReview)
        );

        let other: ReviewSubmissionItemIncluded =
            serde_json::from_value(json!({"type": "appEvents", "id": "e"})).unwrap();
        assert!(other.app_store_version().is_none());
        assert!(other.review_submission().is_none());
    }

    #[test]
    fn test_review_submission_item_path_constants() {
        let all = get_path(
            ReviewSubmissionItem::PATHS,
            ResourceOperation::All,
            &["review_submission_id"],
        )
        .unwrap();
        assert_eq!(all.template, "reviewSubmissions/{review_submission_id}/items");

        let delete = get_path(ReviewSubmissionItem::PATHS, ResourceOperation::Delete, &["id"]).unwrap();
        assert_eq!(delete.http_method, HttpMethod::Delete);
        assert_eq!(delete.template, "reviewSubmissionItems/{id}");

        assert!(get_path(ReviewSubmissionItem::PATHS, ResourceOperation::Find, &["id"]).is_none());
        assert_eq!(ReviewSubmissionItem::TYPE, "reviewSubmissionItems");
    }

    #[test]
    fn test_list_params_serialization() {
        let params = ReviewSubmissionItemListParams {
            include: vec!["appStoreVersion".to_string()],
            limit: Some(25),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({"include": ["appStoreVersion"], "limit": 25})
        );
    }
}
