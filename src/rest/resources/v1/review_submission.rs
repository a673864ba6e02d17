//! Review submission resource implementation.
//!
//! A review submission groups the items (app store versions, custom product
//! pages, in-app events, product page experiments) that are sent to App
//! Review together.
//!
//! # Resource-Specific Operations
//!
//! In addition to the [`RestResource`] operations, `ReviewSubmission`
//! provides:
//! - [`ReviewSubmission::list_for_app`] - List the submissions of one app
//! - [`ReviewSubmission::create`] - Open a submission for an app and platform
//! - [`ReviewSubmission::update`] - Change the `canceled` / `submitted` flags
//! - [`ReviewSubmission::submit`] / [`ReviewSubmission::cancel`] - Shorthands for `update`
//!
//! # Example
//!
//! ```rust,ignore
//! use app_store_connect::rest::RestResource;
//! use app_store_connect::rest::resources::v1::{
//!     Platform, ReviewSubmission, ReviewSubmissionItem, ReviewSubmissionState,
//!     ReviewSubmissionListParams,
//! };
//!
//! // Open a submission and add the version to it
//! let submission = ReviewSubmission::create(&client, Platform::Ios, "6446048795").await?;
//! ReviewSubmissionItem::create_for_app_store_version(&client, Some("b7c1"), &submission.data.id).await?;
//!
//! // Send it to App Review
//! let submitted = ReviewSubmission::submit(&client, &submission.data.id).await?;
//! assert_eq!(submitted.data.state(), Some(ReviewSubmissionState::WaitingForReview));
//!
//! // Page through the app's open submissions
//! let params = ReviewSubmissionListParams {
//!     filter_state: vec![ReviewSubmissionState::ReadyForReview],
//!     ..Default::default()
//! };
//! let mut page = ReviewSubmission::list_for_app(&client, "6446048795", Some(params)).await?;
//! loop {
//!     for submission in &page.data {
//!         println!("{} {:?}", submission.id, submission.state());
//!     }
//!     match ReviewSubmission::next_page(&client, &page).await? {
//!         Some(next) => page = next,
//!         None => break,
//!     }
//! }
//! ```

use std::ops::Deref;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::actor::Actor;
use super::app::App;
use super::app_store_version::AppStoreVersion;
use super::common::{wire_enum, Platform};
use super::review_submission_item::ReviewSubmissionItem;
use crate::clients::{HttpMethod, RestClient};
use crate::rest::{
    CollectionDocument, CollectionResponse, Included, IncludedResource, PagedRelationship,
    Relationship, RelationshipDeclaration, RequestBody, ResourceError, ResourceLinks,
    ResourceOperation, ResourcePath, RestResource, SingleDocument, SingleResponse,
};

wire_enum! {
    /// The state of a review submission.
    ///
    /// Values this crate does not know yet decode as
    /// [`ReviewSubmissionState::Unknown`] and are sent back unchanged.
    pub enum ReviewSubmissionState {
        /// Created and open for items, not yet submitted.
        ReadyForReview => "READY_FOR_REVIEW",
        /// Submitted and queued for App Review.
        WaitingForReview => "WAITING_FOR_REVIEW",
        /// Being reviewed.
        InReview => "IN_REVIEW",
        /// App Review found issues with at least one item.
        UnresolvedIssues => "UNRESOLVED_ISSUES",
        /// A cancellation is in progress.
        Canceling => "CANCELING",
        /// Review finished; results are being applied.
        Completing => "COMPLETING",
        /// Review finished.
        Complete => "COMPLETE",
    }
}

/// A review submission.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReviewSubmission {
    /// The submission's ID.
    pub id: String,

    /// Always `reviewSubmissions`.
    #[serde(rename = "type")]
    pub kind: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<ReviewSubmissionAttributes>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationships: Option<ReviewSubmissionRelationships>,

    #[serde(default)]
    pub links: ResourceLinks,
}

/// Attributes of a [`ReviewSubmission`].
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ReviewSubmissionAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<Platform>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<ReviewSubmissionState>,

    /// When the submission was sent to App Review.
    #[serde(
        default,
        with = "crate::rest::datetime::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub submitted_date: Option<DateTime<Utc>>,
}

/// Relationships of a [`ReviewSubmission`].
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ReviewSubmissionRelationships {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app: Option<Relationship>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_store_version_for_review: Option<Relationship>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<PagedRelationship>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated_by_actor: Option<Relationship>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub submitted_by_actor: Option<Relationship>,
}

impl ReviewSubmission {
    /// Returns the submission's state, if the response carried attributes.
    #[must_use]
    pub fn state(&self) -> Option<ReviewSubmissionState> {
        self.attributes.as_ref()?.state.clone()
    }

    /// Returns the submission's platform, if the response carried attributes.
    #[must_use]
    pub fn platform(&self) -> Option<Platform> {
        self.attributes.as_ref()?.platform.clone()
    }

    /// Returns when the submission was sent to App Review.
    #[must_use]
    pub fn submitted_date(&self) -> Option<DateTime<Utc>> {
        self.attributes.as_ref()?.submitted_date
    }

    /// Returns the ID of the app this submission belongs to, when the
    /// relationship data was returned.
    #[must_use]
    pub fn app_id(&self) -> Option<&str> {
        let app = self.relationships.as_ref()?.app.as_ref()?;
        app.data.as_ref().map(|data| data.id.as_str())
    }
}

/// A single review submission document.
pub type ReviewSubmissionResponse = SingleDocument<ReviewSubmission, ReviewSubmissionIncluded>;

/// A page of review submissions.
pub type ReviewSubmissionsResponse = CollectionDocument<ReviewSubmission, ReviewSubmissionIncluded>;

/// An element of a review submission document's `included` array.
///
/// Depending on `include=`, App Store Connect embeds the app, the app store
/// version for review, the items and the actors.
///
/// # Example
///
/// ```rust
/// use app_store_connect::rest::resources::v1::ReviewSubmissionIncluded;
///
/// let included: ReviewSubmissionIncluded = serde_json::from_str(
///     r#"{"type": "appStoreVersions", "id": "b7c1", "attributes": {"versionString": "2.4"}}"#,
/// ).unwrap();
///
/// assert_eq!(included.app_store_version().unwrap().version_string(), Some("2.4"));
/// assert!(included.app().is_none());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct ReviewSubmissionIncluded(Included);

impl ReviewSubmissionIncluded {
    /// Returns the [`App`], if this element is one.
    #[must_use]
    pub fn app(&self) -> Option<App> {
        self.0.extract()
    }

    /// Returns the [`AppStoreVersion`], if this element is one.
    #[must_use]
    pub fn app_store_version(&self) -> Option<AppStoreVersion> {
        self.0.extract()
    }

    /// Returns the [`ReviewSubmissionItem`], if this element is one.
    #[must_use]
    pub fn review_submission_item(&self) -> Option<ReviewSubmissionItem> {
        self.0.extract()
    }

    /// Returns the [`Actor`], if this element is one.
    #[must_use]
    pub fn actor(&self) -> Option<Actor> {
        self.0.extract()
    }
}

impl Deref for ReviewSubmissionIncluded {
    type Target = Included;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<Included> for ReviewSubmissionIncluded {
    fn as_ref(&self) -> &Included {
        &self.0
    }
}

impl From<Included> for ReviewSubmissionIncluded {
    fn from(included: Included) -> Self {
        Self(included)
    }
}

impl IncludedResource for ReviewSubmission {
    const TYPE: &'static str = "reviewSubmissions";
}

impl RestResource for ReviewSubmission {
    type Included = ReviewSubmissionIncluded;
    type FindParams = ReviewSubmissionFindParams;
    type AllParams = ReviewSubmissionListParams;

    const NAME: &'static str = "ReviewSubmission";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Find,
            &["id"],
            "reviewSubmissions/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::All,
            &[],
            "reviewSubmissions",
        ),
        ResourcePath::new(
            HttpMethod::Post,
            ResourceOperation::Create,
            &[],
            "reviewSubmissions",
        ),
        ResourcePath::new(
            HttpMethod::Patch,
            ResourceOperation::Update,
            &["id"],
            "reviewSubmissions/{id}",
        ),
    ];

    fn id(&self) -> &str {
        &self.id
    }
}

impl ReviewSubmission {
    /// Lists review submissions.
    ///
    /// App Store Connect requires `filter[app]`; prefer
    /// [`list_for_app`](Self::list_for_app) unless the params already set it.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn list(
        client: &RestClient,
        params: Option<ReviewSubmissionListParams>,
    ) -> Result<CollectionResponse<Self>, ResourceError> {
        Self::all(client, params).await
    }

    /// Lists the review submissions of one app.
    ///
    /// Sends `GET /v1/reviewSubmissions?filter[app]={app_id}` together with
    /// the other params. A `filter_app` already present in `params` is
    /// replaced.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn list_for_app(
        client: &RestClient,
        app_id: &str,
        params: Option<ReviewSubmissionListParams>,
    ) -> Result<CollectionResponse<Self>, ResourceError> {
        let params = ReviewSubmissionListParams {
            filter_app: vec![app_id.to_string()],
            ..params.unwrap_or_default()
        };
        Self::all(client, Some(params)).await
    }

    /// Creates a review submission for an app on a platform.
    ///
    /// Sends `POST /v1/reviewSubmissions`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::ValidationFailed`] if App Store Connect
    /// rejects the request, e.g. when the app already has an open
    /// submission for the platform.
    pub async fn create(
        client: &RestClient,
        platform: Platform,
        app_id: &str,
    ) -> Result<SingleResponse<Self>, ResourceError> {
        let body = RequestBody::new(ReviewSubmissionCreateRequest::new(platform, app_id));
        Self::create_with(client, &body).await
    }

    /// Updates a review submission.
    ///
    /// Sends `PATCH /v1/reviewSubmissions/{id}`. When neither flag is set,
    /// the request carries no `attributes` at all.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the submission doesn't exist.
    /// Returns [`ResourceError::ValidationFailed`] if the change is rejected.
    pub async fn update(
        client: &RestClient,
        id: &str,
        update: ReviewSubmissionUpdate,
    ) -> Result<SingleResponse<Self>, ResourceError> {
        let body = RequestBody::new(ReviewSubmissionUpdateRequest::new(id, update));
        Self::update_with(client, id, &body).await
    }

    /// Sends a review submission to App Review.
    ///
    /// # Errors
    ///
    /// See [`update`](Self::update).
    pub async fn submit(client: &RestClient, id: &str) -> Result<SingleResponse<Self>, ResourceError> {
        Self::update(client, id, ReviewSubmissionUpdate::submit()).await
    }

    /// Cancels a review submission.
    ///
    /// # Errors
    ///
    /// See [`update`](Self::update).
    pub async fn cancel(client: &RestClient, id: &str) -> Result<SingleResponse<Self>, ResourceError> {
        Self::update(client, id, ReviewSubmissionUpdate::cancel()).await
    }
}

/// Changes to a review submission.
///
/// Unset flags are left out of the request.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ReviewSubmissionUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canceled: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub submitted: Option<bool>,
}

impl ReviewSubmissionUpdate {
    /// An update that submits the submission.
    #[must_use]
    pub const fn submit() -> Self {
        Self {
            canceled: None,
            submitted: Some(true),
        }
    }

    /// An update that cancels the submission.
    #[must_use]
    pub const fn cancel() -> Self {
        Self {
            canceled: Some(true),
            submitted: None,
        }
    }

    /// Returns `true` if no flag is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.canceled.is_none() && self.submitted.is_none()
    }
}

#[derive(Debug, Serialize)]
struct ReviewSubmissionCreateRequest {
    #[serde(rename = "type")]
    kind: &'static str,
    attributes: ReviewSubmissionCreateAttributes,
    relationships: ReviewSubmissionCreateRelationships,
}

#[derive(Debug, Serialize)]
struct ReviewSubmissionCreateAttributes {
    platform: Platform,
}

#[derive(Debug, Serialize)]
struct ReviewSubmissionCreateRelationships {
    app: RelationshipDeclaration,
}

impl ReviewSubmissionCreateRequest {
    fn new(platform: Platform, app_id: &str) -> Self {
        Self {
            kind: ReviewSubmission::TYPE,
            attributes: ReviewSubmissionCreateAttributes { platform },
            relationships: ReviewSubmissionCreateRelationships {
                app: RelationshipDeclaration::new(App::TYPE, app_id),
            },
        }
    }
}

#[derive(Debug, Serialize)]
struct ReviewSubmissionUpdateRequest {
    id: String,
    #[serde(rename = "type")]
    kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    attributes: Option<ReviewSubmissionUpdate>,
}

impl ReviewSubmissionUpdateRequest {
    fn new(id: &str, update: ReviewSubmissionUpdate) -> Self {
        Self {
            id: id.to_string(),
            kind: ReviewSubmission::TYPE,
            attributes: (!update.is_empty()).then_some(update),
        }
    }
}

/// Parameters for listing review submissions.
///
/// Empty lists and `None` values are left out of the query. Lists are sent
/// comma-separated.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct ReviewSubmissionListParams {
    /// Item fields to return for included items.
    #[serde(rename = "fields[reviewSubmissionItems]", skip_serializing_if = "Vec::is_empty")]
    pub fields_review_submission_items: Vec<String>,

    /// Submission fields to return.
    #[serde(rename = "fields[reviewSubmissions]", skip_serializing_if = "Vec::is_empty")]
    pub fields_review_submissions: Vec<String>,

    /// App IDs to filter by. Required by App Store Connect.
    #[serde(rename = "filter[app]", skip_serializing_if = "Vec::is_empty")]
    pub filter_app: Vec<String>,

    #[serde(rename = "filter[platform]", skip_serializing_if = "Vec::is_empty")]
    pub filter_platform: Vec<Platform>,

    #[serde(rename = "filter[state]", skip_serializing_if = "Vec::is_empty")]
    pub filter_state: Vec<ReviewSubmissionState>,

    /// Relationships to embed (`app`, `appStoreVersionForReview`, `items`,
    /// `lastUpdatedByActor`, `submittedByActor`).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub include: Vec<String>,

    /// Page size (max 200).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    /// Maximum number of included items per submission (max 50).
    #[serde(rename = "limit[items]", skip_serializing_if = "Option::is_none")]
    pub limit_items: Option<u32>,
}

/// Parameters for reading a single review submission.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct ReviewSubmissionFindParams {
    #[serde(rename = "fields[reviewSubmissionItems]", skip_serializing_if = "Vec::is_empty")]
    pub fields_review_submission_items: Vec<String>,

    #[serde(rename = "fields[reviewSubmissions]", skip_serializing_if = "Vec::is_empty")]
    pub fields_review_submissions: Vec<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub include: Vec<String>,

    #[serde(rename = "limit[items]", skip_serializing_if = "Option::is_none")]
    pub limit_items: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::get_path;
    use serde_json::json;

    fn submission_json() -> serde_json::Value {
        json!({
            "type": "reviewSubmissions",
            "id": "6f3b0a2e",
            "attributes": {
                "platform": "IOS",
                "state": "WAITING_FOR_REVIEW",
                "submittedDate": "2024-03-11T18:42:07.551+0000"
            },
            "relationships": {
                "app": {"data": {"type": "apps", "id": "6446048795"}},
                "items": {
                    "links": {"related": "https://api.appstoreconnect.apple.com/v1/reviewSubmissions/6f3b0a2e/items"},
                    "meta": {"paging": {"total": 1, "limit": 10}},
                    "data": [{"type": "reviewSubmissionItems", "id": "i-1"}]
                }
            },
            "links": {"self": "https://api.appstoreconnect.apple.com/v1/reviewSubmissions/6f3b0a2e"}
        })
    }

    #[test]
    fn test_review_submission_deserialization() {
        let submission: ReviewSubmission = serde_json::from_value(submission_json()).unwrap();

        assert_eq!(submission.id(), "6f3b0a2e");
        assert_eq!(submission.kind, "reviewSubmissions");
        assert_eq!(submission.platform(), Some(Platform::Ios));
        assert_eq!(submission.state(), Some(ReviewSubmissionState::WaitingForReview));
        assert_eq!(submission.submitted_date().unwrap().timestamp(), 1_710_182_527);
        assert_eq!(submission.app_id(), Some("6446048795"));

        let items = submission.relationships.unwrap().items.unwrap();
        assert_eq!(items.data[0].id, "i-1");
    }

    #[test]
    fn test_review_submission_without_attributes() {
        let submission: ReviewSubmission = serde_json::from_value(json!({
            "type": "reviewSubmissions",
            "id": "x",
            "links": {}
        }))
        .unwrap();

        assert!(submission.state().is_none());
        assert!(submission.app_id().is_none());
    }

    #[test]
    fn test_review_submission_state_wire_values() {
        for (state, wire) in [
            (ReviewSubmissionState::ReadyForReview, "READY_FOR_REVIEW"),
            (ReviewSubmissionState::WaitingForReview, "WAITING_FOR_REVIEW"),
            (ReviewSubmissionState::InReview, "IN_REVIEW"),
            (ReviewSubmissionState::UnresolvedIssues, "UNRESOLVED_ISSUES"),
            (ReviewSubmissionState::Canceling, "CANCELING"),
            (ReviewSubmissionState::Completing, "COMPLETING"),
            (ReviewSubmissionState::Complete, "COMPLETE"),
        ] {
            assert_eq!(serde_json::to_value(state).unwrap(), wire);
        }

        let unknown: ReviewSubmissionState = serde_json::from_str("\"ON_HOLD\"").unwrap();
        assert_eq!(unknown, ReviewSubmissionState::Unknown("ON_HOLD".to_string()));
    }

    #[test]
    fn test_unknown_values_survive_reencoding() {
        let raw = json!({
            "type": "reviewSubmissions",
            "id": "6f3b",
            "attributes": {"platform": "WATCH_OS", "state": "ON_HOLD"},
            "links": {"self": "https://api.appstoreconnect.apple.com/v1/reviewSubmissions/6f3b"}
        });

        let submission: ReviewSubmission = serde_json::from_value(raw.clone()).unwrap();

        assert_eq!(submission.platform(), Some(Platform::Unknown("WATCH_OS".to_string())));
        assert_eq!(
            submission.state(),
            Some(ReviewSubmissionState::Unknown("ON_HOLD".to_string()))
        );
        assert_eq!(serde_json::to_value(&submission).unwrap(), raw);
    }

    #[test]
    fn test_included_version_keeps_unknown_platform() {
        let doc: ReviewSubmissionResponse = serde_json::from_value(json!({
            "data": {"type": "reviewSubmissions", "id": "6f3b"},
            "included": [{
                "type": "appStoreVersions",
                "id": "v-1",
                "attributes": {"platform": "WATCH_OS", "versionString": "1.0"}
            }]
        }))
        .unwrap();

        let version = doc.included[0].app_store_version().unwrap();
        let attributes = version.attributes.as_ref().unwrap();
        assert_eq!(attributes.platform, Some(Platform::Unknown("WATCH_OS".to_string())));
        assert_eq!(
            serde_json::to_value(&version).unwrap()["attributes"]["platform"],
            "WATCH_OS"
        );
    }

    #[test]
    fn test_create_request_body() {
        let body = RequestBody::new(ReviewSubmissionCreateRequest::new(Platform::Ios, "6446048795"));

        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({
                "data": {
                    "type": "reviewSubmissions",
                    "attributes": {"platform": "IOS"},
                    "relationships": {
                        "app": {"data": {"type": "apps", "id": "6446048795"}}
                    }
                }
            })
        );
    }

    #[test]
    fn test_update_request_omits_empty_attributes() {
        let body = RequestBody::new(ReviewSubmissionUpdateRequest::new(
            "6f3b",
            ReviewSubmissionUpdate::default(),
        ));

        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"data": {"id": "6f3b", "type": "reviewSubmissions"}})
        );
    }

    #[test]
    fn test_update_request_sends_only_set_flags() {
        let body = RequestBody::new(ReviewSubmissionUpdateRequest::new(
            "6f3b",
            ReviewSubmissionUpdate::submit(),
        ));
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"data": {"id": "6f3b", "type": "reviewSubmissions", "attributes": {"submitted": true}}})
        );

        let update = ReviewSubmissionUpdate {
            canceled: Some(false),
            submitted: Some(true),
        };
        let body = RequestBody::new(ReviewSubmissionUpdateRequest::new("6f3b", update));
        assert_eq!(
            serde_json::to_value(&body).unwrap()["data"]["attributes"],
            json!({"canceled": false, "submitted": true})
        );
    }

    #[test]
    fn test_list_params_serialize_to_bracketed_keys() {
        let params = ReviewSubmissionListParams {
            filter_app: vec!["6446048795".to_string()],
            filter_platform: vec![Platform::Ios, Platform::MacOs],
            filter_state: vec![ReviewSubmissionState::ReadyForReview],
            include: vec!["items".to_string()],
            limit: Some(10),
            limit_items: Some(5),
            ..Default::default()
        };

        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({
                "filter[app]": ["6446048795"],
                "filter[platform]": ["IOS", "MAC_OS"],
                "filter[state]": ["READY_FOR_REVIEW"],
                "include": ["items"],
                "limit": 10,
                "limit[items]": 5
            })
        );

        assert_eq!(
            serde_json::to_value(ReviewSubmissionListParams::default()).unwrap(),
            json!({})
        );
    }

    #[test]
    fn test_included_accessors_match_only_their_type() {
        let docs = [
            json!({"type": "apps", "id": "a", "attributes": {"name": "Atlas"}}),
            json!({"type": "appStoreVersions", "id": "v", "attributes": {"versionString": "2.4"}}),
            json!({"type": "reviewSubmissionItems", "id": "i", "attributes": {"state": "READY_FOR_REVIEW"}}),
            json!({"type": "actors", "id": "u", "attributes": {"actorType": "USER"}}),
            json!({"type": "appEvents", "id": "e"}),
        ];
        let included: Vec<ReviewSubmissionIncluded> = docs
            .iter()
            .map(|doc| serde_json::from_value(doc.clone()).unwrap())
            .collect();

        let present = |i: &ReviewSubmissionIncluded| {
            [
                i.app().is_some(),
                i.app_store_version().is_some(),
                i.review_submission_item().is_some(),
                i.actor().is_some(),
            ]
        };

        assert_eq!(present(&included[0]), [true, false, false, false]);
        assert_eq!(present(&included[1]), [false, true, false, false]);
        assert_eq!(present(&included[2]), [false, false, true, false]);
        assert_eq!(present(&included[3]), [false, false, false, true]);
        assert_eq!(present(&included[4]), [false, false, false, false]);

        assert_eq!(included[0].app().unwrap().name(), Some("Atlas"));
        assert_eq!(included[4].kind(), "appEvents");
    }

    #[test]
    fn test_response_document_exposes_included_of() {
        let doc: ReviewSubmissionResponse = serde_json::from_value(json!({
            "data": submission_json(),
            "included": [
                {"type": "apps", "id": "6446048795"},
                {"type": "reviewSubmissionItems", "id": "i-1"},
                {"type": "somethingNew", "id": "n"}
            ],
            "links": {"self": "https://api.appstoreconnect.apple.com/v1/reviewSubmissions/6f3b0a2e"}
        }))
        .unwrap();

        assert_eq!(doc.included.len(), 3);
        assert_eq!(doc.included_of::<App>().len(), 1);
        assert_eq!(doc.included_of::<ReviewSubmissionItem>()[0].id, "i-1");
        assert!(doc.included_of::<Actor>().is_empty());
    }

    #[test]
    fn test_review_submission_path_constants() {
        let find = get_path(ReviewSubmission::PATHS, ResourceOperation::Find, &["id"]).unwrap();
        assert_eq!(find.template, "reviewSubmissions/{id}");

        let all = get_path(ReviewSubmission::PATHS, ResourceOperation::All, &[]).unwrap();
        assert_eq!(all.template, "reviewSubmissions");

        let create = get_path(ReviewSubmission::PATHS, ResourceOperation::Create, &[]).unwrap();
        assert_eq!(create.http_method, HttpMethod::Post);

        let update = get_path(ReviewSubmission::PATHS, ResourceOperation::Update, &["id"]).unwrap();
        assert_eq!(update.http_method, HttpMethod::Patch);

        assert!(get_path(ReviewSubmission::PATHS, ResourceOperation::Delete, &["id"]).is_none());
        assert_eq!(ReviewSubmission::TYPE, "reviewSubmissions");
    }
}
