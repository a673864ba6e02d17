//! REST resources under `/v1`.
//!
//! # Available Resources
//!
//! ## Review Submission Resource
//!
//! - [`ReviewSubmission`] - A request to have one or more items reviewed
//! - [`ReviewSubmissionState`] - Where the submission is in the review process
//! - [`ReviewSubmissionUpdate`] - Flags for submitting or canceling
//! - [`ReviewSubmissionListParams`] - Parameters for listing submissions
//! - [`ReviewSubmissionFindParams`] - Parameters for finding a single submission
//!
//! The ReviewSubmission resource also provides resource-specific operations:
//! - `ReviewSubmission::submit()` - Send the submission to App Review
//! - `ReviewSubmission::cancel()` - Withdraw the submission
//!
//! ## Review Submission Item Resource
//!
//! - [`ReviewSubmissionItem`] - One reviewable thing in a submission
//! - [`ReviewSubmissionItemState`] - The review state of an item
//! - [`ReviewSubmissionItemTarget`] - What a new item points at
//! - [`ReviewSubmissionItemUpdate`] - Flags for removing or resolving
//! - [`ReviewSubmissionItemListParams`] - Parameters for listing items
//!
//! Items use two path patterns:
//! - Nested: `/reviewSubmissions/{review_submission_id}/items` (listing)
//! - Standalone: `/reviewSubmissionItems/{id}` (create, update, delete)
//!
//! ## Included Resources
//!
//! These only appear in `included` arrays:
//!
//! - [`App`]
//! - [`AppStoreVersion`]
//! - [`Actor`]

mod actor;
mod app;
mod app_store_version;
pub mod common;
mod review_submission;
mod review_submission_item;

pub use common::Platform;

pub use actor::{Actor, ActorAttributes};
pub use app::{App, AppAttributes};
pub use app_store_version::{AppStoreVersion, AppStoreVersionAttributes};

pub use review_submission::{
    ReviewSubmission, ReviewSubmissionAttributes, ReviewSubmissionFindParams,
    ReviewSubmissionIncluded, ReviewSubmissionListParams, ReviewSubmissionRelationships,
    ReviewSubmissionResponse, ReviewSubmissionState, ReviewSubmissionUpdate,
    ReviewSubmissionsResponse,
};

pub use review_submission_item::{
    ReviewSubmissionItem, ReviewSubmissionItemAttributes, ReviewSubmissionItemIncluded,
    ReviewSubmissionItemListParams, ReviewSubmissionItemRelationships,
    ReviewSubmissionItemResponse, ReviewSubmissionItemState, ReviewSubmissionItemTarget,
    ReviewSubmissionItemUpdate, ReviewSubmissionItemsResponse,
};
