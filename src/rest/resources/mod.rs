//! REST resource implementations, organized by API path version.
//!
//! ```text
//! resources/
//!   mod.rs           <- This file (re-exports v1)
//!   v1/
//!     mod.rs         <- Resources served under /v1
//! ```
//!
//! # Using Resources
//!
//! ```rust,ignore
//! use app_store_connect::rest::resources::{ReviewSubmission, ReviewSubmissionListParams};
//! use app_store_connect::rest::RestResource;
//!
//! let params = ReviewSubmissionListParams {
//!     filter_app: vec!["1234567890".to_string()],
//!     include: vec!["appStoreVersionForReview".to_string()],
//!     ..Default::default()
//! };
//! let page = ReviewSubmission::list(&client, Some(params)).await?;
//!
//! for submission in &page.data {
//!     println!("{} {:?}", submission.id, submission.state());
//! }
//! ```

pub mod v1;

pub use v1::*;
