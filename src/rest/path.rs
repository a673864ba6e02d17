//! Path building infrastructure for REST resources.
//!
//! Resources can be reached through more than one path. Review submission
//! items, for example, are listed under their parent submission
//! (`reviewSubmissions/{review_submission_id}/items`) but updated and deleted
//! directly (`reviewSubmissionItems/{id}`).
//!
//! The path resolution system selects the most specific path that matches
//! the available IDs.
//!
//! # Example
//!
//! ```rust
//! use app_store_connect::rest::{ResourcePath, ResourceOperation, get_path, build_path};
//! use app_store_connect::clients::HttpMethod;
//! use std::collections::HashMap;
//!
//! const PATHS: &[ResourcePath] = &[
//!     ResourcePath::new(
//!         HttpMethod::Get,
//!         ResourceOperation::All,
//!         &["review_submission_id"],
//!         "reviewSubmissions/{review_submission_id}/items",
//!     ),
//!     ResourcePath::new(
//!         HttpMethod::Delete,
//!         ResourceOperation::Delete,
//!         &["id"],
//!         "reviewSubmissionItems/{id}",
//!     ),
//! ];
//!
//! let path = get_path(PATHS, ResourceOperation::All, &["review_submission_id"]).unwrap();
//!
//! let mut ids = HashMap::new();
//! ids.insert("review_submission_id", "6f3b");
//! assert_eq!(build_path(path.template, &ids), "reviewSubmissions/6f3b/items");
//! ```

use crate::clients::HttpMethod;
use std::collections::HashMap;
use std::fmt::Display;

/// Operations that can be performed on a REST resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceOperation {
    /// Find a single resource by ID (GET /resources/{id}).
    Find,
    /// List resources (GET /resources).
    All,
    /// Create a new resource (POST /resources).
    Create,
    /// Update an existing resource (PATCH /resources/{id}).
    Update,
    /// Delete a resource (DELETE /resources/{id}).
    Delete,
}

impl ResourceOperation {
    /// Returns the default HTTP method for this operation.
    #[must_use]
    pub const fn default_http_method(&self) -> HttpMethod {
        match self {
            Self::Find | Self::All => HttpMethod::Get,
            Self::Create => HttpMethod::Post,
            Self::Update => HttpMethod::Patch,
            Self::Delete => HttpMethod::Delete,
        }
    }

    /// Returns the operation name as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Find => "find",
            Self::All => "all",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

/// A path configuration for a REST resource operation.
///
/// Templates use `{id_name}` placeholders for ID interpolation.
///
/// # Example
///
/// ```rust
/// use app_store_connect::rest::{ResourcePath, ResourceOperation};
/// use app_store_connect::clients::HttpMethod;
///
/// const SUBMISSION_FIND: ResourcePath = ResourcePath::new(
///     HttpMethod::Get,
///     ResourceOperation::Find,
///     &["id"],
///     "reviewSubmissions/{id}",
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourcePath {
    /// The HTTP method for this path.
    pub http_method: HttpMethod,
    /// The operation this path is used for.
    pub operation: ResourceOperation,
    /// Required ID parameters in order (e.g., `["review_submission_id"]`).
    pub ids: &'static [&'static str],
    /// The URL template with `{id}` placeholders.
    pub template: &'static str,
}

impl ResourcePath {
    /// Creates a new `ResourcePath`.
    #[must_use]
    pub const fn new(
        http_method: HttpMethod,
        operation: ResourceOperation,
        ids: &'static [&'static str],
        template: &'static str,
    ) -> Self {
        Self {
            http_method,
            operation,
            ids,
            template,
        }
    }

    /// Returns the number of required IDs for this path.
    #[must_use]
    pub const fn id_count(&self) -> usize {
        self.ids.len()
    }

    /// Checks if all required IDs are available.
    #[must_use]
    pub fn matches_ids(&self, available_ids: &[&str]) -> bool {
        self.ids.iter().all(|id| available_ids.contains(id))
    }
}

/// Selects the best matching path for an operation.
///
/// Among the paths for `operation` whose required IDs are all available,
/// the one with the most IDs wins.
#[must_use]
pub fn get_path<'a>(
    paths: &'a [ResourcePath],
    operation: ResourceOperation,
    available_ids: &[&str],
) -> Option<&'a ResourcePath> {
    paths
        .iter()
        .filter(|p| p.operation == operation)
        .filter(|p| p.matches_ids(available_ids))
        .max_by_key(|p| p.id_count())
}

/// Builds a URL path from a template by interpolating IDs.
///
/// Values are percent-encoded so an ID can never introduce extra path
/// segments or a query string.
///
/// # Example
///
/// ```rust
/// use app_store_connect::rest::build_path;
/// use std::collections::HashMap;
///
/// let mut ids = HashMap::new();
/// ids.insert("id", "a b/c");
///
/// assert_eq!(build_path("reviewSubmissions/{id}", &ids), "reviewSubmissions/a%20b%2Fc");
/// ```
#[must_use]
#[allow(clippy::implicit_hasher)]
pub fn build_path<V: Display>(template: &str, ids: &HashMap<&str, V>) -> String {
    let mut result = template.to_string();

    for (key, value) in ids {
        let placeholder = format!("{{{key}}}");
        result = result.replace(&placeholder, &urlencoding::encode(&value.to_string()));
    }

    result
}

// Verify types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceOperation>();
    assert_send_sync::<ResourcePath>();
};
