//! REST Resource trait for App Store Connect resources.
//!
//! This module defines the [`RestResource`] trait, which provides a
//! standardized interface for JSON:API resources. Resources that implement
//! it gain `find()`, `all()`, `all_with_parent()`, `next_page()`,
//! `create_with()`, `update_with()` and `delete_by_id()`.
//!
//! # Implementing a Resource
//!
//! 1. Define the resource struct with serde derives, including `id`, `type`,
//!    `attributes`, `relationships` and `links`
//! 2. Implement [`IncludedResource`](crate::rest::IncludedResource) for its
//!    `type` tag, then `RestResource` with its paths, parameter types and the
//!    type its `included` array decodes into
//! 3. Add typed convenience methods that build request bodies and call the
//!    provided operations
//!
//! # Example
//!
//! ```rust,ignore
//! use app_store_connect::rest::{RestResource, ResourcePath, ResourceOperation};
//! use app_store_connect::clients::HttpMethod;
//!
//! impl RestResource for ReviewSubmissionItem {
//!     type Included = ReviewSubmissionItemIncluded;
//!     type FindParams = ();
//!     type AllParams = ReviewSubmissionItemListParams;
//!
//!     const NAME: &'static str = "ReviewSubmissionItem";
//!     const PATHS: &'static [ResourcePath] = &[
//!         ResourcePath::new(HttpMethod::Get, ResourceOperation::All, &["review_submission_id"], "reviewSubmissions/{review_submission_id}/items"),
//!         ResourcePath::new(HttpMethod::Post, ResourceOperation::Create, &[], "reviewSubmissionItems"),
//!         ResourcePath::new(HttpMethod::Patch, ResourceOperation::Update, &["id"], "reviewSubmissionItems/{id}"),
//!         ResourcePath::new(HttpMethod::Delete, ResourceOperation::Delete, &["id"], "reviewSubmissionItems/{id}"),
//!     ];
//!
//!     fn id(&self) -> &str {
//!         &self.id
//!     }
//! }
//! ```

use std::collections::HashMap;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::clients::{HttpResponse, RestClient};
use crate::rest::{
    build_path, get_path, CollectionDocument, IncludedResource, ResourceError, ResourceOperation,
    ResourcePath, ResourceResponse, SingleDocument,
};

/// A single-resource document of `R`.
pub type SingleResponse<R> = ResourceResponse<SingleDocument<R, <R as RestResource>::Included>>;

/// One page of `R` resources.
pub type CollectionResponse<R> =
    ResourceResponse<CollectionDocument<R, <R as RestResource>::Included>>;

/// A JSON:API resource that can be read, listed, created, updated and deleted.
///
/// The `type` tag comes from the [`IncludedResource`] supertrait, since any
/// resource may also show up in another document's `included` array.
/// Implementors define the resource's paths, name and parameter types, and
/// get default implementations for every operation. An operation without a
/// matching path fails with [`ResourceError::PathResolutionFailed`].
///
/// # Associated Types
///
/// - `Included`: What each element of the `included` array decodes into
/// - `FindParams`: Query parameters for `find()` (use `()` if none)
/// - `AllParams`: Query parameters for `all()` (filters, fields, limits)
#[allow(async_fn_in_trait)]
pub trait RestResource:
    IncludedResource + Serialize + DeserializeOwned + Clone + Send + Sync + Sized
{
    /// Element type of the `included` array.
    type Included: DeserializeOwned + Send + Sync;

    /// Parameters for `find()` operations.
    type FindParams: Serialize + Default + Send + Sync;

    /// Parameters for `all()` operations.
    type AllParams: Serialize + Default + Send + Sync;

    /// The resource name used in errors and logs (e.g., `ReviewSubmission`).
    const NAME: &'static str;

    /// Available paths for this resource.
    const PATHS: &'static [ResourcePath];

    /// Returns the resource's ID.
    fn id(&self) -> &str;

    /// Reads a single resource by ID.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the resource doesn't exist.
    /// Returns [`ResourceError::PathResolutionFailed`] if no valid path matches.
    async fn find(
        client: &RestClient,
        id: &str,
        params: Option<Self::FindParams>,
    ) -> Result<SingleResponse<Self>, ResourceError> {
        let path = resolve_path::<Self>(ResourceOperation::Find, &[("id", id)])?;
        let query = params.map(|p| serialize_to_query(&p)).transpose()?;

        let response = client
            .get(&path, query)
            .await
            .map_err(|e| ResourceError::from_rest_error(e, Self::NAME, Some(id)))?;

        ResourceResponse::from_http_response(response, Self::NAME)
    }

    /// Lists resources matching the given parameters.
    ///
    /// Returns the first page. Use [`next_page`](Self::next_page) to follow
    /// `links.next`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::PathResolutionFailed`] if no valid path matches.
    async fn all(
        client: &RestClient,
        params: Option<Self::AllParams>,
    ) -> Result<CollectionResponse<Self>, ResourceError> {
        let path = resolve_path::<Self>(ResourceOperation::All, &[])?;
        let query = params.map(|p| serialize_to_query(&p)).transpose()?;

        let response = client
            .get(&path, query)
            .await
            .map_err(|e| ResourceError::from_rest_error(e, Self::NAME, None))?;

        ResourceResponse::from_http_response(response, Self::NAME)
    }

    /// Lists resources under a parent resource.
    ///
    /// # Arguments
    ///
    /// * `parent_id_name` - The placeholder name in the path template (e.g., `review_submission_id`)
    /// * `parent_id` - The parent resource ID
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the parent doesn't exist.
    /// Returns [`ResourceError::PathResolutionFailed`] if no valid path matches.
    async fn all_with_parent(
        client: &RestClient,
        parent_id_name: &str,
        parent_id: &str,
        params: Option<Self::AllParams>,
    ) -> Result<CollectionResponse<Self>, ResourceError> {
        let path = resolve_path::<Self>(ResourceOperation::All, &[(parent_id_name, parent_id)])?;
        let query = params.map(|p| serialize_to_query(&p)).transpose()?;

        let response = client
            .get(&path, query)
            .await
            .map_err(|e| ResourceError::from_rest_error(e, Self::NAME, Some(parent_id)))?;

        ResourceResponse::from_http_response(response, Self::NAME)
    }

    /// Fetches the page after `page` by following its `links.next`.
    ///
    /// Returns `Ok(None)` on the last page.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Rest`] if the link points outside the API
    /// host, or any error the request itself produces.
    async fn next_page(
        client: &RestClient,
        page: &CollectionDocument<Self, Self::Included>,
    ) -> Result<Option<CollectionResponse<Self>>, ResourceError> {
        let Some(url) = page.next_url() else {
            return Ok(None);
        };

        let response = client
            .get_url(url)
            .await
            .map_err(|e| ResourceError::from_rest_error(e, Self::NAME, None))?;

        ResourceResponse::from_http_response(response, Self::NAME).map(Some)
    }

    /// Creates a resource from a `{ "data": ... }` request body.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::ValidationFailed`] if App Store Connect
    /// rejects the payload (409 or 422).
    async fn create_with<B: Serialize + Sync>(
        client: &RestClient,
        body: &B,
    ) -> Result<SingleResponse<Self>, ResourceError> {
        let path = resolve_path::<Self>(ResourceOperation::Create, &[])?;
        let body = serialize_body(body)?;

        let response = client
            .post(&path, body, None)
            .await
            .map_err(|e| ResourceError::from_rest_error(e, Self::NAME, None))?;

        ResourceResponse::from_http_response(response, Self::NAME)
    }

    /// Updates a resource from a `{ "data": ... }` request body.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the resource doesn't exist.
    /// Returns [`ResourceError::ValidationFailed`] if the update is rejected.
    async fn update_with<B: Serialize + Sync>(
        client: &RestClient,
        id: &str,
        body: &B,
    ) -> Result<SingleResponse<Self>, ResourceError> {
        let path = resolve_path::<Self>(ResourceOperation::Update, &[("id", id)])?;
        let body = serialize_body(body)?;

        let response = client
            .patch(&path, body, None)
            .await
            .map_err(|e| ResourceError::from_rest_error(e, Self::NAME, Some(id)))?;

        ResourceResponse::from_http_response(response, Self::NAME)
    }

    /// Deletes a resource by ID.
    ///
    /// The returned response carries no data, only the rate limit and
    /// request ID.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the resource doesn't exist.
    async fn delete_by_id(
        client: &RestClient,
        id: &str,
    ) -> Result<ResourceResponse<()>, ResourceError> {
        let path = resolve_path::<Self>(ResourceOperation::Delete, &[("id", id)])?;

        let response = client
            .delete(&path, None)
            .await
            .map_err(|e| ResourceError::from_rest_error(e, Self::NAME, Some(id)))?;

        Ok(empty_response(response))
    }
}

/// Selects the path for `operation` and interpolates the given IDs.
fn resolve_path<R: RestResource>(
    operation: ResourceOperation,
    ids: &[(&str, &str)],
) -> Result<String, ResourceError> {
    let ids: HashMap<&str, &str> = ids.iter().copied().collect();
    let available_ids: Vec<&str> = ids.keys().copied().collect();

    let path = get_path(R::PATHS, operation, &available_ids).ok_or(
        ResourceError::PathResolutionFailed {
            resource: R::NAME,
            operation: operation.as_str(),
        },
    )?;

    Ok(build_path(path.template, &ids))
}

fn empty_response(response: HttpResponse) -> ResourceResponse<()> {
    let request_id = response.request_id().map(ToString::to_string);
    ResourceResponse::new((), response.rate_limit, request_id)
}

fn serialize_body<B: Serialize>(body: &B) -> Result<Value, ResourceError> {
    serde_json::to_value(body).map_err(|e| ResourceError::InvalidParams {
        message: format!("failed to serialize request body: {e}"),
    })
}

/// Serializes a params struct to a query parameter map.
///
/// Arrays become comma-separated lists, matching App Store Connect's
/// `filter[state]=READY_FOR_REVIEW,IN_REVIEW` convention. `null` values and
/// empty arrays are skipped.
pub(crate) fn serialize_to_query<T: Serialize>(
    params: &T,
) -> Result<HashMap<String, String>, ResourceError> {
    let value = serde_json::to_value(params).map_err(|e| ResourceError::InvalidParams {
        message: format!("failed to serialize params: {e}"),
    })?;

    let mut query = HashMap::new();

    match value {
        Value::Object(map) => {
            for (key, val) in map {
                match val {
                    Value::Null => {}
                    Value::String(s) => {
                        query.insert(key, s);
                    }
                    Value::Number(n) => {
                        query.insert(key, n.to_string());
                    }
                    Value::Bool(b) => {
                        query.insert(key, b.to_string());
                    }
                    Value::Array(arr) => {
                        let values: Vec<String> = arr
                            .iter()
                            .filter_map(|v| match v {
                                Value::String(s) => Some(s.clone()),
                                Value::Number(n) => Some(n.to_string()),
                                Value::Bool(b) => Some(b.to_string()),
                                _ => None,
                            })
                            .collect();
                        if !values.is_empty() {
                            query.insert(key, values.join(","));
                        }
                    }
                    Value::Object(_) => {
                        return Err(ResourceError::InvalidParams {
                            message: format!("parameter '{key}' must not be an object"),
                        });
                    }
                }
            }
        }
        Value::Null => {}
        other => {
            return Err(ResourceError::InvalidParams {
                message: format!("params must serialize to an object, got {other}"),
            });
        }
    }

    Ok(query)
}
