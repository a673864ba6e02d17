//! REST resource infrastructure for the App Store Connect API.
//!
//! This module provides the foundations every resource binding builds on:
//!
//! - **[`RestResource`] trait**: Standard read, list, create, update and delete operations
//! - **JSON:API documents**: [`SingleDocument`], [`CollectionDocument`] and their links, relationships and paging
//! - **[`Included`] decoding**: Typed access to the heterogeneous `included` array
//! - **[`ResourceResponse<T>`]**: A Deref-based wrapper carrying rate limit and request ID
//! - **Path building**: Multiple path support for nested resources
//! - **[`ResourceError`]**: Semantic error types for resource operations
//!
//! Individual resources live in the [`resources`] submodule.
//!
//! # Example
//!
//! ```rust,ignore
//! use app_store_connect::{AscConfig, RestClient};
//! use app_store_connect::rest::RestResource;
//! use app_store_connect::rest::resources::v1::{App, ReviewSubmission, ReviewSubmissionFindParams};
//!
//! let client = RestClient::new(&config)?;
//!
//! let params = ReviewSubmissionFindParams {
//!     include: vec!["app".to_string(), "items".to_string()],
//!     ..Default::default()
//! };
//! let response = ReviewSubmission::find(&client, "6f3b", Some(params)).await?;
//!
//! println!("state: {:?}", response.data.state());
//! for app in response.included_of::<App>() {
//!     println!("app: {}", app.id);
//! }
//! ```

pub mod datetime;
mod document;
mod errors;
mod included;
mod path;
mod resource;
mod response;

pub mod resources;

pub use document::{
    CollectionDocument, DocumentLinks, PagedDocumentLinks, PagedRelationship, Paging,
    PagingInformation, Relationship, RelationshipData, RelationshipDeclaration, RelationshipLinks,
    RequestBody, ResourceLinks, SingleDocument,
};
pub use errors::ResourceError;
pub use included::{Included, IncludedResource};
pub use path::{build_path, get_path, ResourceOperation, ResourcePath};
pub use resource::{CollectionResponse, RestResource, SingleResponse};
pub use response::ResourceResponse;
