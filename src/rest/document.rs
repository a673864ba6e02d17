//! JSON:API document types shared by every App Store Connect resource.
//!
//! App Store Connect wraps every response in a document:
//!
//! ```json
//! {
//!   "data": { "type": "reviewSubmissions", "id": "...", "attributes": {}, "relationships": {} },
//!   "included": [ { "type": "apps", "id": "..." } ],
//!   "links": { "self": "..." }
//! }
//! ```
//!
//! Collections carry paged links and paging metadata. Requests wrap their
//! payload the same way in a [`RequestBody`].

use serde::{Deserialize, Serialize};

use crate::rest::included::{Included, IncludedResource};

/// Link to the resource itself.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceLinks {
    /// URL of this resource.
    #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
    pub self_link: Option<String>,
}

/// Links of a single-resource document.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentLinks {
    /// URL that produced this document.
    #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
    pub self_link: Option<String>,
}

/// Links of a collection document.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagedDocumentLinks {
    /// URL of the first page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first: Option<String>,
    /// URL of the next page; absent on the last page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    /// URL that produced this page.
    #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
    pub self_link: Option<String>,
}

/// Paging details of a collection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paging {
    /// Total number of resources across all pages.
    #[serde(default)]
    pub total: u64,
    /// Page size.
    #[serde(default)]
    pub limit: u32,
}

/// The `meta` object of a collection document.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagingInformation {
    /// Paging details.
    pub paging: Paging,
}

/// Type and ID of a related resource.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RelationshipData {
    /// The related resource's ID.
    pub id: String,
    /// The related resource's type (e.g., `apps`).
    #[serde(rename = "type")]
    pub kind: String,
}

impl RelationshipData {
    /// Creates a reference to a resource.
    #[must_use]
    pub fn new(kind: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
        }
    }

    /// Creates a reference to a resource of type `T`.
    #[must_use]
    pub fn of<T: IncludedResource>(id: impl Into<String>) -> Self {
        Self::new(T::TYPE, id)
    }
}

/// Links of a relationship.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationshipLinks {
    /// URL of the related resource(s).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related: Option<String>,
    /// URL of the relationship itself.
    #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
    pub self_link: Option<String>,
}

/// A to-one relationship.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relationship {
    /// The related resource, when returned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<RelationshipData>,
    /// Relationship links.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<RelationshipLinks>,
}

/// A to-many relationship.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagedRelationship {
    /// The related resources returned so far (bounded by `limit[...]`).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub data: Vec<RelationshipData>,
    /// Relationship links.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<RelationshipLinks>,
    /// Paging details of the relationship.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<PagingInformation>,
}

/// A relationship in a create request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationshipDeclaration {
    /// The referenced resource.
    pub data: RelationshipData,
}

impl RelationshipDeclaration {
    /// Declares a relationship to the resource `kind`/`id`.
    #[must_use]
    pub fn new(kind: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            data: RelationshipData::new(kind, id),
        }
    }
}

/// The `{ "data": ... }` envelope of create and update requests.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestBody<T> {
    /// The request payload.
    pub data: T,
}

impl<T> RequestBody<T> {
    /// Wraps a payload.
    pub const fn new(data: T) -> Self {
        Self { data }
    }
}

/// A document holding one resource.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "R: Deserialize<'de>, I: Deserialize<'de>"))]
pub struct SingleDocument<R, I = Included> {
    /// The resource.
    pub data: R,
    /// Related resources requested with `include`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub included: Vec<I>,
    /// Document links.
    #[serde(default)]
    pub links: DocumentLinks,
}

/// A document holding one page of resources.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "R: Deserialize<'de>, I: Deserialize<'de>"))]
pub struct CollectionDocument<R, I = Included> {
    /// The resources on this page.
    pub data: Vec<R>,
    /// Related resources requested with `include`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub included: Vec<I>,
    /// Paged links.
    #[serde(default)]
    pub links: PagedDocumentLinks,
    /// Paging metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<PagingInformation>,
}

impl<R, I> CollectionDocument<R, I> {
    /// Returns the URL of the next page, if any.
    #[must_use]
    pub fn next_url(&self) -> Option<&str> {
        self.links.next.as_deref().filter(|url| !url.is_empty())
    }

    /// Returns `true` if a next page exists.
    #[must_use]
    pub fn has_next_page(&self) -> bool {
        self.next_url().is_some()
    }

    /// Returns the total number of resources, when the API reported it.
    #[must_use]
    pub fn total(&self) -> Option<u64> {
        self.meta.map(|meta| meta.paging.total)
    }
}

impl<R, I: AsRef<Included>> SingleDocument<R, I> {
    /// Decodes every included resource of type `T`, skipping the rest.
    #[must_use]
    pub fn included_of<T: IncludedResource>(&self) -> Vec<T> {
        self.included
            .iter()
            .filter_map(|item| item.as_ref().extract())
            .collect()
    }
}

impl<R, I: AsRef<Included>> CollectionDocument<R, I> {
    /// Decodes every included resource of type `T`, skipping the rest.
    #[must_use]
    pub fn included_of<T: IncludedResource>(&self) -> Vec<T> {
        self.included
            .iter()
            .filter_map(|item| item.as_ref().extract())
            .collect()
    }
}
