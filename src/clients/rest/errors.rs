//! REST-specific error types for the App Store Connect client.
//!
//! - [`RestError::InvalidPath`]: When a REST API path fails validation
//! - [`RestError::Http`]: Wraps underlying HTTP errors
//!
//! # Example
//!
//! ```rust,ignore
//! use app_store_connect::clients::rest::RestError;
//!
//! match client.get("reviewSubmissions", None).await {
//!     Ok(response) => println!("Submissions: {}", response.body),
//!     Err(RestError::InvalidPath { path }) => println!("Invalid path: {path}"),
//!     Err(RestError::Http(e)) => println!("HTTP error: {e}"),
//! }
//! ```

use crate::clients::HttpError;
use thiserror::Error;

/// Error type for REST API operations.
#[derive(Debug, Error)]
pub enum RestError {
    /// The REST API path is invalid (empty after normalization).
    #[error("Invalid REST API path: {path}")]
    InvalidPath {
        /// The invalid path that was provided.
        path: String,
    },

    /// An HTTP-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),
}
