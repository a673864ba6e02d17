//! Authentication for the App Store Connect API.
//!
//! App Store Connect authenticates every request with a short-lived JSON Web
//! Token signed with the team's API key (ES256). This module signs and caches
//! those tokens.
//!
//! # Overview
//!
//! - [`TokenSigner`]: Signs bearer tokens and reuses them until close to expiry
//! - [`AuthToken`]: A signed token with its expiry time
//! - [`Claims`]: The JWT claims App Store Connect expects
//! - [`AuthError`]: Signing failures
//!
//! # Example
//!
//! ```rust,ignore
//! use app_store_connect::auth::TokenSigner;
//!
//! let signer = TokenSigner::new(&config);
//! let token = signer.bearer_token()?;
//! // Authorization: Bearer <token>
//! ```

mod error;
mod token;

pub use error::AuthError;
pub use token::{AuthToken, Claims, TokenSigner, AUDIENCE, REFRESH_MARGIN};
