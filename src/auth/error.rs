//! Authentication error types.

use thiserror::Error;

/// Errors that can occur while producing a bearer token.
///
/// # Example
///
/// ```rust
/// use app_store_connect::auth::AuthError;
///
/// fn describe(err: &AuthError) -> String {
///     match err {
///         AuthError::Signing(e) => format!("could not sign token: {e}"),
///     }
/// }
/// ```
#[derive(Debug, Error)]
pub enum AuthError {
    /// The JWT could not be signed with the configured key.
    #[error("Failed to sign App Store Connect token: {0}")]
    Signing(#[from] jsonwebtoken::errors::Error),
}

// Verify AuthError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AuthError>();
};
