//! Bearer token signing and caching.

use std::fmt;
use std::sync::{Mutex, PoisonError};

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{encode, Algorithm, Header};
use serde::{Deserialize, Serialize};

use crate::auth::AuthError;
use crate::config::{AscConfig, IssuerId, KeyId, PrivateKey};

/// The `aud` claim App Store Connect requires.
pub const AUDIENCE: &str = "appstoreconnect-v1";

/// A cached token is re-signed once it is this close to expiring.
pub const REFRESH_MARGIN: std::time::Duration = std::time::Duration::from_secs(60);

/// Claims carried by an App Store Connect bearer token.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Issuer ID of the team owning the key.
    pub iss: String,
    /// Issued-at time (Unix seconds).
    pub iat: i64,
    /// Expiry time (Unix seconds).
    pub exp: i64,
    /// Always [`AUDIENCE`].
    pub aud: String,
}

/// A signed bearer token.
///
/// The `Debug` implementation masks the token value.
#[derive(Clone)]
pub struct AuthToken {
    value: String,
    expires_at: DateTime<Utc>,
}

impl AuthToken {
    /// Returns the encoded JWT.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Returns when the token stops being accepted.
    #[must_use]
    pub const fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    /// Returns `true` if the token has more than [`REFRESH_MARGIN`] left at `now`.
    #[must_use]
    pub fn is_fresh_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at - now > margin()
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthToken")
            .field("value", &"*****")
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

fn margin() -> Duration {
    Duration::seconds(i64::try_from(REFRESH_MARGIN.as_secs()).unwrap_or(60))
}

/// Signs App Store Connect bearer tokens.
///
/// Tokens are cached and reused until they are within [`REFRESH_MARGIN`] of
/// expiry. A signer configured with a lifetime shorter than the margin signs
/// a fresh token for every request.
///
/// # Thread Safety
///
/// The cache sits behind a [`Mutex`], so a signer can be shared by every
/// request of a client.
pub struct TokenSigner {
    issuer_id: IssuerId,
    key_id: KeyId,
    key: PrivateKey,
    lifetime: Duration,
    cached: Mutex<Option<AuthToken>>,
}

impl TokenSigner {
    /// Creates a signer for the key and lifetime in `config`.
    #[must_use]
    pub fn new(config: &AscConfig) -> Self {
        let lifetime = i64::try_from(config.token_lifetime().as_secs()).unwrap_or(20 * 60);
        Self {
            issuer_id: config.issuer_id().clone(),
            key_id: config.key_id().clone(),
            key: config.private_key().clone(),
            lifetime: Duration::seconds(lifetime),
            cached: Mutex::new(None),
        }
    }

    /// Returns a valid token for an `Authorization: Bearer` header.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Signing`] if a new token was needed and could not
    /// be signed.
    pub fn bearer_token(&self) -> Result<String, AuthError> {
        self.token_at(Utc::now()).map(|token| token.value)
    }

    /// Returns the cached token if it is still fresh at `now`, signing a new
    /// one otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Signing`] if signing fails.
    pub fn token_at(&self, now: DateTime<Utc>) -> Result<AuthToken, AuthError> {
        let mut cached = self.cached.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(token) = cached.as_ref().filter(|token| token.is_fresh_at(now)) {
            return Ok(token.clone());
        }

        let token = self.sign(now)?;
        *cached = Some(token.clone());
        Ok(token)
    }

    /// Signs a new token issued at `now`, bypassing the cache.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Signing`] if signing fails.
    pub fn sign(&self, now: DateTime<Utc>) -> Result<AuthToken, AuthError> {
        let expires_at = now + self.lifetime;
        let claims = Claims {
            iss: self.issuer_id.as_ref().to_string(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
            aud: AUDIENCE.to_string(),
        };

        let mut header = Header::new(Algorithm::ES256);
        header.kid = Some(self.key_id.as_ref().to_string());

        let value = encode(&header, &claims, self.key.encoding_key())?;
        tracing::debug!(
            key_id = self.key_id.as_ref(),
            expires_at = %expires_at,
            "signed App Store Connect token"
        );

        Ok(AuthToken { value, expires_at })
    }
}

impl fmt::Debug for TokenSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenSigner")
            .field("issuer_id", &self.issuer_id)
            .field("key_id", &self.key_id)
            .field("lifetime", &self.lifetime)
            .finish_non_exhaustive()
    }
}

// Verify TokenSigner is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<TokenSigner>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{decode, decode_header, DecodingKey, Validation};

    const TEST_KEY: &str = include_str!("../../tests/fixtures/AuthKey_TESTKEY01.p8");
    const TEST_PUBLIC_KEY: &str = include_str!("../../tests/fixtures/AuthKey_TESTKEY01.pub.pem");

    fn signer(lifetime_secs: u64) -> TokenSigner {
        let config = AscConfig::builder()
            .issuer_id(IssuerId::new("69a6de70-03db-47e3-e053-5b8c7c11a4d1").unwrap())
            .key_id(KeyId::new("TESTKEY01").unwrap())
            .private_key(PrivateKey::from_pem(TEST_KEY).unwrap())
            .token_lifetime(std::time::Duration::from_secs(lifetime_secs))
            .build()
            .unwrap();
        TokenSigner::new(&config)
    }

    fn validation() -> Validation {
        let mut validation = Validation::new(Algorithm::ES256);
        validation.set_audience(&[AUDIENCE]);
        validation.set_issuer(&["69a6de70-03db-47e3-e053-5b8c7c11a4d1"]);
        validation
    }

    #[test]
    fn test_token_verifies_with_public_key() {
        let token = signer(1200).bearer_token().unwrap();
        let key = DecodingKey::from_ec_pem(TEST_PUBLIC_KEY.as_bytes()).unwrap();

        let data = decode::<Claims>(&token, &key, &validation()).unwrap();
        assert_eq!(data.claims.aud, "appstoreconnect-v1");
        assert_eq!(data.claims.exp - data.claims.iat, 1200);
    }

    #[test]
    fn test_token_header_carries_key_id() {
        let token = signer(600).bearer_token().unwrap();
        let header = decode_header(&token).unwrap();

        assert_eq!(header.alg, Algorithm::ES256);
        assert_eq!(header.kid.as_deref(), Some("TESTKEY01"));
        assert_eq!(header.typ.as_deref(), Some("JWT"));
    }

    #[test]
    fn test_cached_token_is_reused() {
        let signer = signer(1200);
        let now = Utc::now();

        let first = signer.token_at(now).unwrap();
        let second = signer.token_at(now + Duration::seconds(600)).unwrap();

        assert_eq!(first.as_str(), second.as_str());
    }

    #[test]
    fn test_token_is_resigned_near_expiry() {
        let signer = signer(1200);
        let now = Utc::now();

        let first = signer.token_at(now).unwrap();
        let later = now + Duration::seconds(1200 - 30);
        let second = signer.token_at(later).unwrap();

        assert_ne!(first.as_str(), second.as_str());
        assert_eq!(second.expires_at(), later + Duration::seconds(1200));
    }

    #[test]
    fn test_short_lifetime_always_resigns() {
        let signer = signer(30);
        let now = Utc::now();

        let first = signer.token_at(now).unwrap();
        assert!(!first.is_fresh_at(now));
        let second = signer.token_at(now).unwrap();
        assert_ne!(first.as_str(), second.as_str());
    }

    #[test]
    fn test_debug_masks_token() {
        let signer = signer(1200);
        let token = signer.token_at(Utc::now()).unwrap();

        let debug = format!("{token:?}");
        assert!(debug.contains("*****"));
        assert!(!debug.contains(token.as_str()));

        let debug = format!("{signer:?}");
        assert!(debug.contains("TESTKEY01"));
        assert!(!debug.contains("BEGIN"));
    }
}
