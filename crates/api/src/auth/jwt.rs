//! Access-token generation/validation and session-token helpers.
//!
//! Access tokens are HS256-signed JWTs carrying a [`Claims`] payload. Each
//! token is bound to a row in `sessions`: `sid` names the row and the
//! SHA-256 of `jti` must match its `token_hash`, so revoking the session
//! invalidates the token before it expires. A token expires together with
//! its session; there is no separate refresh step.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use skillswap_core::types::{DbId, Timestamp};
use uuid::Uuid;

use crate::config::{parse_env, ConfigError};

/// JWT claims embedded in every access token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject -- the user's internal database id.
    pub sub: DbId,
    /// The session row this token belongs to.
    pub sid: DbId,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
    /// Unique token identifier; its hash is stored on the session.
    pub jti: String,
}

/// Configuration for token signing and session lifetime.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HMAC-SHA256 secret used to sign and verify tokens.
    pub secret: String,
    /// Session lifetime in days; access tokens live exactly as long.
    pub session_expiry_days: i64,
}

const DEFAULT_SESSION_EXPIRY_DAYS: i64 = 14;

impl JwtConfig {
    /// Load JWT configuration from environment variables.
    ///
    /// | Env Var               | Required | Default |
    /// |-----------------------|----------|---------|
    /// | `JWT_SECRET`          | **yes**  | --      |
    /// | `SESSION_EXPIRY_DAYS` | no       | `14`    |
    pub fn from_env() -> Result<Self, ConfigError> {
        let secret = std::env::var("JWT_SECRET")
            .ok()
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::Missing("JWT_SECRET"))?;

        Ok(Self {
            secret,
            session_expiry_days: parse_env("SESSION_EXPIRY_DAYS", DEFAULT_SESSION_EXPIRY_DAYS)?,
        })
    }
}

/// A freshly minted session token pair.
///
/// `jti` goes into the access token; only `hash` is persisted.
pub struct SessionToken {
    pub jti: String,
    pub hash: String,
}

/// Generate a random session token identifier and its hash.
pub fn generate_session_token() -> SessionToken {
    let jti = Uuid::new_v4().to_string();
    let hash = hash_token(&jti);
    SessionToken { jti, hash }
}

/// Compute the SHA-256 hex digest of a token.
pub fn hash_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Sign an HS256 access token for `user_id` bound to session `session_id`.
///
/// `expires_at` is the session's own expiry.
pub fn generate_access_token(
    user_id: DbId,
    session_id: DbId,
    jti: &str,
    expires_at: Timestamp,
    config: &JwtConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = chrono::Utc::now().timestamp();
    let claims = Claims {
        sub: user_id,
        sid: session_id,
        exp: expires_at.timestamp(),
        iat: now,
        jti: jti.to_string(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
}

/// Validate signature and expiry, returning the embedded [`Claims`].
pub fn validate_token(
    token: &str,
    config: &JwtConfig,
) -> Result<Claims, jsonwebtoken::errors::Error> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &Validation::default(),
    )?;
    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> JwtConfig {
        JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            session_expiry_days: 14,
        }
    }

    fn in_days(days: i64) -> Timestamp {
        chrono::Utc::now() + chrono::Duration::days(days)
    }

    #[test]
    fn sign_and_validate() {
        let config = test_config();
        let session = generate_session_token();
        let expires_at = in_days(14);
        let token = generate_access_token(42, 7, &session.jti, expires_at, &config).unwrap();

        let claims = validate_token(&token, &config).unwrap();
        assert_eq!(claims.sub, 42);
        assert_eq!(claims.sid, 7);
        assert_eq!(hash_token(&claims.jti), session.hash);
        assert_eq!(claims.exp, expires_at.timestamp());
    }

    #[test]
    fn expired_token_fails() {
        let config = test_config();
        // Well past the default 60-second leeway.
        let now = chrono::Utc::now().timestamp();
        let claims = Claims {
            sub: 1,
            sid: 1,
            exp: now - 300,
            iat: now - 600,
            jti: Uuid::new_v4().to_string(),
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.secret.as_bytes()),
        )
        .unwrap();

        assert!(validate_token(&token, &config).is_err());
    }

    #[test]
    fn wrong_secret_fails() {
        let config = test_config();
        let other = JwtConfig {
            secret: "a-different-secret".to_string(),
            ..test_config()
        };
        let token = generate_access_token(1, 1, "jti", in_days(1), &config).unwrap();
        assert!(validate_token(&token, &other).is_err());
    }

    #[test]
    fn token_hash_is_sha256_hex() {
        let hash = hash_token("abc");
        assert_eq!(hash.len(), 64);
        assert_eq!(hash, hash_token("abc"));
        assert_ne!(hash, hash_token("abd"));
    }
}
