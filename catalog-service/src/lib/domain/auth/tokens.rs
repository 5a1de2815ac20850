use auth::JwtError;
use auth::JwtHandler;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

use crate::domain::auth::models::Role;
use crate::domain::auth::models::Username;

/// Claims carried by a session token.
///
/// The token is the session state: subject, role and lifetime are all
/// embedded, so verification needs no server-side lookup. The random `jti`
/// makes every minted token unique even when two are issued for the same
/// identity within the same second.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionClaims {
    /// Subject (username)
    pub sub: String,
    /// Account role
    pub role: Role,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Unique token identifier
    pub jti: String,
}

/// Issues and verifies signed session tokens.
///
/// The signing secret and lifetime are injected at construction; nothing is
/// read from ambient global state, so tests can run with distinct keys.
/// Expiration is checked against wall-clock time with zero skew tolerance.
pub struct TokenIssuer {
    handler: JwtHandler,
    expiration_hours: i64,
}

impl TokenIssuer {
    /// Create a token issuer.
    ///
    /// # Arguments
    /// * `secret` - HS256 signing secret
    /// * `expiration_hours` - Fixed token lifetime
    pub fn new(secret: &[u8], expiration_hours: i64) -> Self {
        Self {
            handler: JwtHandler::new(secret),
            expiration_hours,
        }
    }

    /// Token lifetime in seconds, also used for the cookie max-age.
    pub fn lifetime_seconds(&self) -> i64 {
        self.expiration_hours * 3600
    }

    /// Mint a signed token for an identity.
    ///
    /// # Errors
    /// * `EncodingFailed` - Signing failed
    pub fn issue(&self, username: &Username, role: Role) -> Result<String, JwtError> {
        let now = Utc::now();
        let claims = SessionClaims {
            sub: username.as_str().to_string(),
            role,
            iat: now.timestamp(),
            exp: (now + Duration::hours(self.expiration_hours)).timestamp(),
            jti: Uuid::new_v4().to_string(),
        };

        self.handler.encode(&claims)
    }

    /// Verify a token and decode its claims.
    ///
    /// # Errors
    /// * `TokenExpired` - Signature valid but expiration is in the past
    /// * `InvalidToken` - Malformed structure or bad signature
    pub fn verify(&self, token: &str) -> Result<SessionClaims, JwtError> {
        self.handler.decode(token)
    }
}
