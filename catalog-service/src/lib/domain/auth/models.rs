use std::fmt;

use serde::Deserialize;
use serde::Serialize;

use crate::domain::auth::errors::UsernameError;

/// Stored user identity.
///
/// The username is the stable unique key; the password hash is opaque and
/// never contains the plaintext.
#[derive(Debug, Clone)]
pub struct User {
    pub username: Username,
    pub password_hash: String,
    pub role: Role,
}

/// Account role. Closed set, extensible only by adding variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::User => write!(f, "user"),
            Role::Admin => write!(f, "admin"),
        }
    }
}

/// Username value type.
///
/// Case-sensitive and non-empty; uniqueness is enforced at registration time
/// against the credential store.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    /// Create a new valid username.
    ///
    /// # Errors
    /// * `Empty` - Username is empty or whitespace-only
    pub fn new(username: String) -> Result<Self, UsernameError> {
        if username.trim().is_empty() {
            return Err(UsernameError::Empty);
        }
        Ok(Self(username))
    }

    /// Get username as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Command carrying a username/password pair into registration or login.
#[derive(Debug)]
pub struct Credentials {
    pub username: Username,
    pub password: String,
}

impl Credentials {
    /// Construct a credentials command.
    ///
    /// # Arguments
    /// * `username` - Validated username
    /// * `password` - Plain text password (hashed by the service, never stored)
    pub fn new(username: Username, password: String) -> Self {
        Self { username, password }
    }
}
