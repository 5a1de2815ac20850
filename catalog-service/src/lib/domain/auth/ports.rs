use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::Credentials;
use crate::domain::auth::models::User;
use crate::domain::auth::models::Username;

/// Port for the registration and login use cases.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Register a new identity and mint its first session token.
    ///
    /// # Arguments
    /// * `credentials` - Validated username and plaintext password
    ///
    /// # Returns
    /// Signed session token for the new identity
    ///
    /// # Errors
    /// * `DuplicateUsername` - Username is already taken; nothing persisted
    /// * `Password` - Hashing failed
    /// * `Token` - Token signing failed
    /// * `Store` - Credential store operation failed
    async fn register(&self, credentials: Credentials) -> Result<String, AuthError>;

    /// Verify credentials and mint a session token.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown username or wrong password; the two
    ///   cases are indistinguishable to the caller
    /// * `Token` - Token signing failed
    /// * `Store` - Credential store operation failed
    async fn login(&self, credentials: Credentials) -> Result<String, AuthError>;
}

/// The authentication decision point.
///
/// One method decouples orchestration from any particular credential-matching
/// mechanism and keeps it independently mockable.
#[async_trait]
pub trait IdentityVerifier: Send + Sync + 'static {
    /// Decide whether (username, password) corresponds to a stored identity.
    ///
    /// # Returns
    /// The stored user on success
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown username or wrong password
    /// * `Store` - Credential store operation failed
    async fn authenticate(&self, username: &Username, password: &str) -> Result<User, AuthError>;
}

/// Persistence boundary for user identities.
///
/// The store must treat `insert` as the last line of defense against
/// concurrent duplicate registrations: two requests may both pass the
/// existence check, and the store's own uniqueness guarantee decides.
#[async_trait]
pub trait CredentialStore: Send + Sync + 'static {
    /// Retrieve a user by username.
    ///
    /// # Returns
    /// Optional user (None if not found)
    ///
    /// # Errors
    /// * `Store` - Store operation failed
    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, AuthError>;

    /// Check whether a username is already taken.
    ///
    /// # Errors
    /// * `Store` - Store operation failed
    async fn exists_by_username(&self, username: &Username) -> Result<bool, AuthError>;

    /// Persist a new user record.
    ///
    /// # Errors
    /// * `DuplicateUsername` - Username is already taken
    /// * `Store` - Store operation failed
    async fn insert(&self, user: User) -> Result<User, AuthError>;
}
