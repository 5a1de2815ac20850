use std::sync::Arc;

use async_trait::async_trait;
use auth::PasswordHasher;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::Credentials;
use crate::domain::auth::models::Role;
use crate::domain::auth::models::User;
use crate::domain::auth::models::Username;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::auth::ports::CredentialStore;
use crate::domain::auth::ports::IdentityVerifier;
use crate::domain::auth::tokens::TokenIssuer;

/// Orchestrates registration and login against the credential store.
///
/// Stateless end-to-end: no session table, no shared lock. Every request is
/// an independent composition of store lookup, password work and token
/// issuance.
pub struct AuthService<CS>
where
    CS: CredentialStore,
{
    store: Arc<CS>,
    token_issuer: Arc<TokenIssuer>,
    password_hasher: PasswordHasher,
}

impl<CS> AuthService<CS>
where
    CS: CredentialStore,
{
    /// Create a new auth service with injected dependencies.
    ///
    /// # Arguments
    /// * `store` - Credential persistence implementation
    /// * `token_issuer` - Configured token issuer (secret and lifetime)
    pub fn new(store: Arc<CS>, token_issuer: Arc<TokenIssuer>) -> Self {
        Self {
            store,
            token_issuer,
            password_hasher: PasswordHasher::new(),
        }
    }
}

#[async_trait]
impl<CS> IdentityVerifier for AuthService<CS>
where
    CS: CredentialStore,
{
    async fn authenticate(&self, username: &Username, password: &str) -> Result<User, AuthError> {
        // Unknown username and wrong password collapse into the same error
        let user = self
            .store
            .find_by_username(username)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !self.password_hasher.verify(password, &user.password_hash) {
            return Err(AuthError::InvalidCredentials);
        }

        Ok(user)
    }
}

#[async_trait]
impl<CS> AuthServicePort for AuthService<CS>
where
    CS: CredentialStore,
{
    async fn register(&self, credentials: Credentials) -> Result<String, AuthError> {
        if self.store.exists_by_username(&credentials.username).await? {
            return Err(AuthError::DuplicateUsername(
                credentials.username.to_string(),
            ));
        }

        let password_hash = self.password_hasher.hash(&credentials.password)?;

        let user = User {
            username: credentials.username,
            password_hash,
            role: Role::User,
        };

        // A concurrent registration may have won the race since the existence
        // check; the store's uniqueness guarantee decides
        let created = self.store.insert(user).await?;

        tracing::info!(username = %created.username, "User registered");

        let token = self.token_issuer.issue(&created.username, created.role)?;
        Ok(token)
    }

    async fn login(&self, credentials: Credentials) -> Result<String, AuthError> {
        let user = self
            .authenticate(&credentials.username, &credentials.password)
            .await?;

        tracing::info!(username = %user.username, "User logged in");

        let token = self.token_issuer.issue(&user.username, user.role)?;
        Ok(token)
    }
}
