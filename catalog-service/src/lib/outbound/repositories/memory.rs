use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::User;
use crate::domain::auth::models::Username;
use crate::domain::auth::ports::CredentialStore;

/// In-memory credential store adapter.
///
/// Stands in for the document store at the persistence boundary. The
/// check-and-insert in `insert` runs under a single write lock, which is the
/// unique-index analogue: concurrent registrations for the same username
/// cannot both succeed.
pub struct InMemoryCredentialStore {
    users: RwLock<HashMap<String, User>>,
}

impl InMemoryCredentialStore {
    pub fn new() -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryCredentialStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CredentialStore for InMemoryCredentialStore {
    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, AuthError> {
        let users = self.users.read().await;
        Ok(users.get(username.as_str()).cloned())
    }

    async fn exists_by_username(&self, username: &Username) -> Result<bool, AuthError> {
        let users = self.users.read().await;
        Ok(users.contains_key(username.as_str()))
    }

    async fn insert(&self, user: User) -> Result<User, AuthError> {
        let mut users = self.users.write().await;

        if users.contains_key(user.username.as_str()) {
            return Err(AuthError::DuplicateUsername(user.username.to_string()));
        }

        users.insert(user.username.as_str().to_string(), user.clone());
        Ok(user)
    }
}
