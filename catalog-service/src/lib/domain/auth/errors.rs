use auth::JwtError;
use auth::PasswordError;
use thiserror::Error;

/// Error for Username validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UsernameError {
    #[error("Username must not be empty")]
    Empty,
}

/// Top-level error for authentication operations.
///
/// `InvalidCredentials` deliberately covers both unknown-username and
/// wrong-password so callers cannot probe which usernames exist.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    #[error("Username already exists: {0}")]
    DuplicateUsername(String),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Invalid username: {0}")]
    InvalidUsername(#[from] UsernameError),

    #[error("Password error: {0}")]
    Password(#[from] PasswordError),

    #[error("Token error: {0}")]
    Token(#[from] JwtError),

    // Infrastructure errors
    #[error("Credential store error: {0}")]
    Store(String),

    #[error("Internal inconsistency: {0}")]
    Internal(String),
}
