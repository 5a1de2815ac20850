//! Authentication infrastructure library
//!
//! Provides the reusable cryptographic building blocks for credential
//! handling:
//! - Password hashing and verification (Argon2id)
//! - Signed, time-bounded JWT encoding and decoding
//!
//! Services define their own claim types and orchestration on top of these
//! primitives. This keeps the library free of any domain knowledge while
//! avoiding duplicated crypto plumbing across services.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! ```
//!
//! ## JWT Tokens
//! ```
//! use auth::JwtHandler;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Claims {
//!     sub: String,
//!     exp: i64,
//! }
//!
//! let handler = JwtHandler::new(b"secret_key_at_least_32_bytes_long!");
//! let claims = Claims {
//!     sub: "alice".to_string(),
//!     exp: jsonwebtoken::get_current_timestamp() as i64 + 3600,
//! };
//! let token = handler.encode(&claims).unwrap();
//! let decoded: Claims = handler.decode(&token).unwrap();
//! ```

pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::PasswordError;
pub use password::PasswordHasher;
