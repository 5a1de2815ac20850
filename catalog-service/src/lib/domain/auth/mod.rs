pub mod errors;
pub mod models;
pub mod ports;
pub mod service;
pub mod tokens;

pub use errors::AuthError;
pub use models::Credentials;
pub use models::Role;
pub use models::User;
pub use models::Username;
pub use service::AuthService;
pub use tokens::SessionClaims;
pub use tokens::TokenIssuer;
