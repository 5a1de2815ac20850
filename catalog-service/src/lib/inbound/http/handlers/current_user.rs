use axum::http::StatusCode;
use axum::Extension;
use serde::Serialize;

use super::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;

/// Returns the identity asserted by the presented session token.
pub async fn current_user(
    Extension(user): Extension<AuthenticatedUser>,
) -> ApiSuccess<CurrentUserData> {
    ApiSuccess::new(
        StatusCode::OK,
        CurrentUserData {
            username: user.username,
            role: user.role.to_string(),
        },
    )
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrentUserData {
    pub username: String,
    pub role: String,
}
