use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use axum_extra::extract::CookieJar;
use serde::Deserialize;

use super::register::AuthResponseData;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::auth::models::Credentials;
use crate::domain::auth::models::Username;
use crate::domain::auth::ports::AuthServicePort;
use crate::inbound::http::router::AppState;

pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(body): Json<LoginRequestBody>,
) -> Result<(CookieJar, ApiSuccess<AuthResponseData>), ApiError> {
    // A username that does not even parse gets the same generic response as
    // one that does not exist
    let username = Username::new(body.username)
        .map_err(|_| ApiError::Unauthorized("Invalid credentials".to_string()))?;

    let token = state
        .auth_service
        .login(Credentials::new(username, body.password))
        .await
        .map_err(ApiError::from)?;

    let jar = jar.add(state.cookies.session_cookie(&token));

    Ok((
        jar,
        ApiSuccess::new(StatusCode::OK, AuthResponseData { token }),
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequestBody {
    username: String,
    password: String,
}
