use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use axum_extra::extract::CookieJar;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::auth::errors::UsernameError;
use crate::domain::auth::models::Credentials;
use crate::domain::auth::models::Username;
use crate::domain::auth::ports::AuthServicePort;
use crate::inbound::http::router::AppState;

pub async fn register(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(body): Json<RegisterRequestBody>,
) -> Result<(CookieJar, ApiSuccess<AuthResponseData>), ApiError> {
    let credentials = body.try_into_credentials()?;

    let token = state
        .auth_service
        .register(credentials)
        .await
        .map_err(ApiError::from)?;

    // The freshly minted token rides along as the session cookie
    let jar = jar.add(state.cookies.session_cookie(&token));

    Ok((
        jar,
        ApiSuccess::new(StatusCode::OK, AuthResponseData { token }),
    ))
}

/// HTTP request body for registration (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegisterRequestBody {
    username: String,
    password: String,
}

#[derive(Debug, Clone, Error)]
enum ParseRegisterRequestError {
    #[error("Invalid username: {0}")]
    Username(#[from] UsernameError),

    #[error("Password must not be empty")]
    EmptyPassword,
}

impl RegisterRequestBody {
    fn try_into_credentials(self) -> Result<Credentials, ParseRegisterRequestError> {
        let username = Username::new(self.username)?;
        if self.password.is_empty() {
            return Err(ParseRegisterRequestError::EmptyPassword);
        }
        Ok(Credentials::new(username, self.password))
    }
}

impl From<ParseRegisterRequestError> for ApiError {
    fn from(err: ParseRegisterRequestError) -> Self {
        ApiError::UnprocessableEntity(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthResponseData {
    pub token: String,
}
