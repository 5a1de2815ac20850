use axum::extract::State;
use axum::http::StatusCode;
use axum_extra::extract::CookieJar;

use super::ApiSuccess;
use crate::inbound::http::router::AppState;

/// Logout is a pure transport-layer instruction: no token validation, no
/// identity work. It always succeeds and simply tells the browser to drop
/// the session cookie, whether or not a valid session ever existed.
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> (CookieJar, ApiSuccess<String>) {
    let jar = jar.add(state.cookies.clear_cookie());

    (
        jar,
        ApiSuccess::new(StatusCode::OK, "Logout successful!".to_string()),
    )
}
