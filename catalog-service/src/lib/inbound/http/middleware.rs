use axum::extract::Request;
use axum::extract::State;
use axum::http::StatusCode;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use axum_extra::extract::cookie::CookieJar;
use serde_json::json;

use crate::domain::auth::models::Role;
use crate::inbound::http::router::AppState;

/// Extension type to store the verified identity in request extensions
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub username: String,
    pub role: Role,
}

/// Middleware guarding routes behind a valid session token.
///
/// Takes the token from the session cookie when present, otherwise from an
/// `Authorization: Bearer` header. Verification is stateless; expired and
/// tampered tokens get the same generic 401.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_token(&req, state.cookies.name())?;

    let claims = state.token_issuer.verify(&token).map_err(|e| {
        tracing::warn!(error = %e, "Session token rejected");
        unauthorized("Invalid or expired token")
    })?;

    req.extensions_mut().insert(AuthenticatedUser {
        username: claims.sub,
        role: claims.role,
    });

    Ok(next.run(req).await)
}

fn extract_token(req: &Request, cookie_name: &str) -> Result<String, Response> {
    let jar = CookieJar::from_headers(req.headers());
    if let Some(cookie) = jar.get(cookie_name) {
        return Ok(cookie.value().to_string());
    }

    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| unauthorized("Missing session cookie or Authorization header"))?;

    auth_header
        .strip_prefix("Bearer ")
        .map(|token| token.to_string())
        .ok_or_else(|| unauthorized("Invalid Authorization header format. Expected: Bearer <token>"))
}

fn unauthorized(message: &str) -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({
            "error": message
        })),
    )
        .into_response()
}
