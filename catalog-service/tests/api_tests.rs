mod common;

use auth::JwtHandler;
use catalog_service::domain::auth::models::Role;
use catalog_service::domain::auth::tokens::SessionClaims;
use common::TestApp;
use common::COOKIE_DOMAIN;
use common::COOKIE_NAME;
use common::TEST_SECRET;
use reqwest::header::SET_COOKIE;
use reqwest::StatusCode;
use serde_json::json;

fn set_cookie_header(response: &reqwest::Response) -> String {
    response
        .headers()
        .get(SET_COOKIE)
        .expect("Missing Set-Cookie header")
        .to_str()
        .expect("Set-Cookie is not valid UTF-8")
        .to_string()
}

#[tokio::test]
async fn test_register_success_returns_token_and_session_cookie() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/v1/auth/register")
        .json(&json!({
            "username": "alice",
            "password": "secret123"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let cookie = set_cookie_header(&response);
    assert!(cookie.starts_with(&format!("{}=", COOKIE_NAME)));
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("Secure"));
    assert!(cookie.contains("SameSite=None"));
    assert!(cookie.contains(&format!("Domain={}", COOKIE_DOMAIN)));
    assert!(cookie.contains("Path=/"));
    assert!(cookie.contains("Max-Age=86400"));

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    let token = body["data"]["token"].as_str().expect("Missing token");

    let claims = app.token_issuer.verify(token).expect("Token did not verify");
    assert_eq!(claims.sub, "alice");
    assert_eq!(claims.role, Role::User);
}

#[tokio::test]
async fn test_register_duplicate_username_conflicts() {
    let app = TestApp::spawn().await;

    app.post("/api/v1/auth/register")
        .json(&json!({"username": "alice", "password": "secret123"}))
        .send()
        .await
        .expect("Failed to execute request");

    // Same username, different password: still a conflict, nothing persisted
    let response = app
        .post("/api/v1/auth/register")
        .json(&json!({"username": "alice", "password": "anything"}))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::CONFLICT);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    let message = body["data"]["message"].as_str().unwrap();
    assert!(message.contains("alice"));
    assert!(message.contains("already exists"));
}

#[tokio::test]
async fn test_register_empty_credentials_rejected() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/v1/auth/register")
        .json(&json!({"username": "", "password": "secret123"}))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let response = app
        .post("/api/v1/auth/register")
        .json(&json!({"username": "alice", "password": ""}))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_login_success_issues_fresh_token() {
    let app = TestApp::spawn().await;

    let register_response = app
        .post("/api/v1/auth/register")
        .json(&json!({"username": "alice", "password": "secret123"}))
        .send()
        .await
        .expect("Failed to execute request");
    let register_body: serde_json::Value = register_response.json().await.unwrap();
    let first_token = register_body["data"]["token"].as_str().unwrap().to_string();

    let response = app
        .post("/api/v1/auth/login")
        .json(&json!({"username": "alice", "password": "secret123"}))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let cookie = set_cookie_header(&response);
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("Max-Age=86400"));

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    let token = body["data"]["token"].as_str().expect("Missing token");

    // A fresh token, but the same identity
    assert_ne!(token, first_token);
    let claims = app.token_issuer.verify(token).expect("Token did not verify");
    assert_eq!(claims.sub, "alice");
    assert_eq!(claims.role, Role::User);
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let app = TestApp::spawn().await;

    app.post("/api/v1/auth/register")
        .json(&json!({"username": "alice", "password": "secret123"}))
        .send()
        .await
        .expect("Failed to execute request");

    let wrong_password = app
        .post("/api/v1/auth/login")
        .json(&json!({"username": "alice", "password": "wrongpass"}))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    let wrong_password_body: serde_json::Value = wrong_password.json().await.unwrap();

    let unknown_user = app
        .post("/api/v1/auth/login")
        .json(&json!({"username": "mallory", "password": "secret123"}))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(unknown_user.status(), StatusCode::UNAUTHORIZED);
    let unknown_user_body: serde_json::Value = unknown_user.json().await.unwrap();

    // Same status, same message: the response must not reveal whether the
    // username exists
    assert_eq!(wrong_password_body, unknown_user_body);
    assert_eq!(
        wrong_password_body["data"]["message"].as_str().unwrap(),
        "Invalid credentials"
    );
}

#[tokio::test]
async fn test_logout_clears_cookie_without_a_session() {
    let app = TestApp::spawn().await;

    // No register, no login: logout is transport-only and still succeeds
    let response = app
        .post("/api/v1/auth/logout")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let cookie = set_cookie_header(&response);
    assert!(cookie.starts_with(&format!("{}=;", COOKIE_NAME)));
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("Secure"));
    assert!(cookie.contains("SameSite=None"));
    assert!(cookie.contains("Max-Age=0"));

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"], "Logout successful!");
}

#[tokio::test]
async fn test_current_user_with_bearer_token() {
    let app = TestApp::spawn().await;

    let register_response = app
        .post("/api/v1/auth/register")
        .json(&json!({"username": "alice", "password": "secret123"}))
        .send()
        .await
        .expect("Failed to execute request");
    let body: serde_json::Value = register_response.json().await.unwrap();
    let token = body["data"]["token"].as_str().unwrap();

    let response = app
        .get("/api/v1/users/me")
        .bearer_auth(token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["data"]["username"], "alice");
    assert_eq!(body["data"]["role"], "user");
}

#[tokio::test]
async fn test_current_user_without_token_unauthorized() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/api/v1/users/me")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_current_user_with_garbage_token_unauthorized() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/api/v1/users/me")
        .bearer_auth("not.a.token")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_current_user_with_expired_token_unauthorized() {
    let app = TestApp::spawn().await;

    // Correctly signed token whose expiration has already passed
    let handler = JwtHandler::new(TEST_SECRET.as_bytes());
    let now = chrono::Utc::now().timestamp();
    let expired = handler
        .encode(&SessionClaims {
            sub: "alice".to_string(),
            role: Role::User,
            iat: now - 90_000,
            exp: now - 1,
            jti: "expired-token".to_string(),
        })
        .unwrap();

    let response = app
        .get("/api/v1/users/me")
        .bearer_auth(expired)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_end_to_end_authentication_scenario() {
    let app = TestApp::spawn().await;

    // Register alice
    let response = app
        .post("/api/v1/auth/register")
        .json(&json!({"username": "alice", "password": "secret123"}))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = response.json().await.unwrap();
    let first_token = body["data"]["token"].as_str().unwrap().to_string();

    // Registering alice again conflicts
    let response = app
        .post("/api/v1/auth/register")
        .json(&json!({"username": "alice", "password": "anything"}))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::CONFLICT);

    // Wrong password is rejected
    let response = app
        .post("/api/v1/auth/login")
        .json(&json!({"username": "alice", "password": "wrongpass"}))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // Correct password yields a fresh token for the same identity
    let response = app
        .post("/api/v1/auth/login")
        .json(&json!({"username": "alice", "password": "secret123"}))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = response.json().await.unwrap();
    let second_token = body["data"]["token"].as_str().unwrap().to_string();
    assert_ne!(first_token, second_token);
    assert_eq!(app.token_issuer.verify(&first_token).unwrap().sub, "alice");
    assert_eq!(app.token_issuer.verify(&second_token).unwrap().sub, "alice");

    // Logout clears the cookie
    let response = app
        .post("/api/v1/auth/logout")
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);
    assert!(set_cookie_header(&response).contains("Max-Age=0"));
}
