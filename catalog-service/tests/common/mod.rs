use std::sync::Arc;

use catalog_service::config::CookieConfig;
use catalog_service::config::SameSitePolicy;
use catalog_service::domain::auth::service::AuthService;
use catalog_service::domain::auth::tokens::TokenIssuer;
use catalog_service::inbound::http::cookies::SessionCookieBuilder;
use catalog_service::inbound::http::router::create_router;
use catalog_service::outbound::repositories::InMemoryCredentialStore;

pub const TEST_SECRET: &str = "test-secret-key-for-jwt-signing-at-least-32-bytes";
pub const COOKIE_NAME: &str = "session_token";
pub const COOKIE_DOMAIN: &str = "catalog.test";

/// Test application that spawns a real server on a random port
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    pub token_issuer: TokenIssuer,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let token_issuer = Arc::new(TokenIssuer::new(TEST_SECRET.as_bytes(), 24));

        let cookie_config = CookieConfig {
            name: COOKIE_NAME.to_string(),
            domain: COOKIE_DOMAIN.to_string(),
            same_site: SameSitePolicy::None,
        };
        let cookies = SessionCookieBuilder::new(&cookie_config, token_issuer.lifetime_seconds());

        let credential_store = Arc::new(InMemoryCredentialStore::new());
        let auth_service = Arc::new(AuthService::new(
            credential_store,
            Arc::clone(&token_issuer),
        ));

        let application = create_router(auth_service, Arc::clone(&token_issuer), cookies);

        tokio::spawn(async move {
            axum::serve(listener, application)
                .await
                .expect("Server failed");
        });

        let api_client = reqwest::Client::builder()
            .cookie_store(true)
            .build()
            .expect("Failed to build api client");

        Self {
            address,
            api_client,
            token_issuer: TokenIssuer::new(TEST_SECRET.as_bytes(), 24),
        }
    }

    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }
}
