use std::sync::Arc;

use anyhow::Context;
use catalog_service::config::Config;
use catalog_service::domain::auth::service::AuthService;
use catalog_service::domain::auth::tokens::TokenIssuer;
use catalog_service::inbound::http::cookies::SessionCookieBuilder;
use catalog_service::inbound::http::router::create_router;
use catalog_service::outbound::repositories::InMemoryCredentialStore;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "catalog_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "catalog-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load().context("Failed to load configuration")?;

    // A missing or empty signing secret is unrecoverable at startup; it must
    // never be handled per-request
    anyhow::ensure!(
        !config.jwt.secret.trim().is_empty(),
        "JWT signing secret must not be empty (set JWT__SECRET)"
    );

    tracing::info!(
        http_port = config.server.http_port,
        jwt_expiration_hours = config.jwt.expiration_hours,
        cookie_name = %config.cookie.name,
        cookie_domain = %config.cookie.domain,
        "Configuration loaded"
    );

    let token_issuer = Arc::new(TokenIssuer::new(
        config.jwt.secret.as_bytes(),
        config.jwt.expiration_hours,
    ));
    let cookies = SessionCookieBuilder::new(&config.cookie, token_issuer.lifetime_seconds());

    let credential_store = Arc::new(InMemoryCredentialStore::new());
    let auth_service = Arc::new(AuthService::new(
        credential_store,
        Arc::clone(&token_issuer),
    ));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let application = create_router(auth_service, token_issuer, cookies);
    axum::serve(http_listener, application).await?;

    Ok(())
}
