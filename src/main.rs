use std::sync::Arc;

use dotenvy::dotenv;
use leadsite::app;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Load .env file (silently ignore if missing)
    dotenv().ok();

    // Initialise structured logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{}=debug,tower_http=debug", env!("CARGO_PKG_NAME")).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load config from environment
    let config = app::config::Config::from_env()
        .expect("Failed to load config (check SMTP_PORT and other env vars)");

    // Build the mail adapter from config
    let mail = app::mail::from_config(&config).unwrap_or_else(|e| {
        tracing::error!("Failed to initialize mail adapter: {}", e);
        std::process::exit(1);
    });
    if mail.is_none() {
        tracing::warn!("SMTP not configured; leads will be recorded but not emailed");
    }

    // Build the application state
    let state = app::AppState {
        key: config.signing_key(),
        leads: Arc::new(app::store::LeadLog::new(&config.messages_path)),
        mail,
        config,
    };
    let addr = format!("0.0.0.0:{}", state.config.port);
    let router = leadsite::create_router(state);

    // Start the server
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|e| {
            tracing::error!("Failed to bind to {}: {}", addr, e);
            std::process::exit(1);
        });

    tracing::info!("Listening on http://{}", addr);

    axum::serve(listener, router).await.unwrap();
}
