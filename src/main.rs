//! Meta webhook receiver and Instagram OAuth relay.

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use meta_webhooks::adapters::http::{app_router, AppState};
use meta_webhooks::adapters::{InMemoryUpdateLog, InstagramOAuthAdapter};
use meta_webhooks::config::{AppConfig, ConfigError, ValidationError};
use meta_webhooks::domain::webhook::SignaturePolicy;

#[derive(Debug, Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Invalid configuration: {0}")]
    Validation(#[from] ValidationError),

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    let config = AppConfig::load()?;
    init_tracing(&config);
    config.validate()?;

    let addr = config.server.socket_addr()?;
    let state = build_state(&config)?;
    let app = app_router(
        state,
        Duration::from_secs(config.server.request_timeout_secs),
    );

    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, environment = ?config.server.environment, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    if config.is_production() {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .json()
            .flatten_event(true)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }
}

fn build_state(config: &AppConfig) -> Result<AppState, StartupError> {
    let update_log = Arc::new(InMemoryUpdateLog::new(config.webhook.log_capacity));
    let oauth_provider = Arc::new(InstagramOAuthAdapter::new(
        config.instagram.oauth_config(),
        config.instagram.http_timeout(),
    )?);

    let mut state = AppState::new(
        update_log,
        oauth_provider,
        config.webhook.verify_token.clone(),
    )
    .with_signature_policy(config.webhook.signature_policy)
    .with_fetch_profile(config.instagram.fetch_profile);

    match config.webhook.app_secret() {
        Some(secret) => {
            state = state.with_app_secret(secret.clone(), config.webhook.signature_algorithm);
        }
        None => {
            tracing::warn!("No app secret configured; signed deliveries will be rejected");
        }
    }

    if config.webhook.signature_policy == SignaturePolicy::PerRoute {
        tracing::warn!("Per-route signature policy: Instagram and Threads deliveries are not authenticated");
    }

    tracing::info!(
        capacity = config.webhook.log_capacity,
        algorithm = %config.webhook.signature_algorithm,
        fetch_profile = config.instagram.fetch_profile,
        "Application state ready"
    );

    Ok(state)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for ctrl-c");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::warn!("Received ctrl-c; shutting down"),
        _ = terminate => tracing::warn!("Received SIGTERM; shutting down"),
    }
}
