// Main entry point for the site server

use std::sync::Arc;

use anyhow::{Context, Result};
use resend::{ResendOptions, ResendService};
use server_core::{server::build_app, Config};
use server_core::kernel::ResendAdapter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,server_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Tiger Hill Transport site server");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!("Configuration loaded");

    // Create the email delivery service
    let resend = Arc::new(ResendService::new(ResendOptions {
        api_key: config.resend_api_key.clone(),
    }));
    let mailer = Arc::new(ResendAdapter::new(resend));

    // Build application
    let app = build_app(mailer, config.contact.clone());

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {}", addr);
    tracing::info!("Site: http://localhost:{}/", config.port);
    tracing::info!("Health check: http://localhost:{}/health", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
