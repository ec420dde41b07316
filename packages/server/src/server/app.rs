//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    extract::Extension,
    http::{header::CONTENT_TYPE, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::ContactSettings;
use crate::kernel::BaseMailer;
use crate::server::routes::{contact_handler, health_handler};
use crate::server::static_files::serve_site;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub mailer: Arc<dyn BaseMailer>,
    pub contact: ContactSettings,
}

/// Build the Axum application router
///
/// The mailer rides behind a trait object so tests can inject a mock.
/// Every path outside /api and /health falls through to the embedded
/// site assets.
pub fn build_app(mailer: Arc<dyn BaseMailer>, contact: ContactSettings) -> Router {
    let app_state = AppState { mailer, contact };

    // CORS configuration - allow any origin for development
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        .route("/api/contact", post(contact_handler))
        .route("/health", get(health_handler))
        // Marketing site (embedded SPA) for everything else
        .fallback(serve_site)
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(Extension(app_state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
