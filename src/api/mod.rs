//! HTTP surface: router assembly and server startup.

pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::http::HeaderValue;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::classifier::Classifier;
use crate::config::ServerConfig;
use crate::error::Result;

pub use routes::{AppState, classifier_routes};

/// CORS policy: any origin when `origins` is empty, otherwise only those listed.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::permissive();
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|o| match o.parse() {
            Ok(v) => Some(v),
            Err(_) => {
                warn!(origin = %o, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(allowed)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Full application: routes plus CORS and request tracing.
pub fn build_router(classifier: Arc<Classifier>, cors_origins: &[String]) -> Router {
    classifier_routes(classifier)
        .layer(cors_layer(cors_origins))
        .layer(TraceLayer::new_for_http())
}

/// Bind the configured address and serve until the process exits.
pub async fn serve(config: &ServerConfig, classifier: Arc<Classifier>) -> Result<()> {
    let app = build_router(classifier, &config.cors_origins);

    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port)).await?;
    info!(addr = %listener.local_addr()?, "Email classifier listening");

    axum::serve(listener, app).await?;
    Ok(())
}
