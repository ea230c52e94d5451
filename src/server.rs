//! HTTP surface of the catalog.
//!
//! ## Routes
//!
//! - `GET /movies` returns every movie from the provider as a JSON array.
//! - `GET /health` returns `{ "ok": true, "movies": <count> }`.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::catalog::{CatalogProvider, StaticCatalog};
use crate::config::ServerConfig;
use crate::error::Result;

pub type SharedProvider = Arc<dyn CatalogProvider>;

/// Build the axum `Router` serving `provider`.
pub fn router(provider: SharedProvider) -> Router {
    Router::new()
        .route("/movies", get(movies_handler))
        .route("/health", get(health_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(provider)
}

/// Picks the catalog file from config, or the sample movies.
pub fn provider_from_config(config: &ServerConfig) -> Result<SharedProvider> {
    let catalog = match &config.catalog_file {
        Some(path) => StaticCatalog::from_path(path)?,
        None => StaticCatalog::sample(),
    };
    Ok(Arc::new(catalog))
}

/// Serve until ctrl-c.
pub async fn serve(provider: SharedProvider, addr: &str) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Server is running on http://{}", listener.local_addr()?);
    axum::serve(listener, router(provider))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for ctrl-c: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}

async fn movies_handler(State(provider): State<SharedProvider>) -> impl IntoResponse {
    match provider.all_movies() {
        Ok(movies) => {
            tracing::debug!(count = movies.len(), "serving catalog");
            (StatusCode::OK, Json(movies)).into_response()
        }
        Err(e) => {
            tracing::error!("{e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": e.to_string() })),
            )
                .into_response()
        }
    }
}

async fn health_handler(State(provider): State<SharedProvider>) -> impl IntoResponse {
    let count = provider.all_movies().map(|m| m.len()).unwrap_or(0);
    Json(json!({ "ok": true, "movies": count }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{MovieRecord, ProviderError};
    use axum::body::{Body, to_bytes};
    use axum::http::Request;
    use serde_json::Value;
    use tower::ServiceExt;

    struct BrokenCatalog;

    impl CatalogProvider for BrokenCatalog {
        fn all_movies(&self) -> std::result::Result<Vec<MovieRecord>, ProviderError> {
            Err(ProviderError("backing store offline".to_string()))
        }
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn movies_returns_the_whole_catalog_in_order() {
        let app = router(Arc::new(StaticCatalog::sample()));
        let (status, json) = get_json(app, "/movies").await;

        assert_eq!(status, StatusCode::OK);
        let movies = json.as_array().unwrap();
        assert_eq!(movies.len(), 6);
        assert_eq!(movies[0]["id"], 1);
        assert_eq!(movies[0]["title"], "Ant Man");
        assert_eq!(movies[0]["date"], "05/23/2024");
        assert_eq!(movies[5]["title"], "Guardian of The Galaxy");
    }

    #[tokio::test]
    async fn injected_provider_replaces_sample_data() {
        let catalog = StaticCatalog::new(vec![MovieRecord::new(42, "Alien", "In space.")]);
        let (_, json) = get_json(router(Arc::new(catalog)), "/movies").await;

        assert_eq!(json.as_array().unwrap().len(), 1);
        assert_eq!(json[0]["title"], "Alien");
    }

    #[tokio::test]
    async fn provider_failure_is_a_server_error() {
        let (status, json) = get_json(router(Arc::new(BrokenCatalog)), "/movies").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(json["error"].as_str().unwrap().contains("backing store offline"));
    }

    #[tokio::test]
    async fn health_reports_catalog_size() {
        let (status, json) = get_json(router(Arc::new(StaticCatalog::sample())), "/health").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["ok"], true);
        assert_eq!(json["movies"], 6);
    }

    #[test]
    fn provider_defaults_to_sample_catalog() {
        let provider = provider_from_config(&ServerConfig::default()).unwrap();
        assert_eq!(provider.all_movies().unwrap().len(), 6);
    }
}
