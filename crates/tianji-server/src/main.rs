use axum::{extract::DefaultBodyLimit, routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod application;
mod config;
mod error;
mod models;
mod routes;

use application::ReadingService;
use config::ServerConfig;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub reading_service: Arc<ReadingService>,
}

#[derive(Serialize)]
struct HealthCheck {
    status: String,
    message: String,
    version: String,
}

async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "Tianji API is running - heaven's pivot turns".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Full application router for the given configuration
pub fn app(config: &ServerConfig) -> Router {
    let state = AppState {
        reading_service: Arc::new(ReadingService::new(config.coin_seed)),
    };

    let cors = config.cors_layer().unwrap_or_else(|e| {
        tracing::warn!("⚠️  {} - falling back to permissive CORS", e);
        CorsLayer::permissive()
    });

    let openapi = routes::swagger::ApiDoc::openapi();

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(health_check))
        .merge(routes::bazi::router())
        .merge(routes::hexagram::router())
        .layer(DefaultBodyLimit::max(config.body_limit_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[shuttle_runtime::main]
async fn main(
    #[shuttle_runtime::Secrets] secrets: shuttle_runtime::SecretStore,
) -> shuttle_axum::ShuttleAxum {
    tracing::info!("🔮 Tianji API initializing...");

    let config = ServerConfig::from_lookup(|key| secrets.get(key));

    match &config.cors_origin {
        Some(origin) => tracing::info!("🌐 CORS restricted to {}", origin),
        None => tracing::warn!("⚠️  No TIANJI_CORS_ORIGIN set - CORS is permissive"),
    }
    if let Some(seed) = config.coin_seed {
        tracing::warn!("🎲 Coin tosses seeded with {} - readings are reproducible", seed);
    }
    tracing::info!("📦 Request body limit: {} bytes", config.body_limit_bytes);

    let router = app(&config);

    tracing::info!("📚 Swagger UI: /swagger-ui");
    tracing::info!("✅ Tianji API ready - the coins are warm");

    Ok(router.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_health_check() {
        let response = app(&ServerConfig::default())
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value["status"], "ok");
        assert_eq!(value["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_openapi_document_served() {
        let response = app(&ServerConfig::default())
            .oneshot(
                Request::builder()
                    .uri("/api-docs/openapi.json")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_body_limit_enforced() {
        let config = ServerConfig {
            body_limit_bytes: 16,
            ..ServerConfig::default()
        };
        let response = app(&config)
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/generate_hexagram")
                    .header("content-type", "application/json")
                    .body(Body::from(format!("{{\"throwResults\": null, \"pad\": \"{}\"}}", "x".repeat(64))))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }
}
