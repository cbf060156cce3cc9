//! API routes module - organizes all route handlers.

pub mod app_state;
pub mod environments;
pub mod error;
pub mod feature_flags;
pub mod openapi;

use axum::{Router, response::Json, routing::get};
use serde_json::{Value, json};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub use app_state::AppState;
pub use error::ApiError;

/// Create the API router, with state applied.
///
/// Mounted under `/api/v1` by [`create_app`]; tests may also drive it directly.
pub fn create_api_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .nest("/environments", environments::environments_router())
        .nest("/feature-flags", feature_flags::feature_flags_router())
        .merge(openapi::openapi_router())
        .with_state(app_state)
}

/// Create the full application: health check at the root, the API under
/// `/api/v1`, request tracing and CORS.
pub fn create_app(app_state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .nest("/api/v1", create_api_router(app_state))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
}

/// GET /health - Liveness check
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is up", body = Object)
    )
)]
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "feature-flag-api",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
