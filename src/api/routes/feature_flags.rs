//! Feature flag routes.

use axum::{
    Router,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
    response::Json,
    routing::{get, patch},
};
use serde::Deserialize;
use tracing::info;
use utoipa::IntoParams;

use super::app_state::AppState;
use super::error::ApiError;
use crate::models::{CreateFeatureFlagRequest, FeatureFlag, UpdateFeatureFlagRequest};
use crate::services::parse_id;
use crate::storage::FEATURE_FLAG;

/// Create the feature flags router
pub fn feature_flags_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_feature_flags).post(create_feature_flag))
        .route(
            "/{id}/toggle",
            patch(toggle_feature_flag).post(toggle_feature_flag),
        )
        .route(
            "/{id}",
            get(get_feature_flag)
                .put(update_feature_flag)
                .patch(update_feature_flag)
                .delete(delete_feature_flag),
        )
}

/// Query parameters for listing feature flags
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FeatureFlagQuery {
    /// Only return flags for this environment name (exact, case-sensitive)
    pub environment: Option<String>,
}

/// GET /feature-flags - List feature flags
#[utoipa::path(
    get,
    path = "/feature-flags",
    tag = "Feature Flags",
    params(FeatureFlagQuery),
    responses(
        (status = 200, description = "Matching feature flags in creation order", body = [FeatureFlag])
    )
)]
pub async fn list_feature_flags(
    State(state): State<AppState>,
    Query(query): Query<FeatureFlagQuery>,
) -> Json<Vec<FeatureFlag>> {
    Json(state.feature_flags.list(query.environment.as_deref()).await)
}

/// POST /feature-flags - Create a feature flag
#[utoipa::path(
    post,
    path = "/feature-flags",
    tag = "Feature Flags",
    request_body = CreateFeatureFlagRequest,
    responses(
        (status = 201, description = "Feature flag created", body = FeatureFlag),
        (status = 400, description = "Validation failed")
    )
)]
pub async fn create_feature_flag(
    State(state): State<AppState>,
    payload: Result<Json<CreateFeatureFlagRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<FeatureFlag>), ApiError> {
    let Json(request) = payload?;
    let flag = state.feature_flags.create(request).await?;
    info!(
        "Created feature flag {} ({}) in environment {}",
        flag.name, flag.id, flag.environment
    );
    Ok((StatusCode::CREATED, Json(flag)))
}

/// GET /feature-flags/{id} - Get a feature flag by ID
#[utoipa::path(
    get,
    path = "/feature-flags/{id}",
    tag = "Feature Flags",
    params(
        ("id" = String, Path, description = "Feature flag ID")
    ),
    responses(
        (status = 200, description = "Feature flag found", body = FeatureFlag),
        (status = 404, description = "Feature flag not found")
    )
)]
pub async fn get_feature_flag(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<FeatureFlag>, ApiError> {
    let id = parse_id(FEATURE_FLAG, &id)?;
    Ok(Json(state.feature_flags.get(id).await?))
}

/// PUT /feature-flags/{id} - Update a feature flag
#[utoipa::path(
    put,
    path = "/feature-flags/{id}",
    tag = "Feature Flags",
    params(
        ("id" = String, Path, description = "Feature flag ID")
    ),
    request_body = UpdateFeatureFlagRequest,
    responses(
        (status = 200, description = "Feature flag updated", body = FeatureFlag),
        (status = 400, description = "Validation failed"),
        (status = 404, description = "Feature flag not found")
    )
)]
pub async fn update_feature_flag(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateFeatureFlagRequest>, JsonRejection>,
) -> Result<Json<FeatureFlag>, ApiError> {
    let id = parse_id(FEATURE_FLAG, &id)?;
    let Json(request) = payload?;
    let flag = state.feature_flags.update(id, request).await?;
    info!("Updated feature flag {} ({})", flag.name, flag.id);
    Ok(Json(flag))
}

/// PATCH /feature-flags/{id}/toggle - Flip a feature flag on or off
#[utoipa::path(
    patch,
    path = "/feature-flags/{id}/toggle",
    tag = "Feature Flags",
    params(
        ("id" = String, Path, description = "Feature flag ID")
    ),
    responses(
        (status = 200, description = "Feature flag toggled", body = FeatureFlag),
        (status = 404, description = "Feature flag not found")
    )
)]
pub async fn toggle_feature_flag(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<FeatureFlag>, ApiError> {
    let id = parse_id(FEATURE_FLAG, &id)?;
    let flag = state.feature_flags.toggle(id).await?;
    info!(
        "Toggled feature flag {} ({}) to {}",
        flag.name,
        flag.id,
        if flag.enabled { "enabled" } else { "disabled" }
    );
    Ok(Json(flag))
}

/// DELETE /feature-flags/{id} - Delete a feature flag
#[utoipa::path(
    delete,
    path = "/feature-flags/{id}",
    tag = "Feature Flags",
    params(
        ("id" = String, Path, description = "Feature flag ID")
    ),
    responses(
        (status = 204, description = "Feature flag deleted"),
        (status = 404, description = "Feature flag not found")
    )
)]
pub async fn delete_feature_flag(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(FEATURE_FLAG, &id)?;
    state.feature_flags.remove(id).await?;
    info!("Deleted feature flag {}", id);
    Ok(StatusCode::NO_CONTENT)
}
