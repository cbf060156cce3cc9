//! Environment routes.

use axum::{
    Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::Json,
    routing::get,
};
use tracing::info;

use super::app_state::AppState;
use super::error::ApiError;
use crate::models::{CreateEnvironmentRequest, Environment, UpdateEnvironmentRequest};
use crate::services::parse_id;
use crate::storage::ENVIRONMENT;

/// Create the environments router
pub fn environments_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_environments).post(create_environment))
        .route("/default", get(get_default_environment))
        .route("/name/{name}", get(get_environment_by_name))
        .route(
            "/{id}",
            get(get_environment)
                .put(update_environment)
                .patch(update_environment)
                .delete(delete_environment),
        )
}

/// GET /environments - List all environments
#[utoipa::path(
    get,
    path = "/environments",
    tag = "Environments",
    responses(
        (status = 200, description = "All environments in creation order", body = [Environment])
    )
)]
pub async fn list_environments(State(state): State<AppState>) -> Json<Vec<Environment>> {
    Json(state.environments.list().await)
}

/// POST /environments - Create an environment
#[utoipa::path(
    post,
    path = "/environments",
    tag = "Environments",
    request_body = CreateEnvironmentRequest,
    responses(
        (status = 201, description = "Environment created", body = Environment),
        (status = 400, description = "Validation failed")
    )
)]
pub async fn create_environment(
    State(state): State<AppState>,
    payload: Result<Json<CreateEnvironmentRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Environment>), ApiError> {
    let Json(request) = payload?;
    let environment = state.environments.create(request).await?;
    info!(
        "Created environment {} ({}), default: {}",
        environment.name, environment.id, environment.is_default
    );
    Ok((StatusCode::CREATED, Json(environment)))
}

/// GET /environments/default - Get the default environment
#[utoipa::path(
    get,
    path = "/environments/default",
    tag = "Environments",
    responses(
        (status = 200, description = "The default environment", body = Environment),
        (status = 404, description = "No environment is marked default")
    )
)]
pub async fn get_default_environment(
    State(state): State<AppState>,
) -> Result<Json<Environment>, ApiError> {
    Ok(Json(state.environments.get_default().await?))
}

/// GET /environments/name/{name} - Get an environment by name (case-insensitive)
#[utoipa::path(
    get,
    path = "/environments/name/{name}",
    tag = "Environments",
    params(
        ("name" = String, Path, description = "Environment name, matched case-insensitively")
    ),
    responses(
        (status = 200, description = "Environment found", body = Environment),
        (status = 404, description = "Environment not found")
    )
)]
pub async fn get_environment_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Environment>, ApiError> {
    Ok(Json(state.environments.get_by_name(&name).await?))
}

/// GET /environments/{id} - Get an environment by ID
#[utoipa::path(
    get,
    path = "/environments/{id}",
    tag = "Environments",
    params(
        ("id" = String, Path, description = "Environment ID")
    ),
    responses(
        (status = 200, description = "Environment found", body = Environment),
        (status = 404, description = "Environment not found")
    )
)]
pub async fn get_environment(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Environment>, ApiError> {
    let id = parse_id(ENVIRONMENT, &id)?;
    Ok(Json(state.environments.get(id).await?))
}

/// PUT /environments/{id} - Update an environment
///
/// Marking an environment default unsets the previous default.
#[utoipa::path(
    put,
    path = "/environments/{id}",
    tag = "Environments",
    params(
        ("id" = String, Path, description = "Environment ID")
    ),
    request_body = UpdateEnvironmentRequest,
    responses(
        (status = 200, description = "Environment updated", body = Environment),
        (status = 400, description = "Validation failed"),
        (status = 404, description = "Environment not found")
    )
)]
pub async fn update_environment(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateEnvironmentRequest>, JsonRejection>,
) -> Result<Json<Environment>, ApiError> {
    let id = parse_id(ENVIRONMENT, &id)?;
    let Json(request) = payload?;
    let environment = state.environments.update(id, request).await?;
    info!("Updated environment {} ({})", environment.name, environment.id);
    Ok(Json(environment))
}

/// DELETE /environments/{id} - Delete an environment
#[utoipa::path(
    delete,
    path = "/environments/{id}",
    tag = "Environments",
    params(
        ("id" = String, Path, description = "Environment ID")
    ),
    responses(
        (status = 204, description = "Environment deleted"),
        (status = 404, description = "Environment not found"),
        (status = 409, description = "The default environment cannot be deleted")
    )
)]
pub async fn delete_environment(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(ENVIRONMENT, &id)?;
    state.environments.remove(id).await?;
    info!("Deleted environment {}", id);
    Ok(StatusCode::NO_CONTENT)
}
