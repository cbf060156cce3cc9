//! OpenAPI specification definition.
//!
//! Aggregates all route handlers and schemas for OpenAPI documentation generation.

use utoipa::{Modify, OpenApi};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        crate::routes::health_check,
        // Environments
        crate::routes::environments::list_environments,
        crate::routes::environments::create_environment,
        crate::routes::environments::get_default_environment,
        crate::routes::environments::get_environment_by_name,
        crate::routes::environments::get_environment,
        crate::routes::environments::update_environment,
        crate::routes::environments::delete_environment,
        // Feature flags
        crate::routes::feature_flags::list_feature_flags,
        crate::routes::feature_flags::create_feature_flag,
        crate::routes::feature_flags::get_feature_flag,
        crate::routes::feature_flags::update_feature_flag,
        crate::routes::feature_flags::toggle_feature_flag,
        crate::routes::feature_flags::delete_feature_flag,
        // OpenAPI
        crate::routes::openapi::serve_openapi_json,
    ),
    components(schemas(
        crate::models::Environment,
        crate::models::CreateEnvironmentRequest,
        crate::models::UpdateEnvironmentRequest,
        crate::models::FeatureFlag,
        crate::models::CreateFeatureFlagRequest,
        crate::models::UpdateFeatureFlagRequest,
    )),
    modifiers(&VersionAddon),
    tags(
        (name = "Health", description = "Liveness check"),
        (name = "Environments", description = "Environment CRUD and default selection"),
        (name = "Feature Flags", description = "Feature flag CRUD and toggling"),
        (name = "OpenAPI", description = "OpenAPI specification"),
    ),
    info(
        title = "Feature Flag API",
        description = "REST API for feature flags and the environments they apply to",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    servers(
        (url = "http://localhost:3001/api/v1", description = "Local development server")
    )
)]
pub struct ApiDoc;

struct VersionAddon;

impl Modify for VersionAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        // Keep the document version in step with Cargo.toml
        openapi.info.version = env!("CARGO_PKG_VERSION").to_string();
    }
}
