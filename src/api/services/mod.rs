//! Services module - request validation and the environment / feature flag services.

pub mod environment_service;
pub mod error;
pub mod feature_flag_service;
pub mod validation;

pub use environment_service::EnvironmentService;
pub use error::ServiceError;
pub use feature_flag_service::FeatureFlagService;
pub use validation::ValidationError;

use uuid::Uuid;

use crate::storage::StorageError;

/// Parse a path id. Anything that is not a UUID cannot name a stored record,
/// so it is reported as not found.
pub fn parse_id(entity_type: &str, raw: &str) -> Result<Uuid, ServiceError> {
    Uuid::parse_str(raw).map_err(|_| StorageError::not_found(entity_type, raw).into())
}
