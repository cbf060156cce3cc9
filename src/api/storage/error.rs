//! Storage error types for the in-memory stores.

use thiserror::Error;

/// Storage operation errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StorageError {
    /// Entity not found
    #[error("{entity_type} not found: {entity_id}")]
    NotFound {
        entity_type: String,
        entity_id: String,
    },
    /// Operation would leave the store in an illegal state
    #[error("Conflict: {0}")]
    Conflict(String),
}

impl StorageError {
    pub fn not_found(entity_type: &str, entity_id: impl ToString) -> Self {
        Self::NotFound {
            entity_type: entity_type.to_string(),
            entity_id: entity_id.to_string(),
        }
    }
}
