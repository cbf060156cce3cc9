//! Service-layer error type.

use thiserror::Error;

use super::validation::ValidationError;
use crate::storage::StorageError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}
