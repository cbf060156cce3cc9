//! Storage module for the API.
//!
//! Environments and feature flags live in process memory and are reseeded on
//! every boot.

pub mod error;
pub mod memory;
pub mod seed;
pub mod traits;

pub use error::StorageError;
pub use memory::{InMemoryEnvironmentStore, InMemoryFeatureFlagStore};
pub use traits::{EnvironmentStore, FeatureFlagStore};

/// Entity type labels used in `StorageError::NotFound`
pub const ENVIRONMENT: &str = "Environment";
pub const FEATURE_FLAG: &str = "FeatureFlag";
