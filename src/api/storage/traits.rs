//! Storage trait definitions for environments and feature flags.

use uuid::Uuid;

use super::StorageError;
use crate::models::{
    Environment, EnvironmentChanges, FeatureFlag, FeatureFlagChanges, NewEnvironment,
    NewFeatureFlag,
};

/// Environment collection.
///
/// Implementations must keep at most one environment marked default, and must
/// make the "clear previous default, then set new default" step atomic with
/// respect to every other operation.
#[async_trait::async_trait]
pub trait EnvironmentStore: Send + Sync {
    /// All environments in insertion order
    async fn list_all(&self) -> Vec<Environment>;

    async fn get_by_id(&self, id: Uuid) -> Result<Environment, StorageError>;

    /// Case-insensitive lookup. With duplicate names the first inserted wins.
    async fn get_by_name(&self, name: &str) -> Result<Environment, StorageError>;

    async fn get_default(&self) -> Result<Environment, StorageError>;

    async fn create(&self, new: NewEnvironment) -> Environment;

    async fn update(
        &self,
        id: Uuid,
        changes: EnvironmentChanges,
    ) -> Result<Environment, StorageError>;

    /// Fails with `Conflict` when `id` is the default environment.
    async fn remove(&self, id: Uuid) -> Result<(), StorageError>;
}

/// Feature flag collection
#[async_trait::async_trait]
pub trait FeatureFlagStore: Send + Sync {
    /// All flags in insertion order
    async fn list_all(&self) -> Vec<FeatureFlag>;

    async fn get_by_id(&self, id: Uuid) -> Result<FeatureFlag, StorageError>;

    /// Exact, case-sensitive match on the flag's environment name
    async fn list_by_environment(&self, environment: &str) -> Vec<FeatureFlag>;

    async fn create(&self, new: NewFeatureFlag) -> FeatureFlag;

    async fn update(
        &self,
        id: Uuid,
        changes: FeatureFlagChanges,
    ) -> Result<FeatureFlag, StorageError>;

    async fn toggle(&self, id: Uuid) -> Result<FeatureFlag, StorageError>;

    async fn remove(&self, id: Uuid) -> Result<(), StorageError>;
}
