//! In-memory store implementations.
//!
//! Each store keeps its records in a `Vec` behind a `tokio::sync::RwLock`.
//! Every mutation holds the write lock for its whole duration, so the
//! clear-then-set of the default environment is never observed half done.

use tokio::sync::RwLock;
use uuid::Uuid;

use super::seed;
use super::traits::{EnvironmentStore, FeatureFlagStore};
use super::{ENVIRONMENT, FEATURE_FLAG, StorageError};
use crate::models::{
    Environment, EnvironmentChanges, FeatureFlag, FeatureFlagChanges, NewEnvironment,
    NewFeatureFlag,
};

/// In-memory environment storage.
pub struct InMemoryEnvironmentStore {
    environments: RwLock<Vec<Environment>>,
}

impl InMemoryEnvironmentStore {
    pub fn new() -> Self {
        Self::with_seed(Vec::new())
    }

    /// Build a store pre-populated with `seed`, applied in order as creates.
    pub fn with_seed(seed: Vec<NewEnvironment>) -> Self {
        let mut environments = Vec::with_capacity(seed.len());
        for new in seed {
            insert_environment(&mut environments, new);
        }
        Self {
            environments: RwLock::new(environments),
        }
    }

    /// Store populated with the standard seed environments.
    pub fn seeded() -> Self {
        Self::with_seed(seed::environments())
    }
}

impl Default for InMemoryEnvironmentStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Unset `is_default` on every environment except `keep`.
fn clear_default(environments: &mut [Environment], keep: Option<Uuid>) {
    for environment in environments
        .iter_mut()
        .filter(|e| e.is_default && Some(e.id) != keep)
    {
        environment.is_default = false;
        environment.touch();
    }
}

fn insert_environment(environments: &mut Vec<Environment>, new: NewEnvironment) -> Environment {
    if new.is_default {
        clear_default(environments, None);
    }
    let environment = Environment::new(new);
    environments.push(environment.clone());
    environment
}

fn environment_index(environments: &[Environment], id: Uuid) -> Result<usize, StorageError> {
    environments
        .iter()
        .position(|e| e.id == id)
        .ok_or_else(|| StorageError::not_found(ENVIRONMENT, id))
}

#[async_trait::async_trait]
impl EnvironmentStore for InMemoryEnvironmentStore {
    async fn list_all(&self) -> Vec<Environment> {
        self.environments.read().await.clone()
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Environment, StorageError> {
        let environments = self.environments.read().await;
        let index = environment_index(&environments, id)?;
        Ok(environments[index].clone())
    }

    async fn get_by_name(&self, name: &str) -> Result<Environment, StorageError> {
        let environments = self.environments.read().await;
        environments
            .iter()
            .find(|e| e.has_name(name))
            .cloned()
            .ok_or_else(|| StorageError::not_found(ENVIRONMENT, name))
    }

    async fn get_default(&self) -> Result<Environment, StorageError> {
        let environments = self.environments.read().await;
        environments
            .iter()
            .find(|e| e.is_default)
            .cloned()
            .ok_or_else(|| StorageError::not_found(ENVIRONMENT, "default"))
    }

    async fn create(&self, new: NewEnvironment) -> Environment {
        let mut environments = self.environments.write().await;
        insert_environment(&mut environments, new)
    }

    async fn update(
        &self,
        id: Uuid,
        changes: EnvironmentChanges,
    ) -> Result<Environment, StorageError> {
        let mut environments = self.environments.write().await;
        let index = environment_index(&environments, id)?;

        if changes.is_default == Some(true) && !environments[index].is_default {
            clear_default(&mut environments, Some(id));
        }

        let environment = &mut environments[index];
        environment.apply(changes);
        Ok(environment.clone())
    }

    async fn remove(&self, id: Uuid) -> Result<(), StorageError> {
        let mut environments = self.environments.write().await;
        let index = environment_index(&environments, id)?;

        if environments[index].is_default {
            return Err(StorageError::Conflict(format!(
                "Cannot delete the default environment '{}'",
                environments[index].name
            )));
        }

        environments.remove(index);
        Ok(())
    }
}

/// In-memory feature flag storage.
pub struct InMemoryFeatureFlagStore {
    flags: RwLock<Vec<FeatureFlag>>,
}

impl InMemoryFeatureFlagStore {
    pub fn new() -> Self {
        Self::with_seed(Vec::new())
    }

    pub fn with_seed(seed: Vec<NewFeatureFlag>) -> Self {
        Self {
            flags: RwLock::new(seed.into_iter().map(FeatureFlag::new).collect()),
        }
    }

    /// Store populated with the standard seed flags, scoped to the current
    /// default environment of `environments`.
    ///
    /// The environment name is read once here; later changes to the default
    /// environment do not affect the seeded flags.
    pub async fn seeded(environments: &dyn EnvironmentStore) -> Self {
        let environment = match environments.get_default().await {
            Ok(environment) => environment.name,
            Err(_) => seed::FALLBACK_ENVIRONMENT.to_string(),
        };
        Self::with_seed(seed::feature_flags(&environment))
    }
}

impl Default for InMemoryFeatureFlagStore {
    fn default() -> Self {
        Self::new()
    }
}

fn flag_index(flags: &[FeatureFlag], id: Uuid) -> Result<usize, StorageError> {
    flags
        .iter()
        .position(|f| f.id == id)
        .ok_or_else(|| StorageError::not_found(FEATURE_FLAG, id))
}

#[async_trait::async_trait]
impl FeatureFlagStore for InMemoryFeatureFlagStore {
    async fn list_all(&self) -> Vec<FeatureFlag> {
        self.flags.read().await.clone()
    }

    async fn get_by_id(&self, id: Uuid) -> Result<FeatureFlag, StorageError> {
        let flags = self.flags.read().await;
        let index = flag_index(&flags, id)?;
        Ok(flags[index].clone())
    }

    async fn list_by_environment(&self, environment: &str) -> Vec<FeatureFlag> {
        self.flags
            .read()
            .await
            .iter()
            .filter(|f| f.environment == environment)
            .cloned()
            .collect()
    }

    async fn create(&self, new: NewFeatureFlag) -> FeatureFlag {
        let flag = FeatureFlag::new(new);
        self.flags.write().await.push(flag.clone());
        flag
    }

    async fn update(
        &self,
        id: Uuid,
        changes: FeatureFlagChanges,
    ) -> Result<FeatureFlag, StorageError> {
        let mut flags = self.flags.write().await;
        let index = flag_index(&flags, id)?;
        let flag = &mut flags[index];
        flag.apply(changes);
        Ok(flag.clone())
    }

    async fn toggle(&self, id: Uuid) -> Result<FeatureFlag, StorageError> {
        let mut flags = self.flags.write().await;
        let index = flag_index(&flags, id)?;
        let flag = &mut flags[index];
        flag.toggle();
        Ok(flag.clone())
    }

    async fn remove(&self, id: Uuid) -> Result<(), StorageError> {
        let mut flags = self.flags.write().await;
        let index = flag_index(&flags, id)?;
        flags.remove(index);
        Ok(())
    }
}
