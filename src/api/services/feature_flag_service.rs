//! Feature flag service: validation plus feature flag store access.

use std::sync::Arc;

use uuid::Uuid;

use super::ServiceError;
use super::validation::{validate_create_feature_flag, validate_update_feature_flag};
use crate::models::{CreateFeatureFlagRequest, FeatureFlag, UpdateFeatureFlagRequest};
use crate::storage::FeatureFlagStore;

/// Service for managing feature flags.
#[derive(Clone)]
pub struct FeatureFlagService {
    store: Arc<dyn FeatureFlagStore>,
}

impl FeatureFlagService {
    pub fn new(store: Arc<dyn FeatureFlagStore>) -> Self {
        Self { store }
    }

    /// All flags, or only those tagged with `environment` (exact match).
    pub async fn list(&self, environment: Option<&str>) -> Vec<FeatureFlag> {
        match environment {
            Some(environment) => self.store.list_by_environment(environment).await,
            None => self.store.list_all().await,
        }
    }

    pub async fn get(&self, id: Uuid) -> Result<FeatureFlag, ServiceError> {
        Ok(self.store.get_by_id(id).await?)
    }

    pub async fn create(
        &self,
        request: CreateFeatureFlagRequest,
    ) -> Result<FeatureFlag, ServiceError> {
        let new = validate_create_feature_flag(request)?;
        Ok(self.store.create(new).await)
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateFeatureFlagRequest,
    ) -> Result<FeatureFlag, ServiceError> {
        let changes = validate_update_feature_flag(request)?;
        Ok(self.store.update(id, changes).await?)
    }

    pub async fn toggle(&self, id: Uuid) -> Result<FeatureFlag, ServiceError> {
        Ok(self.store.toggle(id).await?)
    }

    pub async fn remove(&self, id: Uuid) -> Result<(), ServiceError> {
        Ok(self.store.remove(id).await?)
    }
}
