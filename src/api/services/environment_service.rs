//! Environment service: validation plus environment store access.

use std::sync::Arc;

use uuid::Uuid;

use super::ServiceError;
use super::validation::{validate_create_environment, validate_update_environment};
use crate::models::{CreateEnvironmentRequest, Environment, UpdateEnvironmentRequest};
use crate::storage::EnvironmentStore;

/// Service for managing environments.
#[derive(Clone)]
pub struct EnvironmentService {
    store: Arc<dyn EnvironmentStore>,
}

impl EnvironmentService {
    pub fn new(store: Arc<dyn EnvironmentStore>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Vec<Environment> {
        self.store.list_all().await
    }

    pub async fn get(&self, id: Uuid) -> Result<Environment, ServiceError> {
        Ok(self.store.get_by_id(id).await?)
    }

    pub async fn get_by_name(&self, name: &str) -> Result<Environment, ServiceError> {
        Ok(self.store.get_by_name(name).await?)
    }

    pub async fn get_default(&self) -> Result<Environment, ServiceError> {
        Ok(self.store.get_default().await?)
    }

    pub async fn create(
        &self,
        request: CreateEnvironmentRequest,
    ) -> Result<Environment, ServiceError> {
        let new = validate_create_environment(request)?;
        Ok(self.store.create(new).await)
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateEnvironmentRequest,
    ) -> Result<Environment, ServiceError> {
        let changes = validate_update_environment(request)?;
        Ok(self.store.update(id, changes).await?)
    }

    /// Delete an environment. The default environment cannot be deleted.
    pub async fn remove(&self, id: Uuid) -> Result<(), ServiceError> {
        Ok(self.store.remove(id).await?)
    }
}
