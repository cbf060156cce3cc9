//! Application state management.
//!
//! Holds the one authoritative pair of stores, wrapped in their services, and
//! hands them to every route handler.

use std::sync::Arc;

use axum::extract::FromRef;

use crate::services::{EnvironmentService, FeatureFlagService};
use crate::storage::{
    EnvironmentStore, FeatureFlagStore, InMemoryEnvironmentStore, InMemoryFeatureFlagStore,
};

/// Application state shared across all route handlers.
#[derive(Clone)]
pub struct AppState {
    pub environments: EnvironmentService,
    pub feature_flags: FeatureFlagService,
}

impl AppState {
    pub fn new(
        environments: Arc<dyn EnvironmentStore>,
        feature_flags: Arc<dyn FeatureFlagStore>,
    ) -> Self {
        Self {
            environments: EnvironmentService::new(environments),
            feature_flags: FeatureFlagService::new(feature_flags),
        }
    }

    /// Empty in-memory stores.
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryEnvironmentStore::new()),
            Arc::new(InMemoryFeatureFlagStore::new()),
        )
    }

    /// In-memory stores populated with seed data. Seed flags are tagged with
    /// the default environment's name as it stands at this point.
    pub async fn seeded() -> Self {
        let environments = InMemoryEnvironmentStore::seeded();
        let feature_flags = InMemoryFeatureFlagStore::seeded(&environments).await;
        Self::new(Arc::new(environments), Arc::new(feature_flags))
    }
}

impl FromRef<AppState> for EnvironmentService {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.environments.clone()
    }
}

impl FromRef<AppState> for FeatureFlagService {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.feature_flags.clone()
    }
}
