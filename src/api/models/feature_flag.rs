//! Feature flag model.
//!
//! A flag is scoped to an environment by the environment's *name*. Nothing
//! keeps that reference in sync: renaming or deleting the environment leaves
//! the flag pointing at a name that no longer exists.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::next_timestamp;
use super::patch::deserialize_nullable;

/// Feature flag record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FeatureFlag {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub enabled: bool,
    /// Name of the environment this flag state applies to
    pub environment: String,
    pub owner: String,
    /// Refreshed on every mutation, toggle included
    pub last_modified: DateTime<Utc>,
    /// Gradual rollout share in `[0, 100]`. Informational only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rollout_percentage: Option<f64>,
    /// Names or ids of flags this one depends on. Not checked against existing flags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<Vec<String>>,
    /// Informational only; nothing disables a flag once it expires.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

impl FeatureFlag {
    pub fn new(new: NewFeatureFlag) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: new.name,
            description: new.description,
            enabled: new.enabled,
            environment: new.environment,
            owner: new.owner,
            last_modified: Utc::now(),
            rollout_percentage: new.rollout_percentage,
            dependencies: new.dependencies,
            expires_at: new.expires_at,
        }
    }

    /// Merge `changes` over this flag and advance `last_modified`.
    pub fn apply(&mut self, changes: FeatureFlagChanges) {
        if let Some(name) = changes.name {
            self.name = name;
        }
        if let Some(description) = changes.description {
            self.description = description;
        }
        if let Some(enabled) = changes.enabled {
            self.enabled = enabled;
        }
        if let Some(environment) = changes.environment {
            self.environment = environment;
        }
        if let Some(owner) = changes.owner {
            self.owner = owner;
        }
        if let Some(rollout_percentage) = changes.rollout_percentage {
            self.rollout_percentage = rollout_percentage;
        }
        if let Some(dependencies) = changes.dependencies {
            self.dependencies = dependencies;
        }
        if let Some(expires_at) = changes.expires_at {
            self.expires_at = expires_at;
        }
        self.touch();
    }

    /// Flip `enabled` and advance `last_modified`.
    pub fn toggle(&mut self) {
        self.enabled = !self.enabled;
        self.touch();
    }

    fn touch(&mut self) {
        self.last_modified = next_timestamp(self.last_modified);
    }
}

/// Validated input for creating a feature flag
#[derive(Debug, Clone, PartialEq)]
pub struct NewFeatureFlag {
    pub name: String,
    pub description: String,
    pub enabled: bool,
    pub environment: String,
    pub owner: String,
    pub rollout_percentage: Option<f64>,
    pub dependencies: Option<Vec<String>>,
    pub expires_at: Option<DateTime<Utc>>,
}

impl NewFeatureFlag {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        environment: impl Into<String>,
        owner: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            enabled: false,
            environment: environment.into(),
            owner: owner.into(),
            rollout_percentage: None,
            dependencies: None,
            expires_at: None,
        }
    }
}

/// Validated partial update for a feature flag.
///
/// The nullable fields are `Option<Option<T>>`:
/// - `None` = field not provided, don't update
/// - `Some(None)` = clear the field
/// - `Some(Some(v))` = set the field
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureFlagChanges {
    pub name: Option<String>,
    pub description: Option<String>,
    pub enabled: Option<bool>,
    pub environment: Option<String>,
    pub owner: Option<String>,
    pub rollout_percentage: Option<Option<f64>>,
    pub dependencies: Option<Option<Vec<String>>>,
    pub expires_at: Option<Option<DateTime<Utc>>>,
}

/// Request to create a feature flag
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateFeatureFlagRequest {
    pub name: Option<String>,
    /// Defaults to an empty string
    pub description: Option<String>,
    /// Defaults to `false`
    pub enabled: Option<bool>,
    pub environment: Option<String>,
    pub owner: Option<String>,
    pub rollout_percentage: Option<f64>,
    pub dependencies: Option<Vec<String>>,
    /// RFC 3339 timestamp or `YYYY-MM-DD`
    pub expires_at: Option<String>,
}

/// Request to update a feature flag. `null` clears an optional field.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFeatureFlagRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub enabled: Option<bool>,
    pub environment: Option<String>,
    pub owner: Option<String>,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    #[schema(value_type = Option<f64>)]
    pub rollout_percentage: Option<Option<f64>>,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    #[schema(value_type = Option<Vec<String>>)]
    pub dependencies: Option<Option<Vec<String>>>,
    /// RFC 3339 timestamp or `YYYY-MM-DD`
    #[serde(default, deserialize_with = "deserialize_nullable")]
    #[schema(value_type = Option<String>)]
    pub expires_at: Option<Option<String>>,
}
