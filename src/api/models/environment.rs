//! Environment model.
//!
//! An environment is a named deployment target (e.g. `development`,
//! `production`). At most one environment is the default at any time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::next_timestamp;

/// Environment record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Environment {
    /// Unique identifier, assigned on creation
    pub id: Uuid,
    /// Display name; flags reference environments by this value
    pub name: String,
    pub description: String,
    /// Whether this is the default environment
    pub is_default: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Environment {
    pub fn new(new: NewEnvironment) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: new.name,
            description: new.description,
            is_default: new.is_default,
            created_at: now,
            updated_at: now,
        }
    }

    /// Merge `changes` over this record and refresh `updated_at`.
    ///
    /// Does not touch any other environment; callers holding the collection
    /// are responsible for clearing a previous default first.
    pub fn apply(&mut self, changes: EnvironmentChanges) {
        if let Some(name) = changes.name {
            self.name = name;
        }
        if let Some(description) = changes.description {
            self.description = description;
        }
        if let Some(is_default) = changes.is_default {
            self.is_default = is_default;
        }
        self.touch();
    }

    pub fn touch(&mut self) {
        self.updated_at = next_timestamp(self.updated_at);
    }

    /// Case-insensitive name comparison.
    pub fn has_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}

/// Validated input for creating an environment
#[derive(Debug, Clone, PartialEq)]
pub struct NewEnvironment {
    pub name: String,
    pub description: String,
    pub is_default: bool,
}

impl NewEnvironment {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            is_default: false,
        }
    }

    pub fn default_environment(mut self) -> Self {
        self.is_default = true;
        self
    }
}

/// Validated partial update for an environment. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnvironmentChanges {
    pub name: Option<String>,
    pub description: Option<String>,
    pub is_default: Option<bool>,
}

/// Request to create an environment
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateEnvironmentRequest {
    pub name: Option<String>,
    /// Defaults to an empty string
    pub description: Option<String>,
    /// Defaults to `false`
    pub is_default: Option<bool>,
}

/// Request to update an environment
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEnvironmentRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub is_default: Option<bool>,
}
