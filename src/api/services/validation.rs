//! Request validation shared by every adapter.
//!
//! Each function checks a raw request payload and turns it into the typed
//! input the stores accept. All problems are collected, not just the first.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use thiserror::Error;

use crate::models::{
    CreateEnvironmentRequest, CreateFeatureFlagRequest, EnvironmentChanges, FeatureFlagChanges,
    NewEnvironment, NewFeatureFlag, UpdateEnvironmentRequest, UpdateFeatureFlagRequest,
};

pub const MIN_ROLLOUT_PERCENTAGE: f64 = 0.0;
pub const MAX_ROLLOUT_PERCENTAGE: f64 = 100.0;

/// One or more invalid request fields.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("Validation failed: {}", .errors.join("; "))]
pub struct ValidationError {
    pub errors: Vec<String>,
}

impl ValidationError {
    pub fn new(errors: Vec<String>) -> Self {
        Self { errors }
    }
}

/// Accumulates field errors while a payload is checked.
#[derive(Default)]
struct Errors(Vec<String>);

impl Errors {
    fn push(&mut self, message: impl Into<String>) {
        self.0.push(message.into());
    }

    /// Required, non-blank string. Stored exactly as given.
    fn required(&mut self, field: &str, value: Option<String>) -> String {
        match value {
            Some(v) if !v.trim().is_empty() => v,
            _ => {
                self.push(format!("{field} is required"));
                String::new()
            }
        }
    }

    /// Optional string that must not be blank when present.
    fn non_blank(&mut self, field: &str, value: Option<String>) -> Option<String> {
        let value = value?;
        if value.trim().is_empty() {
            self.push(format!("{field} must not be empty"));
        }
        Some(value)
    }

    fn rollout_percentage(&mut self, value: Option<f64>) -> Option<f64> {
        let value = value?;
        if !value.is_finite() || !(MIN_ROLLOUT_PERCENTAGE..=MAX_ROLLOUT_PERCENTAGE).contains(&value)
        {
            self.push("rolloutPercentage must be between 0 and 100");
        }
        Some(value)
    }

    fn dependencies(&mut self, value: Option<Vec<String>>) -> Option<Vec<String>> {
        let value = value?;
        if value.iter().any(|d| d.trim().is_empty()) {
            self.push("dependencies must not contain empty names");
        }
        Some(value)
    }

    fn expires_at(&mut self, value: Option<String>) -> Option<DateTime<Utc>> {
        let value = value?;
        let parsed = parse_timestamp(&value);
        if parsed.is_none() {
            self.push(format!("expiresAt is not a valid date: {value}"));
        }
        parsed
    }

    fn finish<T>(self, value: T) -> Result<T, ValidationError> {
        if self.0.is_empty() {
            Ok(value)
        } else {
            Err(ValidationError::new(self.0))
        }
    }
}

/// Parse an RFC 3339 timestamp, or a bare `YYYY-MM-DD` date as midnight UTC.
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Some(timestamp.with_timezone(&Utc));
    }
    let date = NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()?;
    let midnight = date.and_hms_opt(0, 0, 0)?;
    Some(Utc.from_utc_datetime(&midnight))
}

pub fn validate_create_environment(
    request: CreateEnvironmentRequest,
) -> Result<NewEnvironment, ValidationError> {
    let mut errors = Errors::default();
    let new = NewEnvironment {
        name: errors.required("name", request.name),
        description: request.description.unwrap_or_default(),
        is_default: request.is_default.unwrap_or(false),
    };
    errors.finish(new)
}

pub fn validate_update_environment(
    request: UpdateEnvironmentRequest,
) -> Result<EnvironmentChanges, ValidationError> {
    let mut errors = Errors::default();
    let changes = EnvironmentChanges {
        name: errors.non_blank("name", request.name),
        description: request.description,
        is_default: request.is_default,
    };
    errors.finish(changes)
}

pub fn validate_create_feature_flag(
    request: CreateFeatureFlagRequest,
) -> Result<NewFeatureFlag, ValidationError> {
    let mut errors = Errors::default();
    let new = NewFeatureFlag {
        name: errors.required("name", request.name),
        description: request.description.unwrap_or_default(),
        enabled: request.enabled.unwrap_or(false),
        environment: errors.required("environment", request.environment),
        owner: errors.required("owner", request.owner),
        rollout_percentage: errors.rollout_percentage(request.rollout_percentage),
        dependencies: errors.dependencies(request.dependencies),
        expires_at: errors.expires_at(request.expires_at),
    };
    errors.finish(new)
}

pub fn validate_update_feature_flag(
    request: UpdateFeatureFlagRequest,
) -> Result<FeatureFlagChanges, ValidationError> {
    let mut errors = Errors::default();
    let changes = FeatureFlagChanges {
        name: errors.non_blank("name", request.name),
        description: request.description,
        enabled: request.enabled,
        environment: errors.non_blank("environment", request.environment),
        owner: errors.non_blank("owner", request.owner),
        rollout_percentage: request
            .rollout_percentage
            .map(|value| errors.rollout_percentage(value)),
        dependencies: request.dependencies.map(|value| errors.dependencies(value)),
        expires_at: request.expires_at.map(|value| errors.expires_at(value)),
    };
    errors.finish(changes)
}
