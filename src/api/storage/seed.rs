//! Seed data loaded at process start.

use chrono::{Duration, Utc};

use crate::models::{NewEnvironment, NewFeatureFlag};

/// Environment name used for seed flags when no default environment exists.
pub const FALLBACK_ENVIRONMENT: &str = "development";

pub fn environments() -> Vec<NewEnvironment> {
    vec![
        NewEnvironment::new("development", "Local and shared development").default_environment(),
        NewEnvironment::new("staging", "Pre-production verification"),
        NewEnvironment::new("production", "Live customer traffic"),
    ]
}

pub fn feature_flags(environment: &str) -> Vec<NewFeatureFlag> {
    let mut new_dashboard = NewFeatureFlag::new(
        "new-dashboard",
        "Redesigned landing dashboard",
        environment,
        "web-platform",
    );
    new_dashboard.enabled = true;
    new_dashboard.rollout_percentage = Some(25.0);

    let dark_mode = NewFeatureFlag::new(
        "dark-mode",
        "Dark colour scheme for all pages",
        environment,
        "design-system",
    );

    let mut beta_checkout = NewFeatureFlag::new(
        "beta-checkout",
        "Single-page checkout flow",
        environment,
        "payments",
    );
    beta_checkout.rollout_percentage = Some(10.0);
    beta_checkout.dependencies = Some(vec!["new-dashboard".to_string()]);
    beta_checkout.expires_at = Some(Utc::now() + Duration::days(90));

    vec![new_dashboard, dark_mode, beta_checkout]
}
