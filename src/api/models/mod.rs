// Models module - contains Environment, FeatureFlag and their request/patch types

pub mod environment;
pub mod feature_flag;
pub mod patch;

use chrono::{DateTime, Duration, Utc};

pub use environment::{
    CreateEnvironmentRequest, Environment, EnvironmentChanges, NewEnvironment,
    UpdateEnvironmentRequest,
};
pub use feature_flag::{
    CreateFeatureFlagRequest, FeatureFlag, FeatureFlagChanges, NewFeatureFlag,
    UpdateFeatureFlagRequest,
};

/// Timestamp for a mutation of a record last touched at `previous`.
///
/// Always strictly later than `previous`, even when the clock has not moved
/// (or moved backwards) since.
pub fn next_timestamp(previous: DateTime<Utc>) -> DateTime<Utc> {
    let now = Utc::now();
    if now > previous {
        now
    } else {
        previous + Duration::microseconds(1)
    }
}
