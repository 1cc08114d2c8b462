// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Administrator-configured admission threshold.

use crate::models::ActivityType;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use validator::Validate;

/// One immutable version of the admission threshold.
///
/// Updates append a new record rather than mutating the previous one; the
/// current threshold is the newest by `created_at`. The version log doubles
/// as the audit trail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FitnessThreshold {
    /// Minimum weekly distance, meters/week
    pub min_weekly_distance_meters: f64,
    /// Minimum activities per week
    pub min_weekly_activities: f64,
    /// Maximum allowed mean pace, seconds per km. None = no pace requirement.
    pub max_average_pace_secs_per_km: Option<f64>,
    /// Allowed activity types. Empty = no restriction.
    pub allowed_activity_types: HashSet<ActivityType>,
    /// Admin user who created this version
    pub author_id: u64,
    /// When this version was created
    pub created_at: DateTime<Utc>,
}

/// Admin payload for creating a new threshold version.
///
/// Validated before any store write; a rejected update leaves the current
/// threshold untouched.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ThresholdUpdate {
    #[validate(range(min = 0.0, message = "Weekly distance minimum cannot be negative"))]
    pub min_weekly_distance_meters: f64,

    #[validate(range(min = 0.0, message = "Weekly activity minimum cannot be negative"))]
    pub min_weekly_activities: f64,

    #[validate(range(
        min = 60.0,
        max = 3600.0,
        message = "Pace limit must be between 60 and 3600 seconds per km"
    ))]
    pub max_average_pace_secs_per_km: Option<f64>,

    #[serde(default)]
    pub allowed_activity_types: HashSet<ActivityType>,
}

impl ThresholdUpdate {
    /// Stamp a validated update into a new threshold version.
    pub fn into_version(self, author_id: u64, created_at: DateTime<Utc>) -> FitnessThreshold {
        FitnessThreshold {
            min_weekly_distance_meters: self.min_weekly_distance_meters,
            min_weekly_activities: self.min_weekly_activities,
            max_average_pace_secs_per_km: self.max_average_pace_secs_per_km,
            allowed_activity_types: self.allowed_activity_types,
            author_id,
            created_at,
        }
    }
}
