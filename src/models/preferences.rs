// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Per-user matching preferences.

use crate::models::ActivityType;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use validator::Validate;

/// A user's candidate-filtering preferences. One active record per user;
/// users without a stored record get the documented defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchingPreferences {
    /// Owning user ID
    pub user_id: u64,
    /// Youngest acceptable candidate age
    pub min_age: u32,
    /// Oldest acceptable candidate age
    pub max_age: u32,
    /// Maximum distance to a candidate, km
    pub max_distance_km: f64,
    /// Preferred candidate activity types. Empty = no restriction.
    pub preferred_activity_types: HashSet<ActivityType>,
    /// 0-100; candidates scoring below this are dropped
    pub min_compatibility_score: u8,
}

impl MatchingPreferences {
    /// Defaults applied when a user has no stored preference record:
    /// ages 18-65, 50 km, no type restriction, no score floor.
    pub fn default_for(user_id: u64) -> Self {
        Self {
            user_id,
            min_age: 18,
            max_age: 65,
            max_distance_km: 50.0,
            preferred_activity_types: HashSet::new(),
            min_compatibility_score: 0,
        }
    }
}

/// Payload for updating a user's preferences.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PreferencesUpdate {
    #[validate(range(min = 18, max = 120, message = "Minimum age must be between 18 and 120"))]
    pub min_age: u32,

    #[validate(range(min = 18, max = 120, message = "Maximum age must be between 18 and 120"))]
    pub max_age: u32,

    #[validate(range(
        min = 1.0,
        max = 20000.0,
        message = "Maximum distance must be between 1 and 20000 km"
    ))]
    pub max_distance_km: f64,

    #[serde(default)]
    pub preferred_activity_types: HashSet<ActivityType>,

    #[validate(range(max = 100, message = "Minimum compatibility score must be at most 100"))]
    pub min_compatibility_score: u8,
}

impl PreferencesUpdate {
    pub fn into_preferences(self, user_id: u64) -> MatchingPreferences {
        MatchingPreferences {
            user_id,
            min_age: self.min_age,
            max_age: self.max_age,
            max_distance_km: self.max_distance_km,
            preferred_activity_types: self.preferred_activity_types,
            min_compatibility_score: self.min_compatibility_score,
        }
    }
}
