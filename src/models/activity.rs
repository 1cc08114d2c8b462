// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Activity model as synced from the exercise provider.

use crate::error::MatchError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Category of an exercise session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivityType {
    Run,
    Ride,
    Swim,
    Hike,
    Walk,
    Yoga,
    Workout,
}

impl ActivityType {
    /// Types where pace (time per kilometer) is a meaningful measure.
    pub fn is_pace_based(self) -> bool {
        matches!(
            self,
            ActivityType::Run | ActivityType::Walk | ActivityType::Hike
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ActivityType::Run => "Run",
            ActivityType::Ride => "Ride",
            ActivityType::Swim => "Swim",
            ActivityType::Hike => "Hike",
            ActivityType::Walk => "Walk",
            ActivityType::Yoga => "Yoga",
            ActivityType::Workout => "Workout",
        }
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityType {
    type Err = MatchError;

    /// Parse the common provider spellings for each sport.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "run" | "running" => Ok(ActivityType::Run),
            "ride" | "bike" | "cycling" => Ok(ActivityType::Ride),
            "swim" | "swimming" => Ok(ActivityType::Swim),
            "hike" | "hiking" => Ok(ActivityType::Hike),
            "walk" | "walking" => Ok(ActivityType::Walk),
            "yoga" => Ok(ActivityType::Yoga),
            "workout" | "weighttraining" | "weight_training" => Ok(ActivityType::Workout),
            other => Err(MatchError::Validation(format!(
                "Unknown activity type: {other}"
            ))),
        }
    }
}

/// Stored activity record, created by the external sync process.
///
/// Immutable facts from the engine's point of view; the collaborator may
/// delete them (e.g. on privacy revocation) but never mutates them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityRecord {
    /// Provider activity ID (also used as document ID)
    pub id: u64,
    /// Owning user ID
    pub user_id: u64,
    /// Activity type (Run, Ride, Hike, etc.)
    pub activity_type: ActivityType,
    /// Distance in meters
    pub distance_meters: f64,
    /// Moving time in seconds
    pub moving_time_secs: u32,
    /// Average speed in meters/second
    pub average_speed_mps: f64,
    /// Start date/time (UTC)
    pub start_date: DateTime<Utc>,
    /// Elevation gain in meters
    pub elevation_gain_meters: f64,
}
