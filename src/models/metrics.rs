//! Derived fitness metrics.
//!
//! Recomputed on demand from a window of activity records; never persisted
//! as a source of truth. Callers that want reuse across requests hold them
//! in an explicit [`crate::services::MetricsCache`].

use crate::models::ActivityType;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Normalized fitness metrics over a lookback window (default 90 days).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FitnessMetrics {
    /// Distance per week, meters
    pub weekly_distance_meters: f64,
    /// Activities per week
    pub weekly_activity_count: f64,
    /// Mean pace over pace-eligible activities, seconds per km.
    /// None when no qualifying activity exists in the window.
    pub average_pace_secs_per_km: Option<f64>,
    /// Distinct activity types observed in the window
    pub activity_types: HashSet<ActivityType>,
    /// Total distance across the window, meters
    pub total_distance_meters: f64,
    /// Longest single activity, meters
    pub longest_activity_meters: f64,
    /// 0-100: how evenly activity spreads across the window's weeks
    pub consistency_score: u8,
}

impl FitnessMetrics {
    /// Metrics for a user with no activities in the window.
    pub fn empty() -> Self {
        Self {
            weekly_distance_meters: 0.0,
            weekly_activity_count: 0.0,
            average_pace_secs_per_km: None,
            activity_types: HashSet::new(),
            total_distance_meters: 0.0,
            longest_activity_meters: 0.0,
            consistency_score: 0,
        }
    }
}
