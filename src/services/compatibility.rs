// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Pairwise compatibility scoring.
//!
//! Pure functions over two profiles and their derived metrics. The recent
//! activity-type sets come from the caller (a fresher slice than the metrics
//! window) so the overlap factor tracks current habits.

use crate::models::{ActivityType, CompatibilityResult, FitnessMetrics, Profile};
use geo::{Distance, HaversineMeasure, Point};
use std::collections::HashSet;

/// Factor weights in the aggregate score. Fixed by design; they sum to 1.
const ACTIVITY_OVERLAP_WEIGHT: f64 = 0.4;
const PERFORMANCE_WEIGHT: f64 = 0.3;
const LOCATION_WEIGHT: f64 = 0.2;
const AGE_WEIGHT: f64 = 0.1;

/// Sub-weights inside the performance factor; they sum to 1.
const DISTANCE_SIM_WEIGHT: f64 = 0.4;
const ACTIVITY_SIM_WEIGHT: f64 = 0.4;
const PACE_SIM_WEIGHT: f64 = 0.2;

/// Distance at which location proximity bottoms out at 0.
const PROXIMITY_RANGE_KM: f64 = 100.0;

/// Age gap at which age compatibility bottoms out at 0.
const AGE_RANGE_YEARS: f64 = 20.0;

/// Mean Earth radius used for haversine distances.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Score a candidate pair.
pub fn score(
    a: &Profile,
    metrics_a: &FitnessMetrics,
    recent_types_a: &HashSet<ActivityType>,
    b: &Profile,
    metrics_b: &FitnessMetrics,
    recent_types_b: &HashSet<ActivityType>,
) -> CompatibilityResult {
    let activity_overlap = jaccard(recent_types_a, recent_types_b);
    let performance = performance_similarity(metrics_a, metrics_b);

    let distance_km = haversine_km(a.latitude, a.longitude, b.latitude, b.longitude);
    let location = (1.0 - distance_km / PROXIMITY_RANGE_KM).max(0.0);

    let age_gap = f64::from(a.age.abs_diff(b.age));
    let age = (1.0 - age_gap / AGE_RANGE_YEARS).max(0.0);

    let overall = 100.0
        * (ACTIVITY_OVERLAP_WEIGHT * activity_overlap
            + PERFORMANCE_WEIGHT * performance
            + LOCATION_WEIGHT * location
            + AGE_WEIGHT * age);

    CompatibilityResult {
        overall: overall.round() as u8,
        activity_overlap: to_percent(activity_overlap),
        performance_similarity: to_percent(performance),
        location_proximity: to_percent(location),
        age_compatibility: to_percent(age),
    }
}

/// Great-circle distance in kilometers on a 6371 km sphere.
///
/// Also used by the candidate ranker's distance filter.
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let sphere = HaversineMeasure::new(EARTH_RADIUS_KM);
    sphere.distance(Point::new(lon1, lat1), Point::new(lon2, lat2))
}

/// Jaccard similarity of two activity-type sets; 0 when either is empty.
fn jaccard(a: &HashSet<ActivityType>, b: &HashSet<ActivityType>) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let intersection = a.intersection(b).count() as f64;
    let union = a.union(b).count() as f64;
    intersection / union
}

/// Weighted similarity of weekly distance, weekly count and pace.
///
/// Pace is excluded from the penalty (treated as a perfect match) when
/// either side has no pace data; missing data is never worst-case data.
fn performance_similarity(a: &FitnessMetrics, b: &FitnessMetrics) -> f64 {
    let distance_sim = magnitude_similarity(a.weekly_distance_meters, b.weekly_distance_meters);
    let activity_sim = magnitude_similarity(a.weekly_activity_count, b.weekly_activity_count);
    let pace_sim = match (a.average_pace_secs_per_km, b.average_pace_secs_per_km) {
        (Some(pace_a), Some(pace_b)) => magnitude_similarity(pace_a, pace_b),
        _ => 1.0,
    };

    DISTANCE_SIM_WEIGHT * distance_sim + ACTIVITY_SIM_WEIGHT * activity_sim
        + PACE_SIM_WEIGHT * pace_sim
}

/// Relative similarity of two non-negative magnitudes: 1 when equal (or both
/// zero), 0 when maximally apart.
fn magnitude_similarity(a: f64, b: f64) -> f64 {
    let max = a.max(b);
    if max > 0.0 {
        1.0 - (a - b).abs() / max
    } else {
        1.0
    }
}

fn to_percent(factor: f64) -> u8 {
    (factor * 100.0).round() as u8
}
