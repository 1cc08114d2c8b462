// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Fitness metrics aggregation.
//!
//! Pure functions over an already-fetched activity window; callers decide
//! the window length and supply the slice.

use crate::models::{ActivityRecord, ActivityType, FitnessMetrics};
use crate::time_utils::week_start_sunday;
use chrono::{DateTime, NaiveDate, Utc};
use std::collections::{HashMap, HashSet};

/// Distance floor for pace eligibility; shorter recordings are GPS noise
/// or partial uploads.
const MIN_PACE_DISTANCE_METERS: f64 = 500.0;

/// Weighting of week coverage vs. distribution evenness in the consistency
/// score.
const WEEK_COVERAGE_WEIGHT: f64 = 0.6;
const DISTRIBUTION_WEIGHT: f64 = 0.4;

/// Consistency penalty per unit of standard deviation in per-week counts.
const DISPERSION_PENALTY: f64 = 20.0;

/// Derive normalized fitness metrics from an activity window.
///
/// `window_days` is the length of the window the caller fetched (default 90);
/// it sets the divisor for the weekly rates and the week count for the
/// consistency score.
pub fn compute_fitness_metrics(
    activities: &[ActivityRecord],
    window_days: u32,
) -> FitnessMetrics {
    if activities.is_empty() {
        return FitnessMetrics::empty();
    }

    let weeks = f64::from(window_days.max(1)) / 7.0;
    let total_distance_meters: f64 = activities.iter().map(|a| a.distance_meters).sum();
    let longest_activity_meters = activities
        .iter()
        .map(|a| a.distance_meters)
        .fold(0.0, f64::max);
    let activity_types: HashSet<ActivityType> =
        activities.iter().map(|a| a.activity_type).collect();

    FitnessMetrics {
        weekly_distance_meters: total_distance_meters / weeks,
        weekly_activity_count: activities.len() as f64 / weeks,
        average_pace_secs_per_km: average_pace(activities),
        activity_types,
        total_distance_meters,
        longest_activity_meters,
        consistency_score: consistency_score(activities, window_days),
    }
}

/// Distinct activity types observed on or after `since`.
///
/// The compatibility scorer takes a fresher slice (default 30 days) than the
/// metrics window, so recent habits dominate the overlap factor.
pub fn recent_activity_types(
    activities: &[ActivityRecord],
    since: DateTime<Utc>,
) -> HashSet<ActivityType> {
    activities
        .iter()
        .filter(|a| a.start_date >= since)
        .map(|a| a.activity_type)
        .collect()
}

/// Activity types ranked by frequency, most frequent first.
///
/// Convenience for profile display; membership checks use
/// [`FitnessMetrics::activity_types`] instead.
pub fn favorite_activities(activities: &[ActivityRecord], limit: usize) -> Vec<ActivityType> {
    let mut counts: HashMap<ActivityType, u32> = HashMap::new();
    for activity in activities {
        *counts.entry(activity.activity_type).or_insert(0) += 1;
    }

    let mut ranked: Vec<(ActivityType, u32)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.as_str().cmp(b.0.as_str())));
    ranked.into_iter().take(limit).map(|(t, _)| t).collect()
}

/// Mean pace in seconds per km over pace-eligible activities.
///
/// Eligible: pace-based type, positive average speed, distance over the
/// noise floor. Each activity weighs equally (not distance-weighted).
fn average_pace(activities: &[ActivityRecord]) -> Option<f64> {
    let paces: Vec<f64> = activities
        .iter()
        .filter(|a| {
            a.activity_type.is_pace_based()
                && a.average_speed_mps > 0.0
                && a.distance_meters > MIN_PACE_DISTANCE_METERS
        })
        .map(|a| 1000.0 / a.average_speed_mps)
        .collect();

    if paces.is_empty() {
        None
    } else {
        Some(paces.iter().sum::<f64>() / paces.len() as f64)
    }
}

/// 0-100 score of how evenly activity spreads across the window's weeks.
///
/// Week coverage (active weeks / total weeks) carries 60%; evenness of the
/// per-week counts (standard-deviation penalty) carries 40%.
fn consistency_score(activities: &[ActivityRecord], window_days: u32) -> u8 {
    let mut per_week: HashMap<NaiveDate, u32> = HashMap::new();
    for activity in activities {
        *per_week
            .entry(week_start_sunday(activity.start_date))
            .or_insert(0) += 1;
    }

    let total_weeks = (f64::from(window_days.max(1)) / 7.0).ceil();
    let week_coverage = (per_week.len() as f64 / total_weeks) * 100.0;

    let counts: Vec<f64> = per_week.values().map(|&c| f64::from(c)).collect();
    let distribution = (100.0 - DISPERSION_PENALTY * population_std_dev(&counts)).max(0.0);

    let score = WEEK_COVERAGE_WEIGHT * week_coverage + DISTRIBUTION_WEIGHT * distribution;
    score.round().clamp(0.0, 100.0) as u8
}

/// Population standard deviation (not the sample estimator).
fn population_std_dev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    variance.sqrt()
}
