// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Admission threshold evaluation and administration.
//!
//! Handles the admission workflow:
//! 1. Fetch the user's activity window and the current threshold
//! 2. Derive fitness metrics
//! 3. Evaluate each configured check and build user-facing reasons
//!
//! No threshold configured means an automatic pass: the gate is opt-in for
//! the administrator, so absence is leniency, not an error.

use crate::config::EngineConfig;
use crate::db::DataStore;
use crate::error::{MatchError, Result};
use crate::models::{FitnessMetrics, FitnessThreshold, ThresholdUpdate};
use crate::services::metrics::compute_fitness_metrics;
use chrono::{Duration, Utc};
use serde::Serialize;
use validator::Validate;

/// Points granted per satisfied admission check.
const POINTS_PER_CHECK: f64 = 25.0;

/// Maximum consistency bonus points.
const CONSISTENCY_BONUS_MAX: f64 = 10.0;

/// Outcome of evaluating metrics against the admission threshold.
#[derive(Debug, Clone, Serialize)]
pub struct ThresholdDecision {
    /// Whether every evaluated check passed
    pub meets: bool,
    /// 0-100 summary of how close the user is to the bar
    pub score: u8,
    /// One user-facing line per evaluated check, in evaluation order,
    /// followed by the consistency-bonus line
    pub reasons: Vec<String>,
}

/// Evaluate fitness metrics against the configured threshold.
///
/// Checks are evaluated in a fixed order: weekly distance, weekly
/// activities, pace (only when both sides have pace data), activity types
/// (only when the threshold restricts them). A pace requirement is skipped,
/// never failed, for a user with no pace data.
pub fn evaluate(
    metrics: &FitnessMetrics,
    threshold: Option<&FitnessThreshold>,
) -> ThresholdDecision {
    let Some(threshold) = threshold else {
        return ThresholdDecision {
            meets: true,
            score: 100,
            reasons: vec!["No fitness threshold configured".to_string()],
        };
    };

    // (passed, reason) per evaluated check
    let mut checks: Vec<(bool, String)> = Vec::with_capacity(4);

    let distance_ok =
        metrics.weekly_distance_meters >= threshold.min_weekly_distance_meters;
    checks.push((
        distance_ok,
        format!(
            "Weekly distance {:.1} km {} the required {:.1} km",
            metrics.weekly_distance_meters / 1000.0,
            if distance_ok { "meets" } else { "is below" },
            threshold.min_weekly_distance_meters / 1000.0,
        ),
    ));

    let activities_ok = metrics.weekly_activity_count >= threshold.min_weekly_activities;
    checks.push((
        activities_ok,
        format!(
            "Weekly activity count {:.1} {} the required {:.1}",
            metrics.weekly_activity_count,
            if activities_ok { "meets" } else { "is below" },
            threshold.min_weekly_activities,
        ),
    ));

    if let (Some(max_pace), Some(pace)) = (
        threshold.max_average_pace_secs_per_km,
        metrics.average_pace_secs_per_km,
    ) {
        let pace_ok = pace <= max_pace;
        checks.push((
            pace_ok,
            format!(
                "Average pace {:.0} s/km {} the limit of {:.0} s/km",
                pace,
                if pace_ok { "is within" } else { "exceeds" },
                max_pace,
            ),
        ));
    }

    if !threshold.allowed_activity_types.is_empty() {
        let types_ok = !metrics
            .activity_types
            .is_disjoint(&threshold.allowed_activity_types);
        let mut allowed: Vec<&str> = threshold
            .allowed_activity_types
            .iter()
            .map(|t| t.as_str())
            .collect();
        allowed.sort_unstable();
        checks.push((
            types_ok,
            format!(
                "Activities {} the allowed types ({})",
                if types_ok { "include" } else { "include none of" },
                allowed.join(", "),
            ),
        ));
    }

    let meets = checks.iter().all(|(ok, _)| *ok);
    let satisfied = checks.iter().filter(|(ok, _)| *ok).count() as f64;
    let bonus = (f64::from(metrics.consistency_score) * 0.1).round();

    let earned = satisfied * POINTS_PER_CHECK + bonus;
    let possible = POINTS_PER_CHECK * checks.len() as f64 + CONSISTENCY_BONUS_MAX;
    let score = (earned / possible * 100.0).round() as u8;

    let mut reasons: Vec<String> = checks.into_iter().map(|(_, line)| line).collect();
    reasons.push(format!(
        "Consistency bonus: {:.0} of {:.0} points",
        bonus, CONSISTENCY_BONUS_MAX
    ));

    ThresholdDecision {
        meets,
        score,
        reasons,
    }
}

/// Gates new-user admission on the configured fitness threshold.
///
/// Administrator allow-list overrides happen in the caller, before this gate
/// is consulted.
pub struct AdmissionGate<S> {
    db: S,
    config: EngineConfig,
}

impl<S: DataStore> AdmissionGate<S> {
    pub fn new(db: S, config: EngineConfig) -> Self {
        Self { db, config }
    }

    /// Evaluate a prospective user's activity history against the current
    /// threshold.
    pub async fn check_admission(&self, user_id: u64) -> Result<ThresholdDecision> {
        let since = Utc::now() - Duration::days(i64::from(self.config.metrics_window_days));

        let (activities, threshold) = tokio::try_join!(
            self.db.get_activities_since(user_id, since),
            self.db.current_threshold(),
        )?;

        let metrics = compute_fitness_metrics(&activities, self.config.metrics_window_days);
        let decision = evaluate(&metrics, threshold.as_ref());

        tracing::info!(
            user_id,
            meets = decision.meets,
            score = decision.score,
            "Admission threshold evaluated"
        );

        Ok(decision)
    }

    /// Validate and append a new threshold version.
    ///
    /// The log is append-only; a rejected update leaves the current version
    /// untouched.
    pub async fn update_threshold(
        &self,
        author_id: u64,
        update: ThresholdUpdate,
    ) -> Result<FitnessThreshold> {
        update
            .validate()
            .map_err(|e| MatchError::Validation(e.to_string()))?;

        let version = update.into_version(author_id, Utc::now());
        self.db.append_threshold(version.clone()).await?;

        tracing::info!(author_id, "New fitness threshold version created");
        Ok(version)
    }

    /// The currently effective threshold, if any.
    pub async fn current_threshold(&self) -> Result<Option<FitnessThreshold>> {
        self.db.current_threshold().await
    }
}
