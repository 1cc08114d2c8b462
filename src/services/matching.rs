// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Candidate filtering, ranking and match lifecycle.
//!
//! Handles the core matching workflow:
//! 1. Load the requester's profile, preferences and activity window
//! 2. Build the candidate pool (excluding the requester and anyone already
//!    paired with them, in any status)
//! 3. Filter by age window, scoreability and distance
//! 4. Score survivors concurrently and drop those under the score floor
//! 5. Sort by score and paginate in memory

use crate::config::EngineConfig;
use crate::db::DataStore;
use crate::error::{MatchError, Result};
use crate::models::{
    ActivityRecord, ActivityType, CompatibilityResult, FitnessMetrics, Match, MatchStatus,
    MatchingPreferences, PreferencesUpdate, Profile,
};
use crate::services::cache::MetricsCache;
use crate::services::compatibility::{self, haversine_km};
use crate::services::metrics::{compute_fitness_metrics, recent_activity_types};
use chrono::{DateTime, Duration, Utc};
use futures_util::future::join_all;
use serde::Serialize;
use std::collections::HashSet;
use validator::Validate;

/// A scored candidate returned by [`MatchingService::find_matches`].
#[derive(Debug, Clone, Serialize)]
pub struct MatchCandidate {
    pub user_id: u64,
    /// Haversine distance from the requester, km
    pub distance_km: f64,
    pub compatibility: CompatibilityResult,
}

/// Candidate ranking and match lifecycle over a data store.
pub struct MatchingService<S> {
    db: S,
    config: EngineConfig,
    /// Caller-owned memoization of derived metrics; share one instance
    /// across the services that should reuse computations.
    metrics_cache: MetricsCache,
}

impl<S: DataStore> MatchingService<S> {
    pub fn new(db: S, config: EngineConfig, metrics_cache: MetricsCache) -> Self {
        Self {
            db,
            config,
            metrics_cache,
        }
    }

    /// Find compatible candidates for a user, ranked by descending score.
    ///
    /// `offset`/`limit` are applied after scoring and filtering: the
    /// candidate set size is unknown until every candidate is scored, so
    /// pagination is never pushed down to the store. Tie order between equal
    /// scores is unspecified.
    pub async fn find_matches(
        &self,
        requester_id: u64,
        limit: usize,
        offset: usize,
    ) -> Result<Vec<MatchCandidate>> {
        tracing::debug!(requester_id, limit, offset, "Finding matches");

        let now = Utc::now();
        let metrics_since = now - Duration::days(i64::from(self.config.metrics_window_days));
        let overlap_since = now - Duration::days(i64::from(self.config.overlap_window_days));

        // 1. Requester context; the four loads are independent.
        let (profile, preferences, activities, existing_matches) = tokio::try_join!(
            self.db.get_profile(requester_id),
            self.db.get_preferences(requester_id),
            self.db.get_activities_since(requester_id, metrics_since),
            self.db.get_matches_for_user(requester_id),
        )?;

        let profile = profile
            .ok_or_else(|| MatchError::NotFound(format!("Profile for user {requester_id}")))?;
        let preferences =
            preferences.unwrap_or_else(|| MatchingPreferences::default_for(requester_id));
        if activities.is_empty() {
            return Err(MatchError::NotFound(format!(
                "Fitness metrics for user {requester_id}"
            )));
        }
        let metrics = self.metrics_for(requester_id, &activities);
        let recent_types = recent_activity_types(&activities, overlap_since);

        // 2. Candidate pool: everyone except the requester and users already
        //    paired with them. Archived pairs stay excluded.
        let paired: HashSet<u64> = existing_matches
            .iter()
            .filter_map(|m| m.other(requester_id))
            .collect();

        let pool: Vec<(Profile, f64)> = self
            .db
            .list_profiles()
            .await?
            .into_iter()
            .filter(|p| p.user_id != requester_id && !paired.contains(&p.user_id))
            .filter(|p| p.age >= preferences.min_age && p.age <= preferences.max_age)
            .map(|p| {
                let distance_km =
                    haversine_km(profile.latitude, profile.longitude, p.latitude, p.longitude);
                (p, distance_km)
            })
            // Only the requester's own distance preference applies here; the
            // candidate's preference is not consulted.
            .filter(|(_, distance_km)| *distance_km <= preferences.max_distance_km)
            .collect();

        tracing::debug!(
            requester_id,
            pool_size = pool.len(),
            excluded_pairs = paired.len(),
            "Candidate pool built"
        );

        // 3. Score the pool; candidates are independent of each other.
        let scored = join_all(pool.iter().map(|(candidate, distance_km)| {
            self.score_candidate(
                &profile,
                &metrics,
                &recent_types,
                &preferences,
                candidate,
                *distance_km,
                metrics_since,
                overlap_since,
            )
        }))
        .await;

        let mut candidates = Vec::new();
        for result in scored {
            if let Some(candidate) = result? {
                if candidate.compatibility.overall >= preferences.min_compatibility_score {
                    candidates.push(candidate);
                }
            }
        }

        // 4. Rank and paginate.
        candidates.sort_by(|x, y| y.compatibility.overall.cmp(&x.compatibility.overall));
        let page: Vec<MatchCandidate> =
            candidates.into_iter().skip(offset).take(limit).collect();

        tracing::info!(
            requester_id,
            returned = page.len(),
            "Match candidates ranked"
        );
        Ok(page)
    }

    /// Score one candidate against the requester.
    ///
    /// Returns `None` for candidates that cannot be scored (no activities in
    /// the window) or whose types miss the requester's preferred set.
    #[allow(clippy::too_many_arguments)]
    async fn score_candidate(
        &self,
        requester: &Profile,
        requester_metrics: &FitnessMetrics,
        requester_recent: &HashSet<ActivityType>,
        preferences: &MatchingPreferences,
        candidate: &Profile,
        distance_km: f64,
        metrics_since: DateTime<Utc>,
        overlap_since: DateTime<Utc>,
    ) -> Result<Option<MatchCandidate>> {
        let activities = self
            .db
            .get_activities_since(candidate.user_id, metrics_since)
            .await?;
        if activities.is_empty() {
            return Ok(None);
        }

        let candidate_metrics = self.metrics_for(candidate.user_id, &activities);

        if !preferences.preferred_activity_types.is_empty()
            && candidate_metrics
                .activity_types
                .is_disjoint(&preferences.preferred_activity_types)
        {
            return Ok(None);
        }

        let candidate_recent = recent_activity_types(&activities, overlap_since);
        let compatibility = compatibility::score(
            requester,
            requester_metrics,
            requester_recent,
            candidate,
            &candidate_metrics,
            &candidate_recent,
        );

        Ok(Some(MatchCandidate {
            user_id: candidate.user_id,
            distance_km,
            compatibility,
        }))
    }

    /// Derive metrics through the shared cache.
    fn metrics_for(&self, user_id: u64, activities: &[ActivityRecord]) -> FitnessMetrics {
        if let Some(cached) = self.metrics_cache.get(user_id) {
            return cached;
        }
        let metrics = compute_fitness_metrics(activities, self.config.metrics_window_days);
        self.metrics_cache.insert(user_id, metrics.clone());
        metrics
    }

    // ─── Match Lifecycle ─────────────────────────────────────────

    /// Create a match between two users.
    ///
    /// Hard failures: self-match (`Validation`), existing match for the pair
    /// in either order (`Conflict`), or either user lacking a profile or
    /// scoreable activity history (`NotFound`).
    pub async fn create_match(&self, requester_id: u64, target_id: u64) -> Result<Match> {
        if requester_id == target_id {
            return Err(MatchError::Validation(
                "Cannot create a match with yourself".to_string(),
            ));
        }

        if self
            .db
            .get_match_for_pair(requester_id, target_id)
            .await?
            .is_some()
        {
            return Err(MatchError::Conflict(format!(
                "Match already exists between users {requester_id} and {target_id}"
            )));
        }

        let now = Utc::now();
        let metrics_since = now - Duration::days(i64::from(self.config.metrics_window_days));
        let overlap_since = now - Duration::days(i64::from(self.config.overlap_window_days));

        let (requester, target) = tokio::try_join!(
            self.scoring_inputs(requester_id, metrics_since),
            self.scoring_inputs(target_id, metrics_since),
        )?;

        let compatibility = compatibility::score(
            &requester.profile,
            &requester.metrics,
            &recent_activity_types(&requester.activities, overlap_since),
            &target.profile,
            &target.metrics,
            &recent_activity_types(&target.activities, overlap_since),
        );

        let m = Match::new(requester_id, target_id, compatibility.overall, now);
        self.db.insert_match(m.clone()).await?;

        tracing::info!(
            user_a = m.user_a,
            user_b = m.user_b,
            score = m.compatibility_score,
            "Match created"
        );
        Ok(m)
    }

    /// Archive the requester's match with another user.
    ///
    /// The requester names a pair they belong to, so membership holds by
    /// construction. Re-archiving an already archived match is the caller's
    /// guard.
    pub async fn archive_match(&self, requester_id: u64, other_id: u64) -> Result<Match> {
        let mut m = self
            .db
            .get_match_for_pair(requester_id, other_id)
            .await?
            .ok_or_else(|| {
                MatchError::NotFound(format!(
                    "Match between users {requester_id} and {other_id}"
                ))
            })?;

        m.status = MatchStatus::Archived;
        self.db.update_match(m.clone()).await?;

        tracing::info!(user_a = m.user_a, user_b = m.user_b, "Match archived");
        Ok(m)
    }

    /// All matches (any status) involving a user.
    pub async fn matches_for(&self, user_id: u64) -> Result<Vec<Match>> {
        self.db.get_matches_for_user(user_id).await
    }

    // ─── Preferences ─────────────────────────────────────────────

    /// A user's preferences, or the documented defaults when none stored.
    pub async fn preferences_for(&self, user_id: u64) -> Result<MatchingPreferences> {
        Ok(self
            .db
            .get_preferences(user_id)
            .await?
            .unwrap_or_else(|| MatchingPreferences::default_for(user_id)))
    }

    /// Validate and store a user's preferences.
    pub async fn update_preferences(
        &self,
        user_id: u64,
        update: PreferencesUpdate,
    ) -> Result<MatchingPreferences> {
        update
            .validate()
            .map_err(|e| MatchError::Validation(e.to_string()))?;
        if update.min_age > update.max_age {
            return Err(MatchError::Validation(
                "Minimum age cannot exceed maximum age".to_string(),
            ));
        }

        let preferences = update.into_preferences(user_id);
        self.db.set_preferences(preferences.clone()).await?;

        tracing::info!(user_id, "Matching preferences updated");
        Ok(preferences)
    }

    /// Profile, metrics and raw activities for one side of a pair.
    async fn scoring_inputs(
        &self,
        user_id: u64,
        metrics_since: DateTime<Utc>,
    ) -> Result<ScoringInputs> {
        let (profile, activities) = tokio::try_join!(
            self.db.get_profile(user_id),
            self.db.get_activities_since(user_id, metrics_since),
        )?;

        let profile =
            profile.ok_or_else(|| MatchError::NotFound(format!("Profile for user {user_id}")))?;
        if activities.is_empty() {
            return Err(MatchError::NotFound(format!(
                "Fitness metrics for user {user_id}"
            )));
        }
        let metrics = self.metrics_for(user_id, &activities);

        Ok(ScoringInputs {
            profile,
            metrics,
            activities,
        })
    }
}

struct ScoringInputs {
    profile: Profile,
    metrics: FitnessMetrics,
    activities: Vec<ActivityRecord>,
}
