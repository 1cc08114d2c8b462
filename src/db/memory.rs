// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! In-memory reference store.

use crate::db::DataStore;
use crate::error::{MatchError, Result};
use crate::models::matches::normalize_pair;
use crate::models::{
    ActivityRecord, FitnessThreshold, Match, MatchingPreferences, Profile,
};
use chrono::{DateTime, Utc};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory [`DataStore`] backed by concurrent maps.
///
/// Used by the test suites and by callers embedding the engine without a
/// real backend. Cloning is cheap; clones share the same tables.
#[derive(Default, Clone)]
pub struct MemoryDb {
    profiles: Arc<DashMap<u64, Profile>>,
    /// Activities keyed by owning user
    activities: Arc<DashMap<u64, Vec<ActivityRecord>>>,
    preferences: Arc<DashMap<u64, MatchingPreferences>>,
    /// Append-only threshold version log
    thresholds: Arc<RwLock<Vec<FitnessThreshold>>>,
    /// Matches keyed by normalized pair
    matches: Arc<DashMap<(u64, u64), Match>>,
}

impl MemoryDb {
    pub fn new() -> Self {
        Self::default()
    }

    // ─── Seeding (the external sync process's side of the boundary) ──────

    pub fn upsert_profile(&self, profile: Profile) {
        self.profiles.insert(profile.user_id, profile);
    }

    pub fn insert_activity(&self, activity: ActivityRecord) {
        self.activities
            .entry(activity.user_id)
            .or_default()
            .push(activity);
    }

    /// Remove a user and everything keyed to them (privacy revocation).
    pub fn delete_user_data(&self, user_id: u64) {
        self.profiles.remove(&user_id);
        self.activities.remove(&user_id);
        self.preferences.remove(&user_id);
        self.matches.retain(|_, m| !m.involves(user_id));
    }
}

impl DataStore for MemoryDb {
    async fn get_profile(&self, user_id: u64) -> Result<Option<Profile>> {
        Ok(self.profiles.get(&user_id).map(|p| p.clone()))
    }

    async fn list_profiles(&self) -> Result<Vec<Profile>> {
        Ok(self.profiles.iter().map(|p| p.clone()).collect())
    }

    async fn get_activities_since(
        &self,
        user_id: u64,
        since: DateTime<Utc>,
    ) -> Result<Vec<ActivityRecord>> {
        Ok(self
            .activities
            .get(&user_id)
            .map(|list| {
                list.iter()
                    .filter(|a| a.start_date >= since)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn get_preferences(&self, user_id: u64) -> Result<Option<MatchingPreferences>> {
        Ok(self.preferences.get(&user_id).map(|p| p.clone()))
    }

    async fn set_preferences(&self, preferences: MatchingPreferences) -> Result<()> {
        self.preferences.insert(preferences.user_id, preferences);
        Ok(())
    }

    async fn current_threshold(&self) -> Result<Option<FitnessThreshold>> {
        let log = self.thresholds.read().await;
        Ok(log.iter().max_by_key(|t| t.created_at).cloned())
    }

    async fn append_threshold(&self, threshold: FitnessThreshold) -> Result<()> {
        self.thresholds.write().await.push(threshold);
        Ok(())
    }

    async fn get_match_for_pair(&self, first: u64, second: u64) -> Result<Option<Match>> {
        let key = normalize_pair(first, second);
        Ok(self.matches.get(&key).map(|m| m.clone()))
    }

    async fn get_matches_for_user(&self, user_id: u64) -> Result<Vec<Match>> {
        Ok(self
            .matches
            .iter()
            .filter(|m| m.involves(user_id))
            .map(|m| m.clone())
            .collect())
    }

    async fn insert_match(&self, m: Match) -> Result<()> {
        let key = (m.user_a, m.user_b);
        match self.matches.entry(key) {
            Entry::Occupied(_) => Err(MatchError::Conflict(format!(
                "Match already exists between users {} and {}",
                m.user_a, m.user_b
            ))),
            Entry::Vacant(slot) => {
                slot.insert(m);
                Ok(())
            }
        }
    }

    async fn update_match(&self, m: Match) -> Result<()> {
        let key = (m.user_a, m.user_b);
        match self.matches.entry(key) {
            Entry::Occupied(mut slot) => {
                slot.insert(m);
                Ok(())
            }
            Entry::Vacant(_) => Err(MatchError::NotFound(format!(
                "Match between users {} and {}",
                m.user_a, m.user_b
            ))),
        }
    }
}
