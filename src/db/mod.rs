//! Data access layer.
//!
//! The engine never talks to storage directly; the surrounding application
//! implements [`DataStore`] over whatever backend it uses. [`MemoryDb`] is
//! the in-memory reference implementation used by the test suites and by
//! embedding callers.

pub mod memory;

pub use memory::MemoryDb;

use crate::error::Result;
use crate::models::{
    ActivityRecord, FitnessThreshold, Match, MatchingPreferences, Profile,
};
use chrono::{DateTime, Utc};
use std::future::Future;

/// Async store abstraction the collaborator implements.
///
/// All methods may be called concurrently; the engine issues independent
/// loads in parallel and performs no retries. Absent records are `Ok(None)`,
/// not errors; the services decide what absence means.
pub trait DataStore: Send + Sync {
    /// Fetch a user's profile slice.
    fn get_profile(&self, user_id: u64) -> impl Future<Output = Result<Option<Profile>>> + Send;

    /// All known profiles (the raw candidate pool).
    fn list_profiles(&self) -> impl Future<Output = Result<Vec<Profile>>> + Send;

    /// A user's activities with `start_date >= since`.
    fn get_activities_since(
        &self,
        user_id: u64,
        since: DateTime<Utc>,
    ) -> impl Future<Output = Result<Vec<ActivityRecord>>> + Send;

    /// A user's stored matching preferences, if any.
    fn get_preferences(
        &self,
        user_id: u64,
    ) -> impl Future<Output = Result<Option<MatchingPreferences>>> + Send;

    /// Replace a user's matching preferences.
    fn set_preferences(
        &self,
        preferences: MatchingPreferences,
    ) -> impl Future<Output = Result<()>> + Send;

    /// The most recently created threshold version, if any is configured.
    fn current_threshold(&self) -> impl Future<Output = Result<Option<FitnessThreshold>>> + Send;

    /// Append a new threshold version to the audit log.
    ///
    /// Serializing concurrent admin writes is the implementor's job; the
    /// engine assumes "current" is always a fully-written record.
    fn append_threshold(
        &self,
        threshold: FitnessThreshold,
    ) -> impl Future<Output = Result<()>> + Send;

    /// The match for an unordered user pair, in either order, any status.
    fn get_match_for_pair(
        &self,
        first: u64,
        second: u64,
    ) -> impl Future<Output = Result<Option<Match>>> + Send;

    /// All matches (any status) involving a user.
    fn get_matches_for_user(
        &self,
        user_id: u64,
    ) -> impl Future<Output = Result<Vec<Match>>> + Send;

    /// Persist a new match. Fails with `Conflict` if the pair already has one.
    fn insert_match(&self, m: Match) -> impl Future<Output = Result<()>> + Send;

    /// Replace the stored match for the pair. Fails with `NotFound` if absent.
    fn update_match(&self, m: Match) -> impl Future<Output = Result<()>> + Send;
}
