// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the engine.

pub mod activity;
pub mod compatibility;
pub mod matches;
pub mod metrics;
pub mod preferences;
pub mod threshold;
pub mod user;

pub use activity::{ActivityRecord, ActivityType};
pub use compatibility::CompatibilityResult;
pub use matches::{Match, MatchStatus};
pub use metrics::FitnessMetrics;
pub use preferences::{MatchingPreferences, PreferencesUpdate};
pub use threshold::{FitnessThreshold, ThresholdUpdate};
pub use user::Profile;
