// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - the engine's business logic layer.

pub mod cache;
pub mod compatibility;
pub mod matching;
pub mod metrics;
pub mod threshold;

pub use cache::MetricsCache;
pub use compatibility::haversine_km;
pub use matching::{MatchCandidate, MatchingService};
pub use metrics::{compute_fitness_metrics, favorite_activities, recent_activity_types};
pub use threshold::{evaluate, AdmissionGate, ThresholdDecision};
