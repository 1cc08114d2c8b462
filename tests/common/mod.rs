// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use chrono::{Duration, Utc};
use stride_match::config::EngineConfig;
use stride_match::db::MemoryDb;
use stride_match::models::{ActivityRecord, ActivityType, Profile};
use stride_match::services::{AdmissionGate, MatchingService, MetricsCache};

pub const NYC: (f64, f64) = (40.7128, -74.0060);

/// Initialize test logging once; safe to call from every test.
#[allow(dead_code)]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "stride_match=debug".into()),
        )
        .with_test_writer()
        .try_init();
}

/// Create a matching service over a fresh in-memory store.
#[allow(dead_code)]
pub fn create_test_matching() -> (MatchingService<MemoryDb>, MemoryDb) {
    let db = MemoryDb::new();
    let service = MatchingService::new(db.clone(), EngineConfig::default(), MetricsCache::new());
    (service, db)
}

/// Create an admission gate over a fresh in-memory store.
#[allow(dead_code)]
pub fn create_test_gate() -> (AdmissionGate<MemoryDb>, MemoryDb) {
    let db = MemoryDb::new();
    let gate = AdmissionGate::new(db.clone(), EngineConfig::default());
    (gate, db)
}

/// Seed a profile at the given coordinates.
#[allow(dead_code)]
pub fn seed_profile(db: &MemoryDb, user_id: u64, age: u32, coords: (f64, f64)) {
    db.upsert_profile(Profile {
        user_id,
        age,
        latitude: coords.0,
        longitude: coords.1,
    });
}

/// Build an activity `days_ago` days in the past.
#[allow(dead_code)]
pub fn make_activity(
    id: u64,
    user_id: u64,
    activity_type: ActivityType,
    days_ago: i64,
    distance_meters: f64,
    average_speed_mps: f64,
) -> ActivityRecord {
    ActivityRecord {
        id,
        user_id,
        activity_type,
        distance_meters,
        moving_time_secs: 3600,
        average_speed_mps,
        start_date: Utc::now() - Duration::days(days_ago),
        elevation_gain_meters: 50.0,
    }
}

/// Seed a user with `count` recent 5 km runs at a 300 s/km pace.
///
/// Activity IDs are derived from the user ID so seeded users never collide.
#[allow(dead_code)]
pub fn seed_runner(db: &MemoryDb, user_id: u64, age: u32, coords: (f64, f64), count: u64) {
    seed_profile(db, user_id, age, coords);
    for i in 0..count {
        db.insert_activity(make_activity(
            user_id * 1000 + i,
            user_id,
            ActivityType::Run,
            (i as i64 * 3) % 80,
            5_000.0,
            1000.0 / 300.0,
        ));
    }
}
