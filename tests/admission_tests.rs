// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Admission gate and threshold administration tests.

use std::collections::HashSet;

use stride_match::error::MatchError;
use stride_match::models::{ActivityType, ThresholdUpdate};

mod common;
use common::{create_test_gate, make_activity, seed_profile, NYC};

const ADMIN: u64 = 900;
const USER: u64 = 1;

fn basic_update() -> ThresholdUpdate {
    ThresholdUpdate {
        min_weekly_distance_meters: 8_000.0,
        min_weekly_activities: 2.0,
        max_average_pace_secs_per_km: Some(360.0),
        allowed_activity_types: [ActivityType::Run, ActivityType::Ride]
            .into_iter()
            .collect(),
    }
}

#[tokio::test]
async fn test_no_threshold_admits_everyone() {
    common::init_tracing();
    let (gate, db) = create_test_gate();
    seed_profile(&db, USER, 25, NYC);

    let decision = gate.check_admission(USER).await.unwrap();

    assert!(decision.meets);
    assert_eq!(decision.score, 100);
    assert_eq!(decision.reasons, vec!["No fitness threshold configured"]);
}

#[tokio::test]
async fn test_active_user_passes_threshold() {
    let (gate, db) = create_test_gate();
    seed_profile(&db, USER, 25, NYC);
    // Two 5 km runs per week across the whole window at a 300 s/km pace.
    for week in 0..13i64 {
        for j in 0..2i64 {
            db.insert_activity(make_activity(
                (week * 10 + j) as u64,
                USER,
                ActivityType::Run,
                week * 7 + j,
                5_000.0,
                1000.0 / 300.0,
            ));
        }
    }

    gate.update_threshold(ADMIN, basic_update()).await.unwrap();
    let decision = gate.check_admission(USER).await.unwrap();

    assert!(decision.meets, "reasons: {:?}", decision.reasons);
    // distance -> activities -> pace -> types -> consistency bonus
    assert_eq!(decision.reasons.len(), 5);
    assert!(decision.reasons[0].contains("Weekly distance"));
    assert!(decision.reasons[1].contains("Weekly activity count"));
    assert!(decision.reasons[2].contains("Average pace"));
    assert!(decision.reasons[3].contains("allowed types"));
    assert!(decision.reasons[4].contains("Consistency bonus"));
}

#[tokio::test]
async fn test_sedentary_user_fails_threshold() {
    let (gate, db) = create_test_gate();
    seed_profile(&db, USER, 25, NYC);
    db.insert_activity(make_activity(1, USER, ActivityType::Run, 10, 5_000.0, 1000.0 / 300.0));

    gate.update_threshold(ADMIN, basic_update()).await.unwrap();
    let decision = gate.check_admission(USER).await.unwrap();

    assert!(!decision.meets);
    assert!(decision.score < 100);
}

#[tokio::test]
async fn test_pace_requirement_skipped_without_pace_data() {
    let (gate, db) = create_test_gate();
    seed_profile(&db, USER, 25, NYC);
    // Rides only: no pace-eligible activity, so no pace data exists.
    for week in 0..13i64 {
        for j in 0..2i64 {
            db.insert_activity(make_activity(
                (week * 10 + j) as u64,
                USER,
                ActivityType::Ride,
                week * 7 + j,
                20_000.0,
                8.0,
            ));
        }
    }

    gate.update_threshold(ADMIN, basic_update()).await.unwrap();
    let decision = gate.check_admission(USER).await.unwrap();

    // A strict pace limit is configured, but the user is never failed for
    // data they do not have.
    assert!(decision.meets, "reasons: {:?}", decision.reasons);
    assert!(!decision.reasons.iter().any(|r| r.contains("Average pace")));
}

#[tokio::test]
async fn test_threshold_update_is_validated() {
    let (gate, _db) = create_test_gate();

    let err = gate
        .update_threshold(
            ADMIN,
            ThresholdUpdate {
                min_weekly_distance_meters: -5.0,
                min_weekly_activities: 2.0,
                max_average_pace_secs_per_km: None,
                allowed_activity_types: HashSet::new(),
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(err, MatchError::Validation(_)));
    // The rejected update must not have become current.
    assert!(gate.current_threshold().await.unwrap().is_none());
}

#[tokio::test]
async fn test_threshold_updates_append_new_versions() {
    let (gate, _db) = create_test_gate();

    gate.update_threshold(ADMIN, basic_update()).await.unwrap();

    let mut stricter = basic_update();
    stricter.min_weekly_distance_meters = 20_000.0;
    gate.update_threshold(ADMIN, stricter).await.unwrap();

    let current = gate.current_threshold().await.unwrap().unwrap();
    assert_eq!(current.min_weekly_distance_meters, 20_000.0);
    assert_eq!(current.author_id, ADMIN);
}
