use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::collections::HashSet;
use stride_match::models::{ActivityType, FitnessMetrics, Profile};
use stride_match::services::compatibility;

fn profile(user_id: u64, age: u32, latitude: f64, longitude: f64) -> Profile {
    Profile {
        user_id,
        age,
        latitude,
        longitude,
    }
}

fn metrics(weekly_distance: f64, pace: Option<f64>) -> FitnessMetrics {
    FitnessMetrics {
        weekly_distance_meters: weekly_distance,
        weekly_activity_count: weekly_distance / 10_000.0,
        average_pace_secs_per_km: pace,
        activity_types: [ActivityType::Run, ActivityType::Ride].into_iter().collect(),
        total_distance_meters: weekly_distance * 13.0,
        longest_activity_meters: weekly_distance / 2.0,
        consistency_score: 75,
    }
}

fn benchmark_pairwise_score(c: &mut Criterion) {
    let requester = profile(1, 28, 40.7128, -74.0060);
    let requester_metrics = metrics(45_000.0, Some(310.0));
    let requester_types: HashSet<ActivityType> =
        [ActivityType::Run, ActivityType::Ride].into_iter().collect();

    // A synthetic pool spread over ~1 degree of latitude and a range of
    // volumes, so every factor does real work.
    let pool: Vec<(Profile, FitnessMetrics, HashSet<ActivityType>)> = (0..1_000u64)
        .map(|i| {
            let lat = 40.0 + (i as f64) * 0.001;
            let candidate = profile(100 + i, 20 + (i % 30) as u32, lat, -74.0);
            let candidate_metrics = metrics(
                10_000.0 + (i as f64) * 100.0,
                if i % 3 == 0 { None } else { Some(250.0 + (i % 200) as f64) },
            );
            let types: HashSet<ActivityType> = if i % 2 == 0 {
                [ActivityType::Run].into_iter().collect()
            } else {
                [ActivityType::Swim, ActivityType::Yoga].into_iter().collect()
            };
            (candidate, candidate_metrics, types)
        })
        .collect();

    let mut group = c.benchmark_group("compatibility");

    group.bench_function("score_single_pair", |b| {
        let (candidate, candidate_metrics, candidate_types) = &pool[0];
        b.iter(|| {
            compatibility::score(
                black_box(&requester),
                black_box(&requester_metrics),
                black_box(&requester_types),
                black_box(candidate),
                black_box(candidate_metrics),
                black_box(candidate_types),
            )
        })
    });

    group.bench_function("score_pool_of_1000", |b| {
        b.iter(|| {
            pool.iter()
                .map(|(candidate, candidate_metrics, candidate_types)| {
                    compatibility::score(
                        &requester,
                        &requester_metrics,
                        &requester_types,
                        black_box(candidate),
                        candidate_metrics,
                        candidate_types,
                    )
                    .overall
                })
                .max()
        })
    });

    group.finish();
}

criterion_group!(benches, benchmark_pairwise_score);
criterion_main!(benches);
