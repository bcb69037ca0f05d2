//! Benchmarks for the Cadence analytics engines
//!
//! Run with: cargo bench

use cadence::{
    pearson, Activity, ActivityEntry, CorrelationConfig, CorrelationEngine, MetricEntry, Plan,
    PlanOutline, StreakConfig, StreakEngine,
};
use chrono::{Days, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

fn base_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

/// Daily ratings for one metric, cycling through the 1-5 scale
fn create_ratings(count: usize) -> Vec<MetricEntry> {
    (0..count)
        .map(|i| {
            let date = base_day() + Days::new(i as u64);
            MetricEntry::new(i as u32, 1, date, (i % 5) as u8 + 1)
        })
        .collect()
}

/// Entries for `activities` activities, each logged every `stride` days
fn create_activity_entries(days: usize, activities: u32, stride: usize) -> Vec<ActivityEntry> {
    let mut entries = Vec::new();
    let mut id = 0;
    for activity in 0..activities {
        for day in (activity as usize..days).step_by(stride) {
            let date = base_day() + Days::new(day as u64);
            entries.push(ActivityEntry::new(id, activity, date, 1.0));
            id += 1;
        }
    }
    entries
}

fn bench_pearson(c: &mut Criterion) {
    let mut group = c.benchmark_group("pearson");

    for size in [30, 365, 3650] {
        let x: Vec<f64> = (0..size).map(|i| (i % 5) as f64).collect();
        let y: Vec<f64> = (0..size).map(|i| (i % 2) as f64).collect();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_function(format!("pearson_{}", size), |b| {
            b.iter(|| pearson(black_box(&x), black_box(&y)))
        });
    }

    group.finish();
}

fn bench_correlation_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("correlation_scan");

    let engine = CorrelationEngine::new(CorrelationConfig::default());

    for (days, activities) in [(60, 10), (365, 10), (365, 50)] {
        let ratings = create_ratings(days);
        let entries = create_activity_entries(days, activities, 3);
        let activity_defs: Vec<Activity> = (0..activities)
            .map(|i| Activity::new(i, format!("activity-{}", i), "🏃", "times"))
            .collect();

        group.throughput(Throughput::Elements(activities as u64));
        group.bench_function(format!("scan_{}d_{}a", days, activities), |b| {
            b.iter(|| {
                engine.correlations_for_metric(
                    black_box(1),
                    black_box(&ratings),
                    black_box(&activity_defs),
                    black_box(&entries),
                )
            })
        });
    }

    group.finish();
}

fn bench_streak_walk(c: &mut Criterion) {
    let mut group = c.benchmark_group("streak_walk");

    let plan = Plan::new(
        1,
        "Run 3x a week",
        "🏃",
        PlanOutline::TimesPerWeek { target: 3 },
        vec![0],
    );

    for days in [60, 365] {
        let entries = create_activity_entries(days, 1, 2);
        let today = base_day() + Days::new(days as u64);
        let engine = StreakEngine::new(StreakConfig {
            time_range_days: days as u32,
        });

        group.bench_function(format!("walk_{}d", days), |b| {
            b.iter(|| engine.streak_for_plan(black_box(&plan), black_box(&entries), today))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_pearson,
    bench_correlation_scan,
    bench_streak_walk
);
criterion_main!(benches);
