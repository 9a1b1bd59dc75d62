//! Performance benchmarks for the wage engine.
//!
//! This benchmark suite covers:
//! - The pure pay pipeline for a standard and an overnight schedule
//! - The pipeline with its audit trail under a loaded policy
//! - A full `/calculate` round trip through the router
//! - Batches of schedules priced back to back
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use std::collections::BTreeSet;

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use wage_engine::api::{AppState, CalculationRequest, create_router};
use wage_engine::calculation::{calculate_pay, compute_pay};
use wage_engine::config::ConfigLoader;
use wage_engine::models::{WorkDay, WorkSchedule};

use axum::{body::Body, http::Request};
use tower::ServiceExt;

/// Creates a test state with loaded configuration.
fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/kr_lsa").expect("Failed to load config");
    AppState::new(config)
}

/// A 22:00-06:00 schedule, which exercises the night window.
fn overnight_schedule() -> WorkSchedule {
    WorkSchedule {
        hourly_wage: 10_320,
        work_days: WorkDay::WEEKDAYS.iter().copied().collect(),
        work_start_time: "22:00".to_string(),
        work_end_time: "06:00".to_string(),
        break_minutes: 60,
    }
}

/// Builds `count` schedules that vary in days, hours and wage.
fn create_schedules(count: usize) -> Vec<WorkSchedule> {
    (0..count)
        .map(|i| {
            let days = i % 7 + 1;
            let start = (i * 37) % 1440;
            let end = (start + 240 + (i * 13) % 600) % 1440;
            WorkSchedule {
                hourly_wage: 10_030 + (i as u64 % 50) * 100,
                work_days: WorkDay::ALL.iter().take(days).copied().collect::<BTreeSet<_>>(),
                work_start_time: format!("{:02}:{:02}", start / 60, start % 60),
                work_end_time: format!("{:02}:{:02}", end / 60, end % 60),
                break_minutes: (i % 4) as u32 * 30,
            }
        })
        .collect()
}

/// Benchmark: the pure pipeline without audit consumers.
fn bench_compute_pay(c: &mut Criterion) {
    let standard = WorkSchedule::default();
    let overnight = overnight_schedule();

    c.bench_function("compute_pay_standard", |b| {
        b.iter(|| compute_pay(black_box(&standard)).unwrap())
    });
    c.bench_function("compute_pay_overnight", |b| {
        b.iter(|| compute_pay(black_box(&overnight)).unwrap())
    });
}

/// Benchmark: the pipeline with its audit trail under the loaded policy.
fn bench_calculate_pay(c: &mut Criterion) {
    let config = ConfigLoader::load("./config/kr_lsa").expect("Failed to load config");
    let schedule = WorkSchedule::default();

    c.bench_function("calculate_pay_with_audit", |b| {
        b.iter(|| calculate_pay(black_box(&schedule), config.policy()).unwrap())
    });
}

/// Benchmark: one `/calculate` request through the router.
fn bench_api_request(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(create_test_state());
    let request = CalculationRequest {
        schedule: WorkSchedule::default(),
        reference_date: None,
    };
    let body = serde_json::to_string(&request).unwrap();

    c.bench_function("api_calculate", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/calculate")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

/// Benchmark: batches of varied schedules.
fn bench_batches(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch");

    for size in [100, 1000] {
        let schedules = create_schedules(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &schedules, |b, schedules| {
            b.iter(|| {
                for schedule in schedules {
                    black_box(compute_pay(schedule).unwrap());
                }
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_compute_pay,
    bench_calculate_pay,
    bench_api_request,
    bench_batches,
);
criterion_main!(benches);
