//! Performance benchmarks for the HR overtime toolkit.
//!
//! Covers the pure calculators, the employee registry and a full request
//! through the router:
//! - Overtime calculation
//! - Monthly timesheet (standard schedule)
//! - Registry append and listing
//! - `POST /` form request
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use std::str::FromStr;

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use hr_overtime::api::{AppState, create_router};
use hr_overtime::calculation::{compute_overtime, compute_timesheet, standard_schedule};
use hr_overtime::config::{ConfigLoader, TimesheetConfig};
use hr_overtime::export::timesheet_csv;
use hr_overtime::registry::EmployeeRegistry;

use axum::{body::Body, http::Request};
use tower::ServiceExt;

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

/// Benchmark: single overtime calculation.
fn bench_overtime(c: &mut Criterion) {
    let salary = dec("3517.43");
    let hours_50 = dec("12.5");
    let hours_100 = dec("4.25");

    c.bench_function("compute_overtime", |b| {
        b.iter(|| compute_overtime(black_box(salary), black_box(hours_50), black_box(hours_100)))
    });
}

/// Benchmark: a full month on the standard schedule, plus CSV rendering.
fn bench_timesheet(c: &mut Criterion) {
    let config = TimesheetConfig::default();
    let days = standard_schedule(2026, 1, &config).unwrap();
    let salary = dec("2200");

    c.bench_function("compute_timesheet_month", |b| {
        b.iter(|| compute_timesheet(2026, 1, black_box(salary), black_box(&days), &config))
    });

    let summary = compute_timesheet(2026, 1, salary, &days, &config).unwrap();
    c.bench_function("timesheet_csv_month", |b| {
        b.iter(|| timesheet_csv(black_box(&summary)))
    });
}

/// Benchmark: registry growth and snapshot cost at several sizes.
fn bench_registry(c: &mut Criterion) {
    let mut group = c.benchmark_group("registry");

    group.bench_function("register", |b| {
        let registry = EmployeeRegistry::new();
        b.iter(|| registry.register(black_box("Ana"), black_box("Analyst"), Decimal::from(3000)))
    });

    for size in [10usize, 100, 1000].iter() {
        let registry = EmployeeRegistry::new();
        for i in 0..*size {
            registry
                .register(&format!("Employee {}", i), "Operator", Decimal::from(1500))
                .unwrap();
        }

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("list_all", size), size, |b, _| {
            b.iter(|| black_box(registry.list_all()))
        });
    }

    group.finish();
}

/// Benchmark: overtime form request through the router.
fn bench_overtime_request(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(AppState::new(ConfigLoader::default()));

    c.bench_function("post_overtime_form", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/")
                        .header("Content-Type", "application/x-www-form-urlencoded")
                        .body(Body::from("salario=2200&he50=10&he100=5"))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

criterion_group!(
    benches,
    bench_overtime,
    bench_timesheet,
    bench_registry,
    bench_overtime_request,
);
criterion_main!(benches);
