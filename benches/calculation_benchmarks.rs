//! Performance benchmarks for the Benefit Engine.
//!
//! Covers the three calculators called directly, the facade across every
//! jurisdiction, and a full round trip through the HTTP router.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use benefit_engine::api::{AppState, create_router};
use benefit_engine::calculation::{calculate_gratuity, calculate_leave, calculate_overtime};
use benefit_engine::config::{RuleRegistry, builtin};
use benefit_engine::facade::CalculationFacade;
use benefit_engine::models::{BenefitType, EmploymentInputs, OvertimeType, SeparationType};

use axum::{body::Body, http::Request};
use tower::ServiceExt;

fn gratuity_inputs() -> EmploymentInputs {
    EmploymentInputs::new(Decimal::from(3000), Decimal::new(75, 1))
        .with_separation(SeparationType::Resignation)
}

/// Benchmark: each calculator against the default rule set.
fn bench_calculators(c: &mut Criterion) {
    let rules = builtin::default_rule_set();
    let gratuity = gratuity_inputs();
    let overtime = EmploymentInputs::new(Decimal::from(2400), Decimal::ZERO)
        .with_overtime(Decimal::from(10), OvertimeType::Weekend);
    let leave = EmploymentInputs::new(Decimal::from(3000), Decimal::new(5, 1))
        .with_unused_leave_days(Decimal::from(5));

    let mut group = c.benchmark_group("calculators");
    group.bench_function("gratuity", |b| {
        b.iter(|| calculate_gratuity(black_box(&rules), black_box(&gratuity)))
    });
    group.bench_function("overtime", |b| {
        b.iter(|| calculate_overtime(black_box(&rules), black_box(&overtime)))
    });
    group.bench_function("leave", |b| {
        b.iter(|| calculate_leave(black_box(&rules), black_box(&leave)))
    });
    group.finish();
}

/// Benchmark: facade resolution and dispatch per jurisdiction.
fn bench_facade(c: &mut Criterion) {
    let facade = CalculationFacade::builtin();
    let inputs = gratuity_inputs();

    let mut group = c.benchmark_group("facade_gratuity");
    for code in ["AE", "SA", "QA", "KW", "BH", "OM", "ZZ"] {
        group.bench_with_input(BenchmarkId::from_parameter(code), &code, |b, code| {
            b.iter(|| facade.calculate(black_box(code), BenefitType::Gratuity, black_box(&inputs)))
        });
    }
    group.finish();
}

/// Benchmark: batches of gratuity calculations with varying service.
fn bench_batch(c: &mut Criterion) {
    let facade = CalculationFacade::builtin();

    let mut group = c.benchmark_group("batch_gratuity");
    for size in [100usize, 1000] {
        let batch: Vec<EmploymentInputs> = (0..size)
            .map(|i| EmploymentInputs::new(Decimal::from(3000 + i as i64), Decimal::new(i as i64 % 400, 1)))
            .collect();
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &batch, |b, batch| {
            b.iter(|| {
                batch
                    .iter()
                    .map(|inputs| facade.calculate("AE", BenefitType::Gratuity, inputs))
                    .filter(Result::is_ok)
                    .count()
            })
        });
    }
    group.finish();
}

/// Benchmark: full HTTP round trip through the router.
fn bench_api(c: &mut Criterion) {
    let runtime = tokio::runtime::Runtime::new().expect("Failed to create runtime");
    let router = create_router(AppState::new(RuleRegistry::builtin()));
    let body = serde_json::json!({
        "jurisdiction_code": "AE",
        "benefit_type": "gratuity",
        "monthly_salary": "3000",
        "years_of_service": "7.5",
        "separation_type": "termination"
    })
    .to_string();

    c.bench_function("api_calculate_gratuity", |b| {
        b.to_async(&runtime).iter(|| {
            let router = router.clone();
            let body = body.clone();
            async move {
                let request = Request::builder()
                    .method("POST")
                    .uri("/calculate")
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .expect("Failed to build request");
                router.oneshot(request).await
            }
        })
    });
}

criterion_group!(benches, bench_calculators, bench_facade, bench_batch, bench_api);
criterion_main!(benches);
