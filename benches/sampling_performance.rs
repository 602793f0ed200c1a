//! Performance benchmarks for energy-curve sampling
//!
//! # What We're Measuring
//!
//! 1. **Point evaluation**: one Γ and Ω evaluation, per N
//!    - Cost is dominated by `powi` and the gamma function
//!
//! 2. **Curve sampling**: the full `LinearSampler` pass, per sample count
//!    - Time ∝ sample count
//!    - With the `parallel` feature, grids at or above the parallel
//!      threshold (4096 samples) are evaluated with Rayon
//!
//! 3. **Full report**: point values + 500-sample curve + contour
//!
//! # Running Benchmarks
//!
//! ```bash
//! cargo bench --bench sampling_performance
//!
//! # Sequential only
//! cargo bench --bench sampling_performance --no-default-features
//!
//! # Only the sampler group
//! cargo bench --bench sampling_performance curve
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use std::time::Duration;

use harmonic_rs::models::HarmonicOscillators;
use harmonic_rs::physics::{ComputationMode, StatisticalModel, SystemParameters};
use harmonic_rs::report::Report;
use harmonic_rs::sampling::{LinearSampler, Sampler, SamplingConfiguration, Scenario};

// =================================================================================================
// Benchmark Functions
// =================================================================================================

/// Γ and Ω at a single energy for growing N
fn benchmark_point_evaluation(c: &mut Criterion) {
    let mut group = c.benchmark_group("point_evaluation");

    for oscillators in [1u32, 10, 50, 100] {
        group.bench_with_input(
            BenchmarkId::from_parameter(oscillators),
            &oscillators,
            |b, &oscillators| {
                let params = SystemParameters::new(oscillators, 10.0, 1.0, 1.0, 1.0)
                    .expect("valid benchmark parameters");
                let model = HarmonicOscillators::new(params, ComputationMode::Dimensional);

                b.iter(|| black_box(&model).evaluate());
            },
        );
    }

    group.finish();
}

/// Full sampler pass for growing grids
///
/// 500 is the plotting default; 5_000 and 50_000 cross the parallel
/// threshold.
fn benchmark_curve_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("curve_sampling");
    group.measurement_time(Duration::from_secs(10));

    let params = SystemParameters::default();
    let sampler = LinearSampler::new();

    for samples in [500usize, 5_000, 50_000] {
        group.bench_with_input(BenchmarkId::from_parameter(samples), &samples, |b, &samples| {
            let model = HarmonicOscillators::new(params, ComputationMode::Dimensionless);
            let scenario = Scenario::new(Box::new(model));
            let config = SamplingConfiguration::default().with_sample_count(samples);

            b.iter(|| {
                sampler
                    .sample(black_box(&scenario), black_box(&config))
                    .expect("valid benchmark configuration")
            });
        });
    }

    group.finish();
}

/// One complete evaluation pass, as run after every input change
fn benchmark_report(c: &mut Criterion) {
    let mut group = c.benchmark_group("report");

    for oscillators in [1u32, 3] {
        let params = SystemParameters::default()
            .with_oscillators(oscillators)
            .expect("valid benchmark parameters");

        group.bench_with_input(BenchmarkId::from_parameter(oscillators), &params, |b, &params| {
            b.iter(|| {
                Report::compute(black_box(params), ComputationMode::Dimensional)
                    .expect("valid benchmark parameters")
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_point_evaluation,
    benchmark_curve_sampling,
    benchmark_report,
);

criterion_main!(benches);
