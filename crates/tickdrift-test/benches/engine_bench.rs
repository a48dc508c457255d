//! Benchmarks for the simulation loop

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use rand::rngs::StdRng;
use rand::SeedableRng;

use tickdrift_clock::{AdjustmentStrategy, ClockModel, DaisyChainAdjustment};
use tickdrift_core::{AdjustmentKind, SimConfig};
use tickdrift_sim::{SimulationEngine, SkewSummary};

fn bench_engine_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine_run");
    for nodes in [4usize, 16, 64] {
        let config = SimConfig::new()
            .with_node_count(nodes)
            .with_sim_length(1_000)
            .with_jitter_tolerance(0.5)
            .with_seed(1);
        group.bench_with_input(BenchmarkId::from_parameter(nodes), &config, |b, config| {
            b.iter(|| {
                let engine = SimulationEngine::new(config.clone()).unwrap();
                black_box(engine.run())
            })
        });
    }
    group.finish();
}

fn bench_uncorrected_run(c: &mut Criterion) {
    let config = SimConfig::new()
        .with_sim_length(1_000)
        .with_adjustment(AdjustmentKind::None)
        .with_seed(1);

    c.bench_function("engine_run_uncorrected", |b| {
        b.iter(|| black_box(SimulationEngine::new(config.clone()).unwrap().run()))
    });
}

fn bench_clock_increment(c: &mut Criterion) {
    let model = ClockModel::new(1e-3, 1.0);
    let mut rng = StdRng::seed_from_u64(7);

    c.bench_function("clock_increment", |b| {
        b.iter(|| black_box(model.increment(black_box(4e7), &mut rng)))
    });
}

fn bench_daisy_chain_apply(c: &mut Criterion) {
    c.bench_function("daisy_chain_apply", |b| {
        b.iter(|| DaisyChainAdjustment.apply(black_box(80_400.0), black_box(79_600.0), black_box(2.0)))
    });
}

fn bench_skew_summary(c: &mut Criterion) {
    let config = SimConfig::new().with_node_count(16).with_sim_length(1_000).with_seed(3);
    let state = SimulationEngine::new(config).unwrap().run();

    c.bench_function("skew_summary", |b| {
        b.iter(|| black_box(SkewSummary::from_state(&state)))
    });
}

criterion_group!(
    benches,
    bench_engine_run,
    bench_uncorrected_run,
    bench_clock_increment,
    bench_daisy_chain_apply,
    bench_skew_summary,
);
criterion_main!(benches);
