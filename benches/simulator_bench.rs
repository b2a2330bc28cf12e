//! Trial throughput benchmarks: single induced-insanity trials per second.
//!
//! Run with: `cargo bench`
//! Results show mean time per trial across board sizes.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use yogg::combat::{simulate_board, MinionSpec, SimulationConfig, TraceMode};

fn board(tokens: &str) -> Vec<MinionSpec> {
    MinionSpec::parse_str(tokens).expect("benchmark board parses")
}

fn bench_simulator(c: &mut Criterion) {
    let config = SimulationConfig {
        seed: 7,
        trace_mode: TraceMode::Off,
    };

    let mut group = c.benchmark_group("simulator");
    group.sample_size(100);

    // Two minions, the smallest board that fights
    let pair = board("3 4 4 3");
    group.bench_with_input("trial_2_minions", &pair, |b, specs| {
        b.iter(|| black_box(simulate_board(specs, config)));
    });
    group.throughput(Throughput::Elements(1));

    // Typical full side of a board
    let side = board("4 2 d 2 2 p 3 3 1 4 5 1 d 2 6 3 2 p 1 1");
    group.bench_with_input("trial_8_minions", &side, |b, specs| {
        b.iter(|| black_box(simulate_board(specs, config)));
    });
    group.throughput(Throughput::Elements(1));

    // Both sides crammed together
    let crowd: Vec<MinionSpec> = side.iter().chain(side.iter()).copied().collect();
    group.bench_with_input("trial_16_minions", &crowd, |b, specs| {
        b.iter(|| black_box(simulate_board(specs, config)));
    });
    group.throughput(Throughput::Elements(1));

    group.finish();
}

criterion_group!(benches, bench_simulator);
criterion_main!(benches);
