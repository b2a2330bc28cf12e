//! Run the same trial batch sequentially and in parallel, then print timings
//! and speedup.
//!
//! Usage: cargo run --release --bin benchmark_parallel_speedup

use std::time::Instant;

use yogg::combat::MinionSpec;
use yogg::stats::{run_monte_carlo, run_monte_carlo_parallel};

fn main() {
    let specs =
        MinionSpec::parse_str("4 2 d 2 2 p 3 3 1 4 5 1 d 2 6").expect("benchmark board parses");
    let seed = 12345u64;
    let trials = 200_000u64;

    println!(
        "Monte Carlo: {} trials on a {}-minion board",
        trials,
        specs.len()
    );
    println!();

    // Sequential
    let t0 = Instant::now();
    let tally_seq = run_monte_carlo(&specs, trials, seed);
    let elapsed_seq = t0.elapsed();
    let seq_ms = elapsed_seq.as_secs_f64() * 1000.0;
    println!(
        "Sequential:  {:.2} ms  ({:.1} trials/s)",
        seq_ms,
        trials as f64 / elapsed_seq.as_secs_f64()
    );

    // Parallel
    let t0 = Instant::now();
    let tally_par = run_monte_carlo_parallel(&specs, trials, seed);
    let elapsed_par = t0.elapsed();
    let par_ms = elapsed_par.as_secs_f64() * 1000.0;
    println!(
        "Parallel:    {:.2} ms  ({:.1} trials/s)",
        par_ms,
        trials as f64 / elapsed_par.as_secs_f64()
    );

    let speedup = seq_ms / par_ms;
    println!();
    println!("Speedup:     {:.2}x faster (parallel vs sequential)", speedup);

    // Per-trial seeding makes the partition invisible in the counters.
    assert_eq!(tally_seq, tally_par);
    println!("(Counters match sequential vs parallel)");
}
