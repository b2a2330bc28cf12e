//! Run the single-thread trial benchmark and optionally append one line to a
//! log file for trend tracking.
//!
//! Usage:
//!   cargo run --release --bin benchmark_trials
//!   cargo run --release --bin benchmark_trials -- --log
//!
//! --log  Append one row to benchmark_log.csv (date, trials_per_sec, trials_per_min, board_size).

use std::fs::OpenOptions;
use std::io::Write;
use std::time::Instant;

use yogg::combat::{simulate_board, MinionSpec, SimulationConfig, TraceMode};

fn main() {
    let log = std::env::args().any(|a| a == "--log");

    let specs =
        MinionSpec::parse_str("4 2 d 2 2 p 3 3 1 4 5 1 d 2 6").expect("benchmark board parses");
    let board_size = specs.len();

    // Run for at least this long or this many trials
    const MIN_DURATION_MS: u64 = 2000;
    const MIN_TRIALS: u64 = 50_000;

    let start = Instant::now();
    let mut trials: u64 = 0;
    while start.elapsed().as_millis() < MIN_DURATION_MS as u128 || trials < MIN_TRIALS {
        let _ = simulate_board(
            &specs,
            SimulationConfig {
                seed: trials,
                trace_mode: TraceMode::Off,
            },
        );
        trials += 1;
    }
    let elapsed_secs = start.elapsed().as_secs_f64();

    let trials_per_sec = trials as f64 / elapsed_secs;
    let trials_per_min = trials_per_sec * 60.0;

    println!("Trial benchmark ({} minions/board):", board_size);
    println!("  Trials:     {}", trials);
    println!("  Duration:   {:.2} s", elapsed_secs);
    println!("  Trials/s:   {:.2}", trials_per_sec);
    println!("  Trials/min: {:.2}", trials_per_min);

    if log {
        let date = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
        let line = format!(
            "{},{:.4},{:.4},{}\n",
            date, trials_per_sec, trials_per_min, board_size
        );
        let path = "benchmark_log.csv";
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .expect("open benchmark_log.csv for append");
        if file.metadata().map(|m| m.len() == 0).unwrap_or(true) {
            let _ = file.write_all(b"date,trials_per_sec,trials_per_min,board_size\n");
        }
        file.write_all(line.as_bytes())
            .expect("write benchmark_log.csv");
        file.flush().expect("flush benchmark_log.csv");
        println!("Appended to {}", path);
    }
}
