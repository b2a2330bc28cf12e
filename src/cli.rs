use std::env;
use std::fmt;
use std::str::FromStr;

use crate::combat::{entropy_seed, simulate_board, MinionSpec, SimulationConfig, TraceMode};
use crate::parallel::{run_trial_batches, Progress, WorkerPool};
use crate::server;

const DEFAULT_TRIALS: u64 = 1_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Serve,
    Simulate,
}

pub fn parse_command(args: &[String]) -> Option<Command> {
    match args.get(1).map(String::as_str) {
        Some("serve") => Some(Command::Serve),
        Some("simulate") => Some(Command::Simulate),
        _ => None,
    }
}

pub fn run_with_args(args: &[String]) -> i32 {
    match parse_command(args) {
        Some(Command::Serve) => handle_serve(),
        Some(Command::Simulate) => handle_simulate(args),
        None => {
            eprintln!("usage: yogg <simulate|serve>");
            2
        }
    }
}

fn handle_serve() -> i32 {
    let bind_addr = env::var("YOGG_BIND").unwrap_or_else(|_| "127.0.0.1:3000".to_string());
    match server::run_server(&bind_addr) {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("server error: {err}");
            1
        }
    }
}

fn handle_simulate(args: &[String]) -> i32 {
    let parsed = match parse_simulate_args(args) {
        Ok(parsed) => parsed,
        Err(message) => {
            eprintln!("{message}");
            return 2;
        }
    };
    if parsed.specs.is_empty() {
        eprintln!(
            "usage: yogg simulate <attack health [d|p]>... \
             [--trials N] [--seed N] [--workers N] [--log] [--json]"
        );
        return 2;
    }

    let seed = parsed.seed.unwrap_or_else(entropy_seed);

    // --log replaces the Monte Carlo run with a single narrated trial.
    if parsed.log {
        let result = simulate_board(
            &parsed.specs,
            SimulationConfig {
                seed,
                trace_mode: TraceMode::Events,
            },
        );
        if parsed.json {
            match serde_json::to_string_pretty(&result) {
                Ok(payload) => println!("{payload}"),
                Err(err) => {
                    eprintln!("failed to serialize trial trace: {err}");
                    return 1;
                }
            }
        } else {
            for event in &result.events {
                println!("{event}");
            }
        }
        return 0;
    }

    let pool = WorkerPool::with_workers(parsed.workers);
    let mut progress = Progress::new(parsed.trials);
    let report = run_trial_batches(&parsed.specs, parsed.trials, seed, &pool, |done, _| {
        progress.update(done);
    });
    progress.finish();

    if parsed.json {
        match serde_json::to_string_pretty(&report) {
            Ok(payload) => println!("{payload}"),
            Err(err) => {
                eprintln!("failed to serialize report: {err}");
                return 1;
            }
        }
    } else {
        print!("{}", report.to_text());
    }

    0
}

#[derive(Debug)]
struct SimulateArgs {
    specs: Vec<MinionSpec>,
    trials: u64,
    seed: Option<u64>,
    workers: usize,
    log: bool,
    json: bool,
}

/// Everything that is not a known flag is a minion spec token, so negative
/// attack values like `-2` pass through to the board parser.
fn parse_simulate_args(args: &[String]) -> Result<SimulateArgs, String> {
    let mut spec_tokens: Vec<&str> = Vec::new();
    let mut trials = DEFAULT_TRIALS;
    let mut seed = None;
    let mut workers = 0;
    let mut log = false;
    let mut json = false;

    let mut iter = args.iter().skip(2);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--trials" => trials = parse_flag_value(iter.next(), "--trials")?,
            "--seed" => seed = Some(parse_flag_value(iter.next(), "--seed")?),
            "--workers" => workers = parse_flag_value(iter.next(), "--workers")?,
            "--log" => log = true,
            "--json" => json = true,
            token => spec_tokens.push(token),
        }
    }

    let specs = MinionSpec::parse_tokens(&spec_tokens)
        .map_err(|err| format!("invalid minion specs: {err}"))?;
    Ok(SimulateArgs {
        specs,
        trials,
        seed,
        workers,
        log,
        json,
    })
}

fn parse_flag_value<T>(raw: Option<&String>, flag: &str) -> Result<T, String>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    let Some(value) = raw else {
        return Err(format!("{flag} expects a value"));
    };
    value
        .parse()
        .map_err(|err| format!("invalid {flag} value '{value}': {err}"))
}
