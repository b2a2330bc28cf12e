//! Monte Carlo aggregation over independent trials of the same board.
//!
//! Each trial derives its own seed from the base seed, so how the trial
//! range is partitioned across threads never changes the outcome.

use std::ops::Range;

use rayon::prelude::*;

use crate::combat::{simulate_board, Minion, MinionSpec, SimulationConfig, TraceMode};
use crate::parallel::batch_ranges;

/// Progress callbacks per parallel run; keeps redraws cheap even for
/// millions of trials.
pub const PROGRESS_BATCH_COUNT: usize = 40;

/// Raw counters accumulated across trials. `survivals[i]` counts trials the
/// minion spawned in slot `i` survived.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrialTally {
    pub trials: u64,
    pub clearances: u64,
    pub leftover_minions: u64,
    pub leftover_health: u64,
    pub survivals: Vec<u64>,
}

impl TrialTally {
    pub fn new(board_size: usize) -> Self {
        Self {
            trials: 0,
            clearances: 0,
            leftover_minions: 0,
            leftover_health: 0,
            survivals: vec![0; board_size],
        }
    }

    /// Fold one finished trial into the counters. Survivors are alive, so
    /// their health is strictly positive.
    pub fn record(&mut self, survivors: &[Minion]) {
        self.trials += 1;
        if survivors.is_empty() {
            self.clearances += 1;
            return;
        }
        self.leftover_minions += survivors.len() as u64;
        for minion in survivors {
            self.leftover_health += minion.health as u64;
            self.survivals[minion.identity - 1] += 1;
        }
    }

    /// Combine two tallies. The operation is associative and commutative,
    /// which lets a Rayon reduction produce the same counters as a
    /// sequential pass over the full trial range.
    pub fn merge(mut self, other: Self) -> Self {
        debug_assert_eq!(self.survivals.len(), other.survivals.len());
        self.trials += other.trials;
        self.clearances += other.clearances;
        self.leftover_minions += other.leftover_minions;
        self.leftover_health += other.leftover_health;
        for (mine, theirs) in self.survivals.iter_mut().zip(other.survivals) {
            *mine += theirs;
        }
        self
    }
}

/// Run `trials` independent trials on one thread.
pub fn run_monte_carlo(specs: &[MinionSpec], trials: u64, seed: u64) -> TrialTally {
    run_range(specs, 0..trials, seed)
}

/// Like [run_monte_carlo] but distributes the trial range across all CPU
/// cores via Rayon. Counters match the sequential run exactly.
pub fn run_monte_carlo_parallel(specs: &[MinionSpec], trials: u64, seed: u64) -> TrialTally {
    run_range_parallel(specs, 0..trials, seed)
}

/// Parallel run that reports completed-trial counts as it goes. The callback
/// sees `(0, trials)` before work starts and `(trials, trials)` at the end.
pub fn run_monte_carlo_with_progress<F>(
    specs: &[MinionSpec],
    trials: u64,
    seed: u64,
    mut on_progress: F,
) -> TrialTally
where
    F: FnMut(u64, u64),
{
    let mut tally = TrialTally::new(specs.len());
    on_progress(0, trials);
    for (start, end) in batch_ranges(trials as usize, PROGRESS_BATCH_COUNT) {
        let batch = run_range_parallel(specs, start as u64..end as u64, seed);
        tally = tally.merge(batch);
        on_progress(end as u64, trials);
    }
    tally
}

fn run_range(specs: &[MinionSpec], range: Range<u64>, seed: u64) -> TrialTally {
    let mut tally = TrialTally::new(specs.len());
    for trial in range {
        let result = simulate_board(
            specs,
            SimulationConfig {
                seed: seed.wrapping_add(trial),
                trace_mode: TraceMode::Off,
            },
        );
        tally.record(&result.survivors);
    }
    tally
}

fn run_range_parallel(specs: &[MinionSpec], range: Range<u64>, seed: u64) -> TrialTally {
    let len = (range.end - range.start) as usize;
    batch_ranges(len, rayon::current_num_threads())
        .into_par_iter()
        .map(|(start, end)| {
            let batch = range.start + start as u64..range.start + end as u64;
            run_range(specs, batch, seed)
        })
        .reduce(|| TrialTally::new(specs.len()), TrialTally::merge)
}
