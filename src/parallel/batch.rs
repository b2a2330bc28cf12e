//! Batch partitioning for parallel trial runs.
//!
//! Trial outcomes depend only on the per-trial seed, so any partition of the
//! trial range yields identical counters. Batches exist for thread fan-out
//! and progress reporting, not for correctness.

use crate::combat::MinionSpec;
use crate::parallel::pool::WorkerPool;
use crate::stats::{run_monte_carlo_with_progress, BoardReport};

/// Split `total` items into up to `num_batches` contiguous ranges
/// `[start, end)`, as equal in size as possible.
///
/// # Example
/// ```
/// # use yogg::parallel::batch_ranges;
/// let ranges = batch_ranges(10, 4);
/// assert_eq!(ranges, vec![(0, 3), (3, 6), (6, 8), (8, 10)]);
/// ```
pub fn batch_ranges(total: usize, num_batches: usize) -> Vec<(usize, usize)> {
    if total == 0 || num_batches == 0 {
        return Vec::new();
    }
    let num_batches = num_batches.min(total);
    let base = total / num_batches;
    let remainder = total % num_batches;
    let mut start = 0;
    (0..num_batches)
        .map(|batch| {
            let end = start + base + usize::from(batch < remainder);
            let range = (start, end);
            start = end;
            range
        })
        .collect()
}

/// Full pipeline for one board: run `trials` under `pool` with progress
/// callbacks, then derive the report.
pub fn run_trial_batches<F>(
    specs: &[MinionSpec],
    trials: u64,
    seed: u64,
    pool: &WorkerPool,
    on_progress: F,
) -> BoardReport
where
    F: FnMut(u64, u64) + Send,
{
    let tally = pool.install(|| run_monte_carlo_with_progress(specs, trials, seed, on_progress));
    BoardReport::from_tally(&tally)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batch_ranges_split_evenly_when_possible() {
        let r = batch_ranges(12, 4);
        assert_eq!(r, vec![(0, 3), (3, 6), (6, 9), (9, 12)]);
    }

    #[test]
    fn batch_ranges_spread_the_remainder_forward() {
        let r = batch_ranges(10, 3);
        assert_eq!(r, vec![(0, 4), (4, 7), (7, 10)]);
    }

    #[test]
    fn batch_ranges_never_emit_empty_batches() {
        let r = batch_ranges(3, 8);
        assert_eq!(r, vec![(0, 1), (1, 2), (2, 3)]);
    }

    #[test]
    fn batch_ranges_handle_degenerate_inputs() {
        assert!(batch_ranges(0, 5).is_empty());
        assert!(batch_ranges(10, 0).is_empty());
    }

    #[test]
    fn batch_ranges_cover_the_total_without_gaps() {
        for (total, batches) in [(1, 1), (7, 3), (100, 7), (41, 40)] {
            let ranges = batch_ranges(total, batches);
            assert_eq!(ranges.first().map(|r| r.0), Some(0));
            assert_eq!(ranges.last().map(|r| r.1), Some(total));
            for pair in ranges.windows(2) {
                assert_eq!(pair[0].1, pair[1].0);
            }
        }
    }

    #[test]
    fn trial_batches_run_the_board_under_a_fixed_pool() {
        let specs = MinionSpec::parse_str("4 2 2 2").unwrap();
        let mut last = (0, 0);
        let report = run_trial_batches(&specs, 100, 9, &WorkerPool::with_workers(2), |done, total| {
            last = (done, total);
        });
        assert_eq!(last, (100, 100));
        assert_eq!(report.trials, 100);
        assert_eq!(report.clearance_rate, 1.0);
    }
}
