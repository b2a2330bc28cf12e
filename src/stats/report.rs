//! Derived rates and the text report printed after a run.

use std::fmt::Write as _;

use serde::Serialize;

use crate::stats::monte_carlo::TrialTally;

/// Survival odds for one minion, identified by its board name (`m1`, `m2`...).
/// `survival_rate` is over all trials; `conditional_survival_rate` only over
/// trials the board did not clear.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SurvivorRate {
    pub name: String,
    pub count: u64,
    pub survival_rate: f64,
    pub conditional_survival_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoardReport {
    pub trials: u64,
    pub clearances: u64,
    pub clearance_rate: f64,
    /// Mean survivor count over trials that failed to clear.
    pub avg_remaining_minions: f64,
    /// Mean total survivor health over trials that failed to clear.
    pub avg_remaining_health: f64,
    /// Minions that survived at least once, most frequent first.
    pub survivors: Vec<SurvivorRate>,
    pub all_cleared: bool,
}

impl BoardReport {
    pub fn from_tally(tally: &TrialTally) -> Self {
        let failures = tally.trials - tally.clearances;
        let mut survivors: Vec<SurvivorRate> = tally
            .survivals
            .iter()
            .enumerate()
            .filter(|(_, count)| **count > 0)
            .map(|(slot, &count)| SurvivorRate {
                name: format!("m{}", slot + 1),
                count,
                survival_rate: ratio(count, tally.trials),
                conditional_survival_rate: ratio(count, failures),
            })
            .collect();
        // Stable sort keeps board order between equal counts.
        survivors.sort_by_key(|survivor| std::cmp::Reverse(survivor.count));

        Self {
            trials: tally.trials,
            clearances: tally.clearances,
            clearance_rate: ratio(tally.clearances, tally.trials),
            avg_remaining_minions: ratio(tally.leftover_minions, failures),
            avg_remaining_health: ratio(tally.leftover_health, failures),
            all_cleared: survivors.is_empty(),
            survivors,
        }
    }

    /// Plain-text summary, one line per figure, survivor lines as
    /// `name: conditional% (overall%)`.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Clearance Chance: {:.1}%", percent(self.clearance_rate));
        let _ = writeln!(out, "ø Remaining Minions: {:.2}", self.avg_remaining_minions);
        let _ = writeln!(out, "ø Remaining Health:  {:.2}", self.avg_remaining_health);
        if self.all_cleared {
            let _ = writeln!(out, "All minions die safely.");
        } else {
            for survivor in &self.survivors {
                let _ = writeln!(
                    out,
                    "{}: {:.1}% ({:.1}%)",
                    survivor.name,
                    percent(survivor.conditional_survival_rate),
                    percent(survivor.survival_rate)
                );
            }
        }
        out
    }
}

fn ratio(numerator: u64, denominator: u64) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

fn percent(rate: f64) -> f64 {
    rate * 100.0
}
