pub mod monte_carlo;
pub mod report;

pub use monte_carlo::{
    run_monte_carlo, run_monte_carlo_parallel, run_monte_carlo_with_progress, TrialTally,
    PROGRESS_BATCH_COUNT,
};
pub use report::{BoardReport, SurvivorRate};
