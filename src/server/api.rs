use std::fmt;

use serde::{Deserialize, Serialize};

use crate::combat::{entropy_seed, MinionSpec};
use crate::stats::{run_monte_carlo_parallel, BoardReport};

const DEFAULT_TRIALS: u64 = 100_000;
const MAX_TRIALS: u64 = 10_000_000;
const MAX_BOARD: usize = 64;

#[derive(Debug, Clone, Deserialize)]
pub struct SimulateRequest {
    pub minions: Vec<MinionSpec>,
    pub trials: Option<u64>,
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SimulateResponse {
    pub status: &'static str,
    /// Seed the run used; echoed so callers can replay it.
    pub seed: u64,
    pub report: BoardReport,
}

#[derive(Debug, Clone, Serialize)]
pub struct ValidationIssue {
    pub field: &'static str,
    pub messages: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ValidationErrorResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub errors: Vec<ValidationIssue>,
}

#[derive(Debug)]
pub enum SimulateError {
    Parse(serde_json::Error),
    Validation(ValidationErrorResponse),
}

impl fmt::Display for SimulateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "{err}"),
            Self::Validation(_) => write!(f, "invalid simulate request"),
        }
    }
}

impl std::error::Error for SimulateError {}

pub fn health_payload() -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&serde_json::json!({
        "status": "ok",
        "service": "yogg-api",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

pub fn simulate_payload(body: &str) -> Result<String, SimulateError> {
    let request: SimulateRequest = serde_json::from_str(body).map_err(SimulateError::Parse)?;
    let trials = request.trials.unwrap_or(DEFAULT_TRIALS);
    validate_request(&request, trials)?;
    let seed = request.seed.unwrap_or_else(entropy_seed);

    let tally = run_monte_carlo_parallel(&request.minions, trials, seed);
    let response = SimulateResponse {
        status: "ok",
        seed,
        report: BoardReport::from_tally(&tally),
    };
    serde_json::to_string_pretty(&response).map_err(SimulateError::Parse)
}

fn validate_request(request: &SimulateRequest, trials: u64) -> Result<(), SimulateError> {
    let mut errors: Vec<ValidationIssue> = Vec::new();

    if request.minions.is_empty() {
        errors.push(ValidationIssue {
            field: "minions",
            messages: vec!["must contain at least one minion".to_string()],
        });
    }

    if request.minions.len() > MAX_BOARD {
        errors.push(ValidationIssue {
            field: "minions",
            messages: vec![format!("must contain at most {MAX_BOARD} minions")],
        });
    }

    if !(1..=MAX_TRIALS).contains(&trials) {
        errors.push(ValidationIssue {
            field: "trials",
            messages: vec![format!("must be between 1 and {MAX_TRIALS}")],
        });
    }

    if errors.is_empty() {
        return Ok(());
    }

    Err(SimulateError::Validation(ValidationErrorResponse {
        status: "error",
        message: "Validation failed",
        errors,
    }))
}
