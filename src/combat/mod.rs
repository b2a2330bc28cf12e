pub mod engine;
pub mod minion;
pub mod rng;

pub use engine::{
    board_line, induce_insanity, resolve_attack, simulate_board, spawn_board, CombatEvent,
    SimulationConfig, SimulationResult, TraceCollector, TraceMode,
};
pub use minion::{Minion, MinionSpec, SpecError, Strike};
pub use rng::{entropy_seed, Rng};
