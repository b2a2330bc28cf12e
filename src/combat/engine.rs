//! Induced-insanity resolution: uniform-random attacks among the board's
//! minions until it clears, one minion stands, or nobody can act.

use std::fmt;

use serde::Serialize;

use crate::combat::minion::{Minion, MinionSpec};
use crate::combat::rng::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceMode {
    Off,
    Events,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum CombatEvent {
    Attack { attacker: String, target: String },
    Board { state: String },
}

impl fmt::Display for CombatEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Attack { attacker, target } => write!(f, "{attacker} -> {target}"),
            Self::Board { state } => write!(f, "{state}"),
        }
    }
}

/// Collects trace events when enabled; free when off.
#[derive(Debug, Clone)]
pub struct TraceCollector {
    mode: TraceMode,
    events: Vec<CombatEvent>,
}

impl TraceCollector {
    pub fn new(mode: TraceMode) -> Self {
        Self {
            mode,
            events: Vec::new(),
        }
    }

    pub fn attack(&mut self, attacker: &Minion, target: &Minion) {
        if self.mode == TraceMode::Events {
            self.events.push(CombatEvent::Attack {
                attacker: attacker.name(),
                target: target.name(),
            });
        }
    }

    pub fn board(&mut self, board: &[Minion]) {
        if self.mode == TraceMode::Events {
            self.events.push(CombatEvent::Board {
                state: board_line(board),
            });
        }
    }

    pub fn into_events(self) -> Vec<CombatEvent> {
        self.events
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SimulationConfig {
    pub seed: u64,
    pub trace_mode: TraceMode,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimulationResult {
    pub survivors: Vec<Minion>,
    pub events: Vec<CombatEvent>,
}

/// Fresh board from the specs, identities 1..N in input order.
pub fn spawn_board(specs: &[MinionSpec]) -> Vec<Minion> {
    specs
        .iter()
        .enumerate()
        .map(|(index, spec)| Minion::from_spec(index + 1, spec))
        .collect()
}

/// Compact board description: `attack/health` per minion, `d` suffix while a
/// divine shield is up, space separated (e.g. `4/2d 2/2`).
pub fn board_line(board: &[Minion]) -> String {
    board
        .iter()
        .map(|minion| {
            format!(
                "{}/{}{}",
                minion.attack,
                minion.health,
                if minion.divine_shield { "d" } else { "" }
            )
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Resolve one attack including retaliation. Both strikes are captured before
/// either lands: the exchange is simultaneous, and a target dropped to 0
/// health still hits back. Returns true when either side died.
pub fn resolve_attack(board: &mut [Minion], attacker: usize, target: usize) -> bool {
    debug_assert_ne!(attacker, target, "a minion cannot target itself");
    let outgoing = board[attacker].strike();
    let incoming = board[target].strike();
    board[target].take_hit(outgoing);
    board[attacker].take_hit(incoming);
    board[attacker].has_attacked = true;
    !board[attacker].is_alive() || !board[target].is_alive()
}

/// Run the effect to a terminal state: empty board, lone survivor, or
/// stalemate (two or more alive, none with an attack left). Every board
/// member is alive at the top of each iteration; removal preserves order.
pub fn induce_insanity(board: &mut Vec<Minion>, rng: &mut Rng, trace: &mut TraceCollector) {
    while board.len() > 1 {
        let Some(attacker) = pick_attacker(board, rng) else {
            break;
        };
        let target = pick_target(board.len(), attacker, rng);
        trace.attack(&board[attacker], &board[target]);
        let died = resolve_attack(board, attacker, target);
        if died {
            board.retain(Minion::is_alive);
        }
        trace.board(board);
    }
}

/// One full trial: spawn, seed, resolve. Trials are independent; everything
/// the outcome depends on is in `specs` and `config`.
pub fn simulate_board(specs: &[MinionSpec], config: SimulationConfig) -> SimulationResult {
    let mut rng = Rng::new(config.seed);
    let mut board = spawn_board(specs);
    let mut trace = TraceCollector::new(config.trace_mode);
    induce_insanity(&mut board, &mut rng, &mut trace);
    SimulationResult {
        survivors: board,
        events: trace.into_events(),
    }
}

/// Uniform pick among minions that have not attacked yet, or None (stalemate).
fn pick_attacker(board: &[Minion], rng: &mut Rng) -> Option<usize> {
    let eligible = board.iter().filter(|m| !m.has_attacked).count();
    if eligible == 0 {
        return None;
    }
    let pick = rng.next_below(eligible as u64) as usize;
    board
        .iter()
        .enumerate()
        .filter(|(_, m)| !m.has_attacked)
        .nth(pick)
        .map(|(index, _)| index)
}

/// Uniform pick over every board slot except the attacker.
fn pick_target(alive: usize, attacker: usize, rng: &mut Rng) -> usize {
    debug_assert!(alive > 1);
    let pick = rng.next_below(alive as u64 - 1) as usize;
    if pick >= attacker {
        pick + 1
    } else {
        pick
    }
}
