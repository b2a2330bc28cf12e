use yogg::combat::{
    board_line, simulate_board, CombatEvent, MinionSpec, SimulationConfig, SimulationResult,
    TraceMode,
};
use yogg::stats::{run_monte_carlo, BoardReport};

fn specs(input: &str) -> Vec<MinionSpec> {
    MinionSpec::parse_str(input).expect("board should parse")
}

fn traced(input: &str, seed: u64) -> SimulationResult {
    simulate_board(
        &specs(input),
        SimulationConfig {
            seed,
            trace_mode: TraceMode::Events,
        },
    )
}

fn attack_count(result: &SimulationResult) -> usize {
    result
        .events
        .iter()
        .filter(|event| matches!(event, CombatEvent::Attack { .. }))
        .count()
}

#[test]
fn every_minion_attacks_at_most_once_per_trial() {
    let board = "4 2 2 2 3 1 1 3 2 2 5 1";
    for seed in 0..200 {
        let result = traced(board, seed);
        assert!(
            attack_count(&result) <= 6,
            "seed {seed} ran more attacks than minions"
        );
    }
}

#[test]
fn trace_alternates_attacks_and_board_snapshots() {
    let result = traced("4 2 d 2 2 p 3 3 1 4", 21);
    assert_eq!(result.events.len() % 2, 0);
    for pair in result.events.chunks(2) {
        assert!(matches!(pair[0], CombatEvent::Attack { .. }));
        assert!(matches!(pair[1], CombatEvent::Board { .. }));
    }
}

#[test]
fn final_board_snapshot_matches_the_survivors() {
    for seed in [3, 17, 99] {
        let result = traced("0 5 0 5", seed);
        let Some(CombatEvent::Board { state }) = result.events.last() else {
            panic!("trace should end with a board snapshot");
        };
        assert_eq!(state, &board_line(&result.survivors));
        assert_eq!(state, "0/5 0/5");
    }
}

#[test]
fn survivors_are_alive_and_keep_their_spawn_identity() {
    // Attack values never change, so they tie each survivor to its slot.
    for seed in 0..50 {
        let result = traced("1 9 2 9 3 9", seed);
        assert_eq!(result.survivors.len(), 3, "nobody can die on this board");
        for minion in &result.survivors {
            assert!(minion.health > 0);
            assert_eq!(minion.name(), format!("m{}", minion.attack));
        }
    }
}

#[test]
fn poison_trio_always_leaves_exactly_one_standing() {
    // Every exchange between two poison 1/1s kills both, so the board of
    // three always collapses to a single survivor on the first attack.
    let board = specs("1 1 p 1 1 p 1 1 p");
    let report = BoardReport::from_tally(&run_monte_carlo(&board, 300, 8));
    assert_eq!(report.clearance_rate, 0.0);
    assert_eq!(report.avg_remaining_minions, 1.0);
    assert_eq!(report.avg_remaining_health, 1.0);
    let total: u64 = report.survivors.iter().map(|s| s.count).sum();
    assert_eq!(total, 300);
    for survivor in &report.survivors {
        assert_eq!(
            survivor.conditional_survival_rate, survivor.survival_rate,
            "without clearances the two rates coincide"
        );
    }
}

#[test]
fn zero_attack_hits_leave_divine_shields_up() {
    let result = traced("0 3 d 0 3 d", 4);
    assert_eq!(result.survivors.len(), 2);
    assert!(result.survivors.iter().all(|m| m.divine_shield));
    assert_eq!(board_line(&result.survivors), "0/3d 0/3d");
}

#[test]
fn negative_attacks_heal_the_board_upward() {
    // Each exchange heals both sides by one; two exchanges happen before
    // the stalemate, so both minions end two above their spawn health.
    let result = traced("-1 2 -1 2", 12);
    let healths: Vec<i32> = result.survivors.iter().map(|m| m.health).collect();
    assert_eq!(healths, vec![4, 4]);
}

#[test]
fn conditional_rates_never_fall_below_overall_rates() {
    let board = specs("4 4 d 3 2 p 2 5 5 1");
    let report = BoardReport::from_tally(&run_monte_carlo(&board, 500, 13));
    assert!((0.0..=1.0).contains(&report.clearance_rate));
    assert!(report.avg_remaining_minions <= 4.0);
    for survivor in &report.survivors {
        assert!(
            survivor.conditional_survival_rate >= survivor.survival_rate,
            "{} conditional rate below overall",
            survivor.name
        );
    }
}

#[test]
fn tally_counters_stay_internally_consistent() {
    let board = specs("4 2 d 2 2 p 3 3 1 4");
    let tally = run_monte_carlo(&board, 400, 31);
    assert_eq!(tally.trials, 400);
    assert!(tally.clearances <= tally.trials);
    assert_eq!(
        tally.leftover_minions,
        tally.survivals.iter().sum::<u64>(),
        "every survivor appearance should be counted exactly once"
    );
    for &count in &tally.survivals {
        assert!(count <= tally.trials - tally.clearances);
    }
}
