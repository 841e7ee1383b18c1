//! N-Player capability verification tests.
//!
//! These tests verify that turn order, banking and winning have no hidden
//! 2-player assumptions.

use farkle_engine::core::{FarkleConfig, GameState, PlayerId, ScriptedDice};
use farkle_engine::rules::{RollOutcome, TurnEngine, TurnOutcome};

/// Opening state is well formed for every supported table size.
#[test]
fn test_game_state_player_counts() {
    for player_count in [2, 3, 4, 5, 6, 7, 8] {
        let config = FarkleConfig::new().with_player_count(player_count);
        let state = GameState::new(&config);

        assert_eq!(state.player_count(), player_count);
        assert_eq!(state.active_player(), PlayerId::new(0));
        for player in PlayerId::all(player_count) {
            assert_eq!(state.player(player).total_score, 0);
            assert_eq!(state.player(player).name, format!("Player {}", player.index() + 1));
        }
    }
}

/// Turn passes round-robin over all seats, wrapping to the first.
#[test]
fn test_round_robin_4_player() {
    // Every first roll shows a single 1: 100 points, never a bust.
    let config = FarkleConfig::new().with_player_count(4);
    let mut engine = TurnEngine::new(config, ScriptedDice::new([1, 2, 3, 4, 6, 6])).unwrap();

    let mut order = Vec::new();
    for _ in 0..9 {
        order.push(engine.state().active_player().0);
        engine.roll_dice().unwrap();
        engine.end_turn().unwrap();
    }

    assert_eq!(order, vec![0, 1, 2, 3, 0, 1, 2, 3, 0]);
    assert_eq!(engine.state().players().scores(), vec![300, 200, 200, 200]);
    assert_eq!(engine.state().turn_number(), 10);
}

/// Busts advance the turn exactly like banks do.
#[test]
fn test_bust_advances_6_player() {
    let config = FarkleConfig::new().with_player_count(6);
    let mut engine = TurnEngine::new(config, ScriptedDice::new([2, 3, 4, 6, 2, 3])).unwrap();

    for expected in [1u8, 2, 3, 4, 5, 0] {
        let before = engine.state().active_player();
        let outcome = engine.roll_dice().unwrap();

        match outcome {
            RollOutcome::Bust { turn, .. } => {
                assert_eq!(turn.next_player(), Some(PlayerId::new(expected)));
            }
            other => panic!("expected bust, got {:?}", other),
        }
        assert_eq!(
            engine.state().active_player().index(),
            (before.index() + 1) % 6
        );
    }

    assert!(engine.state().players().scores().iter().all(|&s| s == 0));
}

/// Any seat can win, not just the first two.
#[test]
fn test_third_seat_wins_5_player() {
    let config = FarkleConfig::new()
        .with_players(["A", "B", "C", "D", "E"])
        .with_winning_score(300);
    // Seats 0 and 1 bust; seat 2 rolls three 6s.
    let mut engine = TurnEngine::new(
        config,
        ScriptedDice::new([
            2, 3, 4, 6, 2, 3, // A busts
            2, 3, 4, 6, 2, 3, // B busts
            6, 6, 6, 2, 3, 4, // C rolls 600
        ]),
    )
    .unwrap();

    engine.roll_dice().unwrap();
    engine.roll_dice().unwrap();
    engine.roll_dice().unwrap();
    let outcome = engine.end_turn().unwrap();

    match outcome {
        TurnOutcome::Won(result) => {
            assert_eq!(result.winner, PlayerId::new(2));
            assert_eq!(result.name, "C");
            assert_eq!(result.score, 600);
        }
        other => panic!("expected win, got {:?}", other),
    }
    assert_eq!(engine.state().winner(), Some(PlayerId::new(2)));
}

/// Seeded 8-player games run to a winner.
#[test]
fn test_seeded_8_player_game_completes() {
    let config = FarkleConfig::new()
        .with_player_count(8)
        .with_winning_score(1500);
    let mut engine = TurnEngine::seeded(config, 456).unwrap();

    let mut turns = 0;
    while !engine.is_game_over() && turns < 10_000 {
        // Bank whatever the first roll gives.
        let outcome = engine.roll_dice().unwrap();
        if !outcome.is_bust() {
            engine.end_turn().unwrap();
        }
        turns += 1;
    }

    let result = engine.result().expect("game should have ended");
    assert!(result.score >= 1500);
    assert_eq!(engine.state().player(result.winner).total_score, result.score);
}
