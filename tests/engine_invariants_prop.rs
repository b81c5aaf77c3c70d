//! Property tests for the engine over generated seeds and command scripts.
//!
//! Invariants covered:
//! - The active piece always fits the board while the game is running.
//! - No complete row survives a tick.
//! - Score only grows, and equals the sum of reported lock points.
//! - Each lock adds four cells and removes ten per cleared row.
//! - A rejected command leaves the active piece untouched.
//! - Once over, the game stays over and nothing changes.

use proptest::prelude::*;

use blockfall::core::{score_for, Engine, TickOutcome, ALL_KINDS};
use blockfall::core::pieces::spawn_shape;
use blockfall::types::{GameAction, BOARD_HEIGHT, BOARD_WIDTH};

fn no_complete_rows(engine: &Engine) -> bool {
    (0..BOARD_HEIGHT as usize).all(|row| !engine.board().is_line_complete(row))
}

fn active_fits(engine: &Engine) -> bool {
    let (x, y) = engine.current().position();
    engine.board().can_place(engine.current(), x, y)
}

proptest! {
    #[test]
    fn generated_game_respects_core_invariants(
        seed in any::<u32>(),
        script in prop::collection::vec(0usize..GameAction::ALL.len(), 1..400),
    ) {
        let mut engine = Engine::new(seed);
        let mut reported_points = 0u32;
        let mut reported_lines = 0u32;

        prop_assert!(active_fits(&engine));

        for &a in &script {
            let action = GameAction::ALL[a];
            let before = *engine.current();
            if !engine.apply_action(action) {
                prop_assert_eq!(engine.current(), &before);
            }
            prop_assert!(engine.is_game_over() || active_fits(&engine));

            let score_before = engine.score();
            let cells_before = engine.board().occupied_count();
            let locked_before = engine.pieces_locked();

            match engine.tick() {
                TickOutcome::Moved => {
                    prop_assert_eq!(engine.board().occupied_count(), cells_before);
                    prop_assert_eq!(engine.score(), score_before);
                }
                TickOutcome::Locked(event) => {
                    prop_assert_eq!(event.points, score_for(event.lines_cleared));
                    prop_assert_eq!(engine.pieces_locked(), locked_before + 1);
                    prop_assert_eq!(
                        engine.board().occupied_count() + BOARD_WIDTH as usize * event.lines_cleared as usize,
                        cells_before + 4
                    );
                    reported_points += event.points;
                    reported_lines += event.lines_cleared;
                }
                TickOutcome::GameOver => {
                    let event = engine.last_event().unwrap_or_default();
                    reported_points += event.points;
                    reported_lines += event.lines_cleared;
                }
                TickOutcome::Idle => {
                    prop_assert!(engine.is_game_over());
                }
            }

            prop_assert!(engine.score() >= score_before);
            prop_assert_eq!(engine.score(), reported_points);
            prop_assert_eq!(engine.lines(), reported_lines);
            prop_assert!(no_complete_rows(&engine));
            prop_assert!(engine.is_game_over() || active_fits(&engine));
        }
    }

    #[test]
    fn game_over_is_frozen(seed in any::<u32>(), extra in 1usize..20) {
        // Doing nothing stacks pieces at the spawn column until the game ends.
        let mut engine = Engine::new(seed);
        let mut guard = 0;
        while !engine.is_game_over() {
            engine.tick();
            guard += 1;
            prop_assert!(guard < 10_000);
        }

        let snapshot = engine.snapshot();
        for _ in 0..extra {
            for action in GameAction::ALL {
                prop_assert!(!engine.apply_action(action));
            }
            prop_assert_eq!(engine.tick(), TickOutcome::Idle);
        }
        prop_assert_eq!(engine.snapshot(), snapshot);
    }

    #[test]
    fn rotation_is_a_four_cycle(kind_index in 0usize..ALL_KINDS.len(), turns in 0usize..12) {
        let original = spawn_shape(ALL_KINDS[kind_index]);
        let mut shape = original;
        for _ in 0..turns {
            shape.rotate();
        }
        let mut reference = original;
        for _ in 0..turns % 4 {
            reference.rotate();
        }
        prop_assert_eq!(shape, reference);
        prop_assert_eq!(shape.cells().len(), 4);
    }
}
