//! Property-based tests for session invariants.
//!
//! Random command sequences are played against the standard tile set and
//! the session is checked after every command.

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use proptest::prelude::*;

use tile_explorer::core::{Direction, Position, Resource, SessionConfig};
use tile_explorer::session::{GameSession, MessageLog, Rejection, SessionState};
use tile_explorer::tiles::{standard, ActionId};

#[derive(Clone, Debug)]
enum Command {
    Move(Direction),
    Select(i32, i32),
    Choose(usize),
    Reroll,
    Claim(u16),
    MoveTo(i32, i32),
    UseFocused,
}

fn arb_direction() -> impl Strategy<Value = Direction> {
    prop_oneof![
        Just(Direction::N),
        Just(Direction::E),
        Just(Direction::S),
        Just(Direction::W),
    ]
}

fn arb_command() -> impl Strategy<Value = Command> {
    prop_oneof![
        4 => arb_direction().prop_map(Command::Move),
        1 => (-1i32..6, -1i32..9).prop_map(|(x, y)| Command::Select(x, y)),
        4 => (0usize..4).prop_map(Command::Choose),
        1 => Just(Command::Reroll),
        2 => (0u16..2).prop_map(Command::Claim),
        1 => (-1i32..6, -1i32..9).prop_map(|(x, y)| Command::MoveTo(x, y)),
        1 => Just(Command::UseFocused),
    ]
}

fn run(session: &mut GameSession, command: &Command) -> Result<(), Rejection> {
    match *command {
        Command::Move(direction) => session.attempt_move(direction).map(drop),
        Command::Select(x, y) => session.select_tile(Position::new(x, y)).map(drop),
        Command::Choose(index) => {
            // Without a draft, still send a choice so the session rejects it
            let choice = session
                .state()
                .draft
                .as_ref()
                .and_then(|d| d.options.get(index).copied())
                .unwrap_or(standard::HOME_BASE);
            session.select_draft_tile(choice).map(drop)
        }
        Command::Reroll => session.reroll_draft(),
        Command::Claim(action) => session.claim_action(ActionId::new(action)),
        Command::MoveTo(x, y) => session.move_to_tile(Position::new(x, y)),
        Command::UseFocused => session.use_focused_action(),
    }
}

fn config(seed: u64) -> SessionConfig {
    SessionConfig::default()
        .with_seed(seed)
        .with_starting(Resource::Money, 10)
}

/// State with the message log cleared, for comparing game-relevant fields.
fn without_log(state: &SessionState) -> SessionState {
    let mut state = state.clone();
    state.log = MessageLog::new(0);
    state
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Resources never go negative.
    #[test]
    fn prop_resources_non_negative(
        seed in any::<u64>(),
        commands in prop::collection::vec(arb_command(), 1..120)
    ) {
        let mut session = GameSession::standard(config(seed));
        for command in &commands {
            let _ = run(&mut session, command);
            for (resource, amount) in session.resources().entries() {
                prop_assert!(amount >= 0, "{resource:?} went negative after {command:?}");
            }
        }
    }

    /// VP never decreases.
    #[test]
    fn prop_vp_monotonic(
        seed in any::<u64>(),
        commands in prop::collection::vec(arb_command(), 1..120)
    ) {
        let mut session = GameSession::standard(config(seed));
        let mut last = session.victory_points();
        for command in &commands {
            let _ = run(&mut session, command);
            let vp = session.victory_points();
            prop_assert!(vp >= last, "VP fell from {last} to {vp} after {command:?}");
            last = vp;
        }
    }

    /// A rejected command leaves everything but the message log untouched.
    #[test]
    fn prop_rejections_change_nothing(
        seed in any::<u64>(),
        commands in prop::collection::vec(arb_command(), 1..80)
    ) {
        let mut session = GameSession::standard(config(seed));
        for command in &commands {
            let before = without_log(session.state());
            if run(&mut session, command).is_err() {
                prop_assert_eq!(&without_log(session.state()), &before);
            }
        }
    }

    /// Once the game ends, nothing changes.
    #[test]
    fn prop_terminal_status_is_stable(
        seed in any::<u64>(),
        commands in prop::collection::vec(arb_command(), 1..150)
    ) {
        // Little energy so that most runs end
        let mut session = GameSession::standard(
            config(seed).with_starting(Resource::Energy, 4),
        );
        let mut terminal = None;
        for command in &commands {
            let result = run(&mut session, command);
            match &terminal {
                Some(state) => {
                    prop_assert_eq!(result, Err(Rejection::NotPlaying));
                    prop_assert_eq!(session.state(), state);
                }
                None if session.status().is_terminal() => {
                    terminal = Some(session.state().clone());
                }
                None => {}
            }
        }
    }

    /// The player always stands on a placed tile, and the tile count only
    /// grows by placements.
    #[test]
    fn prop_board_consistent(
        seed in any::<u64>(),
        commands in prop::collection::vec(arb_command(), 1..120)
    ) {
        let mut session = GameSession::standard(config(seed));
        for command in &commands {
            let placed = session.tiles_placed();
            let result = run(&mut session, command);

            prop_assert!(session.state().board.is_occupied(session.state().player));
            let grew = session.tiles_placed() - placed;
            prop_assert!(grew <= 1);
            if grew == 1 {
                prop_assert!(matches!(command, Command::Choose(_)) && result.is_ok());
                prop_assert!(!session.is_drafting());
            }
        }
    }

    /// Reachable directions agree with what a move would do.
    #[test]
    fn prop_reachable_matches_moves(
        seed in any::<u64>(),
        commands in prop::collection::vec(arb_command(), 0..60)
    ) {
        let mut session = GameSession::standard(config(seed));
        for command in &commands {
            let _ = run(&mut session, command);
        }
        let reachable = session.reachable_directions();
        for direction in Direction::all() {
            let mut trial = GameSession::restore(
                std::sync::Arc::new(session.catalog().clone()),
                session.snapshot(),
            )
            .unwrap();
            let accepted = trial.attempt_move(direction).is_ok()
                || matches!(
                    trial.attempt_move(direction),
                    Err(Rejection::InsufficientEnergy { .. })
                );
            prop_assert_eq!(reachable.contains(&direction), accepted);
        }
    }
}
