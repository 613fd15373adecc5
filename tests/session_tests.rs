//! Session integration tests.
//!
//! These drive the game purely through the public API, the way the terminal
//! shell does: begin a turn, read the board, dispatch one command.

use twenty48::{Board, Command, Direction, Flow, GameSession, TileRng, TurnStatus};

/// First direction that would move the given board, if any.
fn changing_direction(board: &Board) -> Option<Direction> {
    Direction::ALL.iter().copied().find(|&direction| {
        let mut scratch = *board;
        scratch.shift(direction)
    })
}

/// First direction that would move nothing on the given board, if any.
fn blocked_direction(board: &Board) -> Option<Direction> {
    Direction::ALL.iter().copied().find(|&direction| {
        let mut scratch = *board;
        !scratch.shift(direction)
    })
}

// =============================================================================
// Determinism
// =============================================================================

/// Test that two sessions with one seed replay the same scripted game.
#[test]
fn test_scripted_game_replays_identically() {
    let script = [
        (Command::Shift(Direction::Left), true),
        (Command::Revert, true),
        (Command::Shift(Direction::Up), true),
        (Command::Shift(Direction::Left), true),
        (Command::Restart, false),
        (Command::Shift(Direction::Down), true),
        (Command::Restart, true),
        (Command::Shift(Direction::Right), true),
    ];

    let mut a = GameSession::with_seed(9001);
    let mut b = GameSession::with_seed(9001);

    for (command, confirmed) in script {
        assert_eq!(a.begin_turn(), b.begin_turn());
        assert_eq!(
            a.dispatch(command, confirmed),
            b.dispatch(command, confirmed)
        );
        assert_eq!(a.board(), b.board());
    }
}

/// Test that an entropy-seeded session reports a seed that replays its deal.
#[test]
fn test_entropy_seed_replays_the_deal() {
    let fresh = GameSession::new();
    let replay = GameSession::with_seed(fresh.seed());

    assert_eq!(fresh.board(), replay.board());
}

/// Test that a caller-built generator behaves like the equivalent seed.
#[test]
fn test_with_rng_matches_with_seed() {
    let mut from_rng = GameSession::with_rng(TileRng::new(5));
    let mut from_seed = GameSession::with_seed(5);

    for _ in 0..5 {
        assert_eq!(from_rng.begin_turn(), from_seed.begin_turn());
        from_rng.dispatch(Command::Shift(Direction::Left), true);
        from_seed.dispatch(Command::Shift(Direction::Left), true);
        assert_eq!(from_rng.board(), from_seed.board());
    }
}

// =============================================================================
// Turn flow
// =============================================================================

/// Test that the spawn lock stops repeated turn openings from adding tiles.
#[test]
fn test_begin_turn_spawns_at_most_once_per_turn() {
    let mut session = GameSession::with_seed(42);
    assert_eq!(session.begin_turn(), TurnStatus::Playing);

    let after_first = *session.board();
    assert_eq!(session.begin_turn(), TurnStatus::Playing);

    assert_eq!(*session.board(), after_first);
}

/// Test that a cycled-direction game fills the board and ends.
#[test]
fn test_game_runs_to_completion() {
    let mut session = GameSession::with_seed(2468);
    let mut turns = 0;

    loop {
        match session.begin_turn() {
            TurnStatus::GameOver => break,
            TurnStatus::Playing => {}
        }
        let direction = Direction::ALL[turns % Direction::ALL.len()];
        assert_eq!(
            session.dispatch(Command::Shift(direction), true),
            Flow::Continue
        );
        turns += 1;
        assert!(turns < 10_000, "game did not terminate");
    }

    assert_eq!(session.board().count_empty(), 0);
}

// =============================================================================
// Undo
// =============================================================================

/// Test that revert undoes one move after each possible direction.
#[test]
fn test_revert_restores_pre_move_state() {
    for seed in [1, 2, 3, 4] {
        let mut session = GameSession::with_seed(seed);
        session.begin_turn();

        let before = *session.board();
        let direction = changing_direction(&before).expect("fresh boards can always move");

        assert!(session.apply_direction(direction));
        assert_ne!(*session.board(), before);

        session.revert();
        assert_eq!(*session.board(), before);
    }
}

/// Test that reverting twice lands on the same board both times.
#[test]
fn test_double_revert_is_stable() {
    let mut session = GameSession::with_seed(77);
    session.begin_turn();

    let before = *session.board();
    let direction = changing_direction(&before).expect("fresh boards can always move");
    session.apply_direction(direction);

    session.dispatch(Command::Revert, true);
    let once = *session.board();
    session.dispatch(Command::Revert, true);

    assert_eq!(once, before);
    assert_eq!(*session.board(), once);
}

/// Test that a move that changes nothing does not steal the undo slot.
#[test]
fn test_blocked_move_keeps_previous_undo() {
    let mut session = GameSession::with_seed(11);

    for _ in 0..50 {
        session.begin_turn();
        let before = *session.board();
        let Some(direction) = changing_direction(&before) else {
            break;
        };
        session.apply_direction(direction);
        session.begin_turn();

        if let Some(blocked) = blocked_direction(session.board()) {
            // The blocked move reports no change and leaves the undo target
            // at the state before the last real move
            assert!(!session.apply_direction(blocked));
            session.revert();
            assert_eq!(*session.board(), before);
            return;
        }
    }

    panic!("no blocked direction encountered in 50 turns");
}

// =============================================================================
// Confirm gates
// =============================================================================

/// Test that a declined restart leaves board and undo target alone.
#[test]
fn test_declined_restart_is_fully_inert() {
    let mut session = GameSession::with_seed(42);
    session.begin_turn();

    let before = *session.board();
    let direction = changing_direction(&before).expect("fresh boards can always move");
    session.apply_direction(direction);
    let after_move = *session.board();

    assert_eq!(session.dispatch(Command::Restart, false), Flow::Continue);
    assert_eq!(*session.board(), after_move);

    // The undo target must still be the pre-move state
    session.revert();
    assert_eq!(*session.board(), before);
}

/// Test that a declined exit continues play without touching state.
#[test]
fn test_declined_exit_is_fully_inert() {
    let mut session = GameSession::with_seed(42);
    session.begin_turn();
    let before = *session.board();

    assert_eq!(session.dispatch(Command::Exit, false), Flow::Continue);
    assert_eq!(*session.board(), before);
}

/// Test that a confirmed restart deals a one-tile board.
#[test]
fn test_confirmed_restart_deals_fresh_board() {
    let mut session = GameSession::with_seed(42);
    for _ in 0..3 {
        session.begin_turn();
        if let Some(direction) = changing_direction(session.board()) {
            session.apply_direction(direction);
        }
    }

    assert_eq!(session.dispatch(Command::Restart, true), Flow::Continue);
    assert_eq!(session.board().count_empty(), 15);
}

/// Test that a confirmed exit quits and leaves the board untouched.
#[test]
fn test_confirmed_exit_quits() {
    let mut session = GameSession::with_seed(42);
    session.begin_turn();
    let before = *session.board();

    assert_eq!(session.dispatch(Command::Exit, true), Flow::Quit);
    assert_eq!(*session.board(), before);
}
