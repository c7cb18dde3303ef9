//! End-to-end tests driving a game session the way a front end does.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tiktaktoe_core::{
    Alert, Board, Cell, GameSession, GameState, Player, TurnOutcome, select_computer_move,
};

const H: Cell = Cell::Occupied(Player::Human);
const C: Cell = Cell::Occupied(Player::Computer);
const E: Cell = Cell::Empty;

/// Plays the human's squares in order, skipping ones already taken, until
/// the game ends.
fn play_out(session: &mut GameSession, order: &[usize]) -> GameState {
    for &index in order {
        if let TurnOutcome::Finished(state) = session.process_move(index).unwrap() {
            return state;
        }
    }
    session.state()
}

#[test]
fn test_selector_completes_computer_line() {
    let board = Board::from_cells([C, C, E, H, H, E, E, E, H]);
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    assert_eq!(select_computer_move(&board, &mut rng), Ok(2));
}

#[test]
fn test_selector_blocks_human_line() {
    let board = Board::from_cells([H, H, E, E, C, E, E, E, E]);
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    assert_eq!(select_computer_move(&board, &mut rng), Ok(2));
}

#[test]
fn test_selector_opens_in_center() {
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    assert_eq!(select_computer_move(&Board::new(), &mut rng), Ok(4));
}

#[test]
fn test_computer_blocks_then_wins() {
    let mut session = GameSession::seeded(3);

    // Human 0, computer takes center.
    session.process_move(0).unwrap();
    // Human 1 threatens 2; computer must block at 2.
    session.process_move(1).unwrap();
    assert_eq!(session.board().get(2), Some(C));

    // Human 3 threatens 6 (column 0,3,6); computer has 2,4 so 6 wins the
    // anti-diagonal for it.
    let outcome = session.process_move(3).unwrap();
    assert_eq!(outcome, TurnOutcome::Finished(GameState::ComputerWin));
    assert_eq!(session.board().get(6), Some(C));
    assert_eq!(session.alert(), Some(Alert::COMPUTER_WIN));
    assert!(!session.is_board_interaction_enabled());
}

#[test]
fn test_moves_after_game_over_are_ignored() {
    let mut session = GameSession::seeded(3);
    for index in [0, 1, 3] {
        session.process_move(index).unwrap();
    }
    assert_eq!(session.state(), GameState::ComputerWin);

    let before = session.board().clone();
    assert_eq!(session.process_move(8), Ok(TurnOutcome::Ignored));
    assert_eq!(session.board(), &before);
}

fn assert_fresh_after_reset(session: &mut GameSession) {
    session.reset_game();

    assert_eq!(session.board(), &Board::new());
    assert_eq!(session.state(), GameState::InProgress);
    assert_eq!(session.alert(), None);
    assert!(session.history().is_empty());
    assert!(session.is_board_interaction_enabled());
}

/// Plays a game the human wins with a fork, returning the seeded session.
///
/// Human 0, computer center, human 8. If the computer's random reply is the
/// corner 2 (or 6), it threatens 6 (or 2); the human blocks there, which
/// opens two lines at once. The computer blocks the row, the human takes
/// the column.
fn human_fork_win() -> GameSession {
    (0..64)
        .find_map(|seed| {
            let mut session = GameSession::seeded(seed);
            session.process_move(0).unwrap();
            session.process_move(8).unwrap();
            let reply = session.history().last().unwrap().index;
            let (block, finish) = match reply {
                2 => (6, 3),
                6 => (2, 1),
                _ => return None,
            };

            assert_eq!(session.process_move(block), Ok(TurnOutcome::InProgress));
            assert_eq!(
                session.process_move(finish),
                Ok(TurnOutcome::Finished(GameState::HumanWin))
            );
            Some(session)
        })
        .expect("no seed in range gave the computer a corner reply")
}

#[test]
fn test_human_wins_with_fork() {
    let session = human_fork_win();

    assert_eq!(session.state(), GameState::HumanWin);
    assert_eq!(session.alert(), Some(Alert::HUMAN_WIN));
    assert!(!session.is_board_interaction_enabled());
    // The winning move ends the game before the computer replies.
    assert_eq!(session.history().len(), 7);
    assert_eq!(session.history().last().unwrap().player, Player::Human);
}

#[test]
fn test_full_board_is_a_draw() {
    for seed in [0, 1, 2, 3] {
        let mut session = GameSession::seeded(seed);

        // Every computer reply here is forced (center, then three blocks)
        // until only 7 and 8 remain.
        for index in [0, 1, 6, 5] {
            assert_eq!(session.process_move(index), Ok(TurnOutcome::InProgress));
        }
        assert_eq!(session.board().get(2), Some(C));
        assert_eq!(session.board().get(3), Some(C));

        let last = session.board().empty_indices();
        assert_eq!(last.len(), 1, "seed {seed}");
        assert_eq!(
            session.process_move(last[0]),
            Ok(TurnOutcome::Finished(GameState::Draw))
        );
        assert!(session.board().is_full());
        assert_eq!(session.alert(), Some(Alert::DRAW));
        assert!(!session.is_board_interaction_enabled());
    }
}

#[test]
fn test_reset_after_human_win() {
    let mut session = human_fork_win();
    assert_fresh_after_reset(&mut session);
}

#[test]
fn test_reset_after_computer_win() {
    let mut session = GameSession::seeded(3);
    assert_eq!(play_out(&mut session, &[0, 1, 3]), GameState::ComputerWin);
    assert_fresh_after_reset(&mut session);
}

#[test]
fn test_reset_after_draw() {
    let mut session = GameSession::seeded(11);
    let state = play_out(&mut session, &[0, 1, 6, 5, 7, 8]);
    assert_eq!(state, GameState::Draw);
    assert_fresh_after_reset(&mut session);

    // The next game is fully playable.
    assert_eq!(session.process_move(4), Ok(TurnOutcome::InProgress));
}

#[test]
fn test_every_seeded_game_terminates() {
    for seed in 0..50 {
        let mut session = GameSession::seeded(seed);
        let state = play_out(&mut session, &[8, 0, 2, 6, 1, 3, 5, 7, 4]);
        assert!(state.is_terminal(), "seed {seed} left game unfinished");
        assert_eq!(
            session.alert(),
            Alert::for_state(state),
            "seed {seed} alert mismatch"
        );
    }
}

#[test]
fn test_center_opening_gets_a_random_reply() {
    let mut session = GameSession::seeded(5);
    assert_eq!(session.process_move(4), Ok(TurnOutcome::InProgress));
    assert_eq!(session.history().len(), 2);
    assert_ne!(session.history()[1].index, 4);
}
