//! Game session: the state object a front end drives and observes.

use crate::alert::Alert;
use crate::contracts::MoveContract;
use crate::error::EngineError;
use crate::event::{GameEvent, GameObserver};
use crate::game::Match;
use crate::selector::ComputerPlayer;
use crate::types::{BOARD_SIZE, Board, GameState, Move, Player};
use tracing::{debug, info, instrument};

/// What happened in response to a turn request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Nothing changed: occupied square, board disabled, or game over.
    Ignored,
    /// Human move placed; the computer moves next.
    AwaitingComputer,
    /// Computer move placed; the human moves next.
    InProgress,
    /// The move ended the game.
    Finished(GameState),
}

/// One human-versus-computer game, replayable via [`GameSession::reset_game`].
///
/// The session accepts human input only while
/// [`is_board_interaction_enabled`](Self::is_board_interaction_enabled) is
/// true. A front end that wants a pause before the reply calls
/// [`place_human_move`](Self::place_human_move), waits, then calls
/// [`play_computer_move`](Self::play_computer_move);
/// [`process_move`](Self::process_move) does both at once.
pub struct GameSession {
    game: Match,
    computer: ComputerPlayer,
    interaction_enabled: bool,
    alert: Option<Alert>,
    observers: Vec<Box<dyn GameObserver>>,
}

impl GameSession {
    /// Creates a session whose computer draws randomness from OS entropy.
    pub fn new() -> Self {
        Self::with_computer(ComputerPlayer::new())
    }

    /// Creates a session with a reproducible computer opponent.
    pub fn seeded(seed: u64) -> Self {
        Self::with_computer(ComputerPlayer::seeded(seed))
    }

    /// Creates a session around the given opponent.
    pub fn with_computer(computer: ComputerPlayer) -> Self {
        Self {
            game: Match::new(),
            computer,
            interaction_enabled: true,
            alert: None,
            observers: Vec::new(),
        }
    }

    /// Registers an observer for every subsequent event.
    pub fn subscribe(&mut self, observer: impl GameObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        self.game.board()
    }

    /// Returns the moves played so far.
    pub fn history(&self) -> &[Move] {
        self.game.history()
    }

    /// Game state derived from the board.
    pub fn state(&self) -> GameState {
        self.game.state()
    }

    /// Whether the human may place a mark right now.
    pub fn is_board_interaction_enabled(&self) -> bool {
        self.interaction_enabled
    }

    /// End-of-game dialog, present only after a terminal move.
    pub fn alert(&self) -> Option<Alert> {
        self.alert
    }

    /// Plays the human's move and, if the game goes on, the computer's reply.
    ///
    /// # Errors
    ///
    /// [`EngineError::InvalidIndex`] for an index outside 0-8. Occupied
    /// squares and moves out of turn are ignored, not errors.
    #[instrument(skip(self))]
    pub fn process_move(&mut self, index: usize) -> Result<TurnOutcome, EngineError> {
        match self.place_human_move(index)? {
            TurnOutcome::AwaitingComputer => self.play_computer_move(),
            outcome => Ok(outcome),
        }
    }

    /// Places the human's mark without replying.
    ///
    /// Returns [`TurnOutcome::AwaitingComputer`] when the game continues; the
    /// board then stays disabled until [`play_computer_move`](Self::play_computer_move).
    ///
    /// # Errors
    ///
    /// [`EngineError::InvalidIndex`] for an index outside 0-8.
    #[instrument(skip(self))]
    pub fn place_human_move(&mut self, index: usize) -> Result<TurnOutcome, EngineError> {
        if index >= BOARD_SIZE {
            return Err(EngineError::InvalidIndex(index));
        }
        if self.state().is_terminal() || !self.interaction_enabled {
            debug!(index, "Board not accepting moves, ignoring");
            return Ok(TurnOutcome::Ignored);
        }

        let mov = Move::new(Player::Human, index);
        match MoveContract::execute(&mut self.game, mov) {
            Ok(()) => {}
            Err(EngineError::CellOccupied(_)) => {
                debug!(index, "Square already occupied, ignoring");
                return Ok(TurnOutcome::Ignored);
            }
            Err(e) => return Err(e),
        }
        info!(index, "Human placed mark");
        self.emit(GameEvent::MovePlaced(mov));

        let state = self.state();
        if state.is_terminal() {
            return Ok(self.finish(state));
        }

        self.set_interaction(false);
        Ok(TurnOutcome::AwaitingComputer)
    }

    /// Lets the computer reply to the human's move.
    ///
    /// Ignored unless the session is waiting for the computer.
    ///
    /// # Errors
    ///
    /// [`EngineError::EmptyMoveSpace`] if called on a full board, which the
    /// draw check rules out in normal play.
    #[instrument(skip(self))]
    pub fn play_computer_move(&mut self) -> Result<TurnOutcome, EngineError> {
        if self.state().is_terminal() || self.interaction_enabled {
            debug!("Not the computer's turn, ignoring");
            return Ok(TurnOutcome::Ignored);
        }

        let index = self.computer.choose_move(self.game.board())?;
        let mov = Move::new(Player::Computer, index);
        MoveContract::execute(&mut self.game, mov)?;
        info!(index, "Computer placed mark");
        self.emit(GameEvent::MovePlaced(mov));

        let state = self.state();
        if state.is_terminal() {
            return Ok(self.finish(state));
        }

        self.set_interaction(true);
        Ok(TurnOutcome::InProgress)
    }

    /// Clears the board and starts a new game with the human to move.
    #[instrument(skip(self))]
    pub fn reset_game(&mut self) {
        info!("Resetting game");
        self.game.reset();
        self.alert = None;
        self.interaction_enabled = true;
        self.emit(GameEvent::Reset);
    }

    fn finish(&mut self, state: GameState) -> TurnOutcome {
        info!(%state, "Game over");
        self.interaction_enabled = false;
        if let Some(alert) = Alert::for_state(state) {
            self.alert = Some(alert);
            self.emit(GameEvent::GameOver { state, alert });
        }
        TurnOutcome::Finished(state)
    }

    fn set_interaction(&mut self, enabled: bool) {
        if self.interaction_enabled != enabled {
            self.interaction_enabled = enabled;
            self.emit(GameEvent::InteractionChanged(enabled));
        }
    }

    fn emit(&mut self, event: GameEvent) {
        for observer in &mut self.observers {
            observer.notify(&event);
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for GameSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameSession")
            .field("game", &self.game)
            .field("interaction_enabled", &self.interaction_enabled)
            .field("alert", &self.alert)
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_first_reply_takes_center() {
        let mut session = GameSession::seeded(1);
        assert_eq!(session.process_move(0), Ok(TurnOutcome::InProgress));
        assert_eq!(
            session.history(),
            &[
                Move::new(Player::Human, 0),
                Move::new(Player::Computer, 4),
            ]
        );
        assert!(session.is_board_interaction_enabled());
    }

    #[test]
    fn test_split_turn_disables_board() {
        let mut session = GameSession::seeded(1);
        assert_eq!(session.place_human_move(0), Ok(TurnOutcome::AwaitingComputer));
        assert!(!session.is_board_interaction_enabled());

        // Human input is ignored until the computer has replied.
        assert_eq!(session.place_human_move(1), Ok(TurnOutcome::Ignored));
        assert_eq!(session.board().is_occupied(1), Ok(false));

        assert_eq!(session.play_computer_move(), Ok(TurnOutcome::InProgress));
        assert!(session.is_board_interaction_enabled());
    }

    #[test]
    fn test_computer_move_out_of_turn_is_ignored() {
        let mut session = GameSession::seeded(1);
        assert_eq!(session.play_computer_move(), Ok(TurnOutcome::Ignored));
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_occupied_square_is_ignored() {
        let mut session = GameSession::seeded(1);
        session.process_move(0).unwrap();
        let before = session.board().clone();

        assert_eq!(session.process_move(4), Ok(TurnOutcome::Ignored));
        assert_eq!(session.board(), &before);
    }

    #[test]
    fn test_invalid_index_is_an_error() {
        let mut session = GameSession::seeded(1);
        assert_eq!(session.process_move(9), Err(EngineError::InvalidIndex(9)));
    }

    #[test]
    fn test_observers_see_moves_and_game_over() {
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&events);

        let mut session = GameSession::seeded(1);
        session.subscribe(move |event: &GameEvent| {
            sink.lock().unwrap().push(event.clone());
        });

        for index in [0, 1, 3] {
            session.process_move(index).unwrap();
        }

        let events = events.lock().unwrap();
        assert_eq!(
            *events,
            vec![
                GameEvent::MovePlaced(Move::new(Player::Human, 0)),
                GameEvent::InteractionChanged(false),
                GameEvent::MovePlaced(Move::new(Player::Computer, 4)),
                GameEvent::InteractionChanged(true),
                GameEvent::MovePlaced(Move::new(Player::Human, 1)),
                GameEvent::InteractionChanged(false),
                GameEvent::MovePlaced(Move::new(Player::Computer, 2)),
                GameEvent::InteractionChanged(true),
                GameEvent::MovePlaced(Move::new(Player::Human, 3)),
                GameEvent::InteractionChanged(false),
                GameEvent::MovePlaced(Move::new(Player::Computer, 6)),
                GameEvent::GameOver {
                    state: GameState::ComputerWin,
                    alert: Alert::COMPUTER_WIN,
                },
            ]
        );
    }
}
