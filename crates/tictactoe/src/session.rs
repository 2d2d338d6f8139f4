//! Session controller owning the current game state.

use tictactoe_engine::{GameState, Position, apply_move, restart};
use tracing::{debug, info, instrument, warn};

use crate::{Action, View, view};

/// Owns the one live [`GameState`] of a game session.
///
/// Every [`Action`] replaces the state with the value returned by the
/// engine; the previous state is dropped.
#[derive(Debug, Clone, Default)]
pub struct Session {
    state: GameState,
}

impl Session {
    /// Creates a session holding the initial state.
    #[instrument]
    pub fn new() -> Self {
        Self { state: restart() }
    }

    /// Returns the current state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Builds a fresh view of the current state.
    pub fn view(&self) -> View {
        view(&self.state)
    }

    /// Applies `action` and returns the resulting state.
    #[instrument(skip(self), fields(action = %action))]
    pub fn dispatch(&mut self, action: Action) -> &GameState {
        let next = match action {
            Action::PlayTurn(pos) => apply_move(self.state, pos),
            Action::Restart => restart(),
        };

        if next.status() != self.state.status() {
            info!(from = %self.state.status(), to = %next.status(), "Status changed");
        } else if next == self.state {
            debug!("Action left state unchanged");
        } else {
            debug!(to_move = %next.current_player(), "Turn passed");
        }

        self.state = next;
        &self.state
    }

    /// Plays board indices in order; indices outside 0-8 are skipped.
    #[instrument(skip(self))]
    pub fn replay(&mut self, indices: &[usize]) -> &GameState {
        for &index in indices {
            match Position::from_index(index) {
                Some(pos) => {
                    self.dispatch(Action::PlayTurn(pos));
                }
                None => warn!(index, "Skipping out-of-range move"),
            }
        }
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_engine::{GameStatus, Player};

    #[test]
    fn test_dispatch_replaces_state() {
        let mut session = Session::new();
        let after = *session.dispatch(Action::PlayTurn(Position::Center));
        assert_eq!(after.current_player(), Player::O);
        assert_eq!(session.state(), &after);
    }

    #[test]
    fn test_restart_from_finished_game() {
        let mut session = Session::new();
        session.replay(&[0, 1, 4, 2, 8]);
        assert_eq!(session.state().status().winner(), Some(Player::X));

        session.dispatch(Action::Restart);
        assert_eq!(session.state(), &GameState::new());
    }

    #[test]
    fn test_replay_skips_out_of_range() {
        let mut session = Session::new();
        let state = *session.replay(&[4, 12, 0]);
        assert_eq!(state.board().occupied_count(), 2);
        assert_eq!(state.status(), &GameStatus::Playing);
    }

    #[test]
    fn test_view_tracks_state() {
        let mut session = Session::new();
        session.replay(&[0, 1, 4, 2, 8]);
        assert_eq!(session.view().top().message(), "X wins!");
        assert!(session.view().bottom().is_some());
    }
}
