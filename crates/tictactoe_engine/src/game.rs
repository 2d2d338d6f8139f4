//! Game state and its transitions.

use serde::Serialize;
use tracing::{debug, instrument};

use crate::rules::{compute_status, is_tile_taken};
use crate::{Board, GameStatus, Player, Position};

/// Complete game state.
///
/// The status is only ever produced by [`compute_status`] inside
/// [`apply_move`], so it always agrees with the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct GameState {
    /// The board.
    board: Board,
    /// Player to move next.
    current_player: Player,
    /// Game status.
    status: GameStatus,
}

impl GameState {
    /// Creates the canonical initial state: empty board, X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            status: GameStatus::Playing,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move next.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the game status.
    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    /// Returns the positions that would be accepted by [`apply_move`].
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.status.is_playing() {
            Position::valid_moves(&self.board)
        } else {
            Vec::new()
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Plays the current player's mark at `target`.
///
/// Returns `state` unchanged if the game is over or the square is taken.
/// Otherwise the status is computed for the player who just moved, and the
/// turn passes to the opponent even when the move ends the game.
#[instrument(skip(state), fields(target = %target, player = %state.current_player))]
pub fn apply_move(state: GameState, target: Position) -> GameState {
    if !state.status.is_playing() {
        debug!(status = %state.status, "Ignoring move, game is over");
        return state;
    }

    if is_tile_taken(&state.board, target.to_index()) {
        debug!("Ignoring move, square is taken");
        return state;
    }

    let mover = state.current_player;
    let board = state.board.with_mark(target, mover);
    let status = compute_status(&board, mover);

    GameState {
        board,
        current_player: mover.opponent(),
        status,
    }
}

/// Returns the canonical initial state.
#[instrument]
pub fn restart() -> GameState {
    GameState::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_switches_player() {
        let state = apply_move(restart(), Position::Center);
        assert_eq!(state.current_player(), Player::O);
        assert!(state.board().square(Position::Center) == crate::Square::Occupied(Player::X));
        assert_eq!(state.status(), &GameStatus::Playing);
    }

    #[test]
    fn test_winning_move_still_switches_player() {
        let state = [
            Position::TopLeft,
            Position::MiddleLeft,
            Position::TopCenter,
            Position::Center,
            Position::TopRight,
        ]
        .into_iter()
        .fold(restart(), apply_move);
        assert_eq!(state.status().winner(), Some(Player::X));
        assert_eq!(state.current_player(), Player::O);
    }

    #[test]
    fn test_valid_moves_empty_when_finished() {
        let state = [
            Position::TopLeft,
            Position::MiddleLeft,
            Position::TopCenter,
            Position::Center,
            Position::TopRight,
        ]
        .into_iter()
        .fold(restart(), apply_move);
        assert!(state.valid_moves().is_empty());
        assert_eq!(restart().valid_moves().len(), 9);
    }
}
