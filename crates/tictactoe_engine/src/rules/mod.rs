//! Game rules for tic-tac-toe.
//!
//! Pure functions for evaluating a board. Rules are separated from state
//! transitions so they can be checked on arbitrary boards.

mod draw;
mod win;

pub use draw::{is_board_full, is_tile_taken};
pub use win::{LINES, find_winning_line};

use crate::{Board, GameStatus, Player};
use tracing::instrument;

/// Classifies `board` from the point of view of `player`, the player who
/// just moved.
///
/// A win for `player` takes precedence over a full board.
#[instrument]
pub fn compute_status(board: &Board, player: Player) -> GameStatus {
    if let Some(line) = find_winning_line(board, player) {
        GameStatus::Won { player, line }
    } else if is_board_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::Playing
    }
}
