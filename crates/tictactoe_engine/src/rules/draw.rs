//! Occupancy checks used for draw detection.

use crate::{Board, Square};
use tracing::instrument;

/// Checks if the square at `index` holds a mark.
///
/// Indices outside 0-8 are never taken.
#[instrument]
pub fn is_tile_taken(board: &Board, index: usize) -> bool {
    matches!(board.get(index), Some(Square::Occupied(_)))
}

/// Checks if the board is full (all squares occupied).
///
/// A full board with no winner indicates a draw.
#[instrument]
pub fn is_board_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position};

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new();
        assert!(!is_board_full(&board));
        assert!(!is_tile_taken(&board, 0));
    }

    #[test]
    fn test_partial_board_not_full() {
        let board = Board::new().with_mark(Position::Center, Player::X);
        assert!(!is_board_full(&board));
        assert!(is_tile_taken(&board, 4));
        assert!(!is_tile_taken(&board, 3));
    }

    #[test]
    fn test_full_board() {
        let board = Position::ALL
            .iter()
            .fold(Board::new(), |b, pos| b.with_mark(*pos, Player::X));
        assert!(is_board_full(&board));
    }

    #[test]
    fn test_out_of_range_not_taken() {
        let board = Position::ALL
            .iter()
            .fold(Board::new(), |b, pos| b.with_mark(*pos, Player::O));
        assert!(!is_tile_taken(&board, 9));
    }
}
