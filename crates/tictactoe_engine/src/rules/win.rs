//! Win detection logic for tic-tac-toe.

use crate::{Board, Player, Position, Square, WinningLine};
use tracing::instrument;

/// The 8 winning triples in checking order: rows, columns, diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Finds the first line in [`LINES`] held entirely by `player`.
#[instrument]
pub fn find_winning_line(board: &Board, player: Player) -> Option<WinningLine> {
    LINES
        .into_iter()
        .find(|line| {
            line.iter()
                .all(|pos| board.square(*pos) == Square::Occupied(player))
        })
        .map(WinningLine::new)
}
