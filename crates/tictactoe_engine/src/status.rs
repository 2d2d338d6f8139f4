//! Game outcome classification.

use serde::{Deserialize, Serialize};

use crate::{Player, Position};

/// The three positions of a satisfied winning triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningLine([Position; 3]);

impl WinningLine {
    pub(crate) fn new(positions: [Position; 3]) -> Self {
        Self(positions)
    }

    /// Positions of the line, in enumeration order.
    pub fn positions(&self) -> [Position; 3] {
        self.0
    }

    /// Board indices of the line.
    pub fn indices(&self) -> [usize; 3] {
        self.0.map(Position::to_index)
    }

    /// Whether `pos` is part of the line.
    pub fn contains(&self, pos: Position) -> bool {
        self.0.contains(&pos)
    }
}

/// Current status of the game.
///
/// The `Display` form is the headline message shown to players.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum GameStatus {
    /// Game is ongoing.
    #[display("playing")]
    Playing,
    /// Board is full with no winner.
    #[display("draw")]
    Draw,
    /// `player` completed `line`.
    #[display("{player} wins!")]
    Won {
        /// The winner.
        player: Player,
        /// The completed triple.
        line: WinningLine,
    },
}

impl GameStatus {
    /// Returns true while moves can still be made.
    pub fn is_playing(&self) -> bool {
        matches!(self, GameStatus::Playing)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Won { player, .. } => Some(*player),
            _ => None,
        }
    }

    /// Returns the winning line if there is one.
    pub fn winning_line(&self) -> Option<&WinningLine> {
        match self {
            GameStatus::Won { line, .. } => Some(line),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(GameStatus::Playing.to_string(), "playing");
        assert_eq!(GameStatus::Draw.to_string(), "draw");
        let line = WinningLine::new([Position::TopLeft, Position::Center, Position::BottomRight]);
        let won = GameStatus::Won {
            player: Player::O,
            line,
        };
        assert_eq!(won.to_string(), "O wins!");
        assert_eq!(won.winner(), Some(Player::O));
        assert_eq!(won.winning_line().map(WinningLine::indices), Some([0, 4, 8]));
    }
}
