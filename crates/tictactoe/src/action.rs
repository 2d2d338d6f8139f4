//! User intents produced by the view.

use serde::Serialize;
use tictactoe_engine::Position;

/// What a view element does when activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, derive_more::Display)]
pub enum Action {
    /// Play the current player's mark in a cell.
    #[display("play {_0}")]
    PlayTurn(Position),
    /// Throw the current game away and start over.
    #[display("restart")]
    Restart,
}
