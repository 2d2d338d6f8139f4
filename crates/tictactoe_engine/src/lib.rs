//! Pure tic-tac-toe game state engine.
//!
//! Every operation here is a pure function: transitions take the current
//! [`GameState`] by value and return the next one. Nothing is mutated in
//! place and nothing fails; a move that cannot be played leaves the state
//! as it was.
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{apply_move, restart, GameStatus, Player, Position};
//!
//! let state = restart();
//! let state = apply_move(state, Position::Center);
//! assert_eq!(state.current_player(), Player::O);
//! assert_eq!(state.status(), &GameStatus::Playing);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod game;
mod position;
mod rules;
mod status;
mod types;

pub use game::{GameState, apply_move, restart};
pub use position::Position;
pub use rules::{LINES, compute_status, find_winning_line, is_board_full, is_tile_taken};
pub use status::{GameStatus, WinningLine};
pub use types::{Board, Player, Square};
