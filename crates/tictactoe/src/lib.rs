//! Terminal tic-tac-toe.
//!
//! # Architecture
//!
//! - **Engine**: pure state transitions from [`tictactoe_engine`]
//! - **View**: [`view`] maps a state to a view tree whose elements carry
//!   the [`Action`] they trigger
//! - **Session**: [`Session`] owns the current state and applies actions
//! - **Renderers**: [`Renderer`] implementations paint the view, either as
//!   text or into a ratatui terminal ([`tui`])
//!
//! # Example
//!
//! ```
//! use tictactoe::{Session, render_to_string};
//!
//! let mut session = Session::new();
//! session.replay(&[0, 1, 4, 2, 8]);
//! assert!(render_to_string(&session.view()).starts_with("X wins!"));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod config;
mod logging;
mod render;
mod session;
pub mod tui;
pub mod view;

pub use action::Action;
pub use config::{AppConfig, ConfigError, DEFAULT_CONFIG_FILE, LogConfig, ThemeConfig};
pub use logging::{init_tracing, init_tracing_best_effort};
pub use render::{Renderer, TextRenderer, render_to_string};
pub use session::Session;
pub use view::{View, view};

pub use tictactoe_engine::{GameState, GameStatus, Player, Position};
