//! Stateless state-to-view mapping.
//!
//! [`view`] reads a [`GameState`] and builds the whole view tree from
//! scratch. Elements that react to input carry the [`Action`] they trigger,
//! so front ends never reach into the engine directly.

use derive_getters::Getters;
use serde::Serialize;
use tictactoe_engine::{GameState, GameStatus, Player, Position};
use tracing::instrument;

use crate::Action;

/// Label of the restart control.
pub const RESTART_LABEL: &str = "RESTART";

/// Complete view: headline on top, grid in the middle, restart below.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct View {
    /// Headline region.
    top: Headline,
    /// Board region.
    grid: Grid,
    /// Only present once the game is over.
    bottom: Option<RestartControl>,
    /// Cells a move can still go to, in index order.
    open_cells: Vec<Position>,
}

/// Status message and, while playing, whose turn it is.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct Headline {
    /// `playing`, `draw` or `<player> wins!`.
    message: String,
    /// `Turn: <player>` while the game is on.
    turn: Option<String>,
}

/// The 3x3 grid of cells in row-major order.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct Grid {
    /// Cells indexed by board position.
    cells: [Cell; 9],
}

impl Grid {
    /// Returns the cell at `pos`.
    pub fn cell(&self, pos: Position) -> &Cell {
        &self.cells[pos.to_index()]
    }
}

/// One clickable board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize)]
pub struct Cell {
    /// Board position of the cell.
    position: Position,
    /// Mark shown in the cell.
    marker: Option<Player>,
    /// Part of the winning line.
    winning: bool,
    /// Triggered when the cell is clicked.
    on_click: Action,
}

/// Control that starts a new game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize)]
pub struct RestartControl {
    /// Button text.
    #[getter(skip)]
    label: &'static str,
    /// Triggered when the control is activated.
    on_activate: Action,
}

impl RestartControl {
    /// Button text.
    pub fn label(&self) -> &&'static str {
        &self.label
    }
}

impl View {
    /// The action behind the restart control, if it is shown.
    pub fn restart_action(&self) -> Option<Action> {
        self.bottom.map(|control| control.on_activate)
    }
}

/// Builds the view for `state`.
#[instrument(skip(state), fields(status = %state.status()))]
pub fn view(state: &GameState) -> View {
    let status = state.status();

    let top = Headline {
        message: status.to_string(),
        turn: status
            .is_playing()
            .then(|| format!("Turn: {}", state.current_player())),
    };

    let cells = Position::ALL.map(|position| Cell {
        position,
        marker: state.board().square(position).player(),
        winning: status
            .winning_line()
            .is_some_and(|line| line.contains(position)),
        on_click: Action::PlayTurn(position),
    });

    let bottom = match status {
        GameStatus::Playing => None,
        GameStatus::Draw | GameStatus::Won { .. } => Some(RestartControl {
            label: RESTART_LABEL,
            on_activate: Action::Restart,
        }),
    };

    View {
        top,
        grid: Grid { cells },
        bottom,
        open_cells: state.valid_moves(),
    }
}
