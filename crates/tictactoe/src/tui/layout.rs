//! Screen geometry shared by painting and mouse hit testing.

use ratatui::layout::{Constraint, Direction, Layout, Position as ScreenPos, Rect};
use tictactoe_engine::Position;

use crate::{Action, View};

/// Width of one board cell in columns.
pub const CELL_WIDTH: u16 = 9;
/// Height of one board cell in rows.
pub const CELL_HEIGHT: u16 = 3;
/// Width of the restart button, borders included.
pub const RESTART_WIDTH: u16 = 13;

const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

/// Where each region of the view lands on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Headline block.
    pub top: Rect,
    /// Board cells in row-major order.
    pub cells: [Rect; 9],
    /// Horizontal separators between rows.
    pub row_separators: [Rect; 2],
    /// Vertical separators, two per row.
    pub col_separators: [Rect; 6],
    /// Restart button.
    pub restart: Rect,
    /// Key help line.
    pub help: Rect,
}

impl ScreenLayout {
    /// Computes the layout for a terminal area.
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),            // Headline
                Constraint::Min(BOARD_HEIGHT),    // Board
                Constraint::Length(3),            // Restart
                Constraint::Length(1),            // Help
            ])
            .split(area);

        let board = center_rect(chunks[1], BOARD_WIDTH, BOARD_HEIGHT);
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(CELL_HEIGHT),
                Constraint::Length(1),
                Constraint::Length(CELL_HEIGHT),
                Constraint::Length(1),
                Constraint::Length(CELL_HEIGHT),
            ])
            .split(board);

        let mut cells = [Rect::default(); 9];
        let mut col_separators = [Rect::default(); 6];
        for row in 0..3 {
            let cols = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([
                    Constraint::Length(CELL_WIDTH),
                    Constraint::Length(1),
                    Constraint::Length(CELL_WIDTH),
                    Constraint::Length(1),
                    Constraint::Length(CELL_WIDTH),
                ])
                .split(rows[row * 2]);
            for col in 0..3 {
                cells[row * 3 + col] = cols[col * 2];
            }
            col_separators[row * 2] = cols[1];
            col_separators[row * 2 + 1] = cols[3];
        }

        Self {
            top: chunks[0],
            cells,
            row_separators: [rows[1], rows[3]],
            col_separators,
            restart: center_rect(chunks[2], RESTART_WIDTH, 3),
            help: chunks[3],
        }
    }

    /// Returns the board cell under a screen coordinate.
    pub fn cell_at(&self, column: u16, row: u16) -> Option<Position> {
        let point = ScreenPos::new(column, row);
        self.cells
            .iter()
            .position(|rect| rect.contains(point))
            .and_then(Position::from_index)
    }

    /// Resolves a click to the action of the view element under it.
    ///
    /// The restart button only responds while the view shows it.
    pub fn hit_test(&self, view: &View, column: u16, row: u16) -> Option<Action> {
        if let Some(pos) = self.cell_at(column, row) {
            return Some(*view.grid().cell(pos).on_click());
        }
        if self.restart.contains(ScreenPos::new(column, row)) {
            return view.restart_action();
        }
        None
    }
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
