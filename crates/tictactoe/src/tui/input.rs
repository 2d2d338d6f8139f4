//! Translates terminal events into commands for the event loop.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use tictactoe_engine::Position;
use tracing::{debug, instrument};

use super::layout::ScreenLayout;
use crate::{Action, View};

/// What the event loop should do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Hand an action to the session.
    Dispatch(Action),
    /// Move the keyboard focus.
    Focus(Position),
    /// Leave the game.
    Quit,
    /// Nothing to do.
    Ignore,
}

/// Moves the focus one step with the arrow keys, stopping at the edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let target = match key {
        KeyCode::Left => col.checked_sub(1).map(|c| (row, c)),
        KeyCode::Right => Some((row, col + 1)),
        KeyCode::Up => row.checked_sub(1).map(|r| (r, col)),
        KeyCode::Down => Some((row + 1, col)),
        _ => None,
    };
    target
        .and_then(|(r, c)| Position::from_row_col(r, c))
        .unwrap_or(cursor)
}

/// Maps one terminal event to a command.
///
/// Actions are taken from the view elements the input refers to, so a
/// hidden control can never be triggered.
#[instrument(skip(view, layout))]
pub fn translate(event: &Event, view: &View, focus: Position, layout: &ScreenLayout) -> Command {
    let command = match event {
        Event::Key(key) => translate_key(key, view, focus),
        Event::Mouse(mouse) => translate_mouse(mouse, view, layout),
        _ => Command::Ignore,
    };
    debug!(?command, "Translated input");
    command
}

fn translate_key(key: &KeyEvent, view: &View, focus: Position) -> Command {
    // crossterm reports both press and release on some platforms.
    if key.kind == KeyEventKind::Release {
        return Command::Ignore;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Command::Quit,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Command::Quit,
        KeyCode::Char('r') | KeyCode::Char('R') => view
            .restart_action()
            .map_or(Command::Ignore, Command::Dispatch),
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .and_then(|d| Position::from_index(d as usize - 1))
            .map_or(Command::Ignore, |pos| {
                Command::Dispatch(*view.grid().cell(pos).on_click())
            }),
        KeyCode::Enter | KeyCode::Char(' ') => match view.restart_action() {
            Some(action) => Command::Dispatch(action),
            None => Command::Dispatch(*view.grid().cell(focus).on_click()),
        },
        code @ (KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down) => {
            Command::Focus(move_cursor(focus, code))
        }
        _ => Command::Ignore,
    }
}

fn translate_mouse(mouse: &MouseEvent, view: &View, layout: &ScreenLayout) -> Command {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => layout
            .hit_test(view, mouse.column, mouse.row)
            .map_or(Command::Ignore, Command::Dispatch),
        _ => Command::Ignore,
    }
}
