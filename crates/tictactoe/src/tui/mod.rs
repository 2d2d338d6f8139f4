//! Terminal front end.

mod input;
mod layout;
mod theme;
mod ui;

pub use input::{Command, move_cursor, translate};
pub use layout::ScreenLayout;
pub use theme::Theme;

use std::io::{self, Stdout, Write};

use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use tictactoe_engine::Position;
use tracing::{debug, error, info, instrument};

use crate::render::Renderer;
use crate::{AppConfig, Session, View};

/// Paints views into a ratatui terminal.
///
/// Besides the terminal it tracks the keyboard focus cell and the layout of
/// the last frame, which mouse clicks are resolved against.
#[derive(Debug)]
pub struct TerminalRenderer<B: Backend> {
    terminal: Terminal<B>,
    theme: Theme,
    focus: Position,
    layout: Option<ScreenLayout>,
}

impl<B: Backend> TerminalRenderer<B> {
    /// Wraps a terminal.
    pub fn new(terminal: Terminal<B>, theme: Theme) -> Self {
        Self {
            terminal,
            theme,
            focus: Position::Center,
            layout: None,
        }
    }

    /// Returns the focused cell.
    pub fn focus(&self) -> Position {
        self.focus
    }

    /// Moves the focus.
    pub fn set_focus(&mut self, focus: Position) {
        self.focus = focus;
    }

    /// Layout of the last rendered frame.
    pub fn layout(&self) -> Option<&ScreenLayout> {
        self.layout.as_ref()
    }

    /// Returns the wrapped terminal.
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

impl<B: Backend> Renderer for TerminalRenderer<B> {
    type Error = B::Error;

    fn render(&mut self, view: &View) -> Result<(), Self::Error> {
        let (focus, theme) = (self.focus, self.theme);
        let mut layout = None;
        self.terminal.draw(|f| {
            layout = Some(ui::draw(f, view, focus, &theme));
        })?;
        self.layout = layout;
        Ok(())
    }
}

/// Puts the terminal into game mode; restores it on drop.
///
/// Raw mode is undone even if entering the alternate screen fails, since
/// the guard exists as soon as raw mode is on.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let guard = TerminalGuard;
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)
            .context("Failed to enter alternate screen")?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        debug!("Restoring terminal");
        restore_terminal();
    }
}

/// Leaves raw mode and undoes the screen changes, ignoring errors.
fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = teardown(&mut io::stdout());
}

/// Writes the commands that undo [`TerminalGuard::enter`].
fn teardown<W: Write>(out: &mut W) -> io::Result<()> {
    execute!(out, DisableMouseCapture, LeaveAlternateScreen, Show)
}

/// Restores the terminal before the previous panic hook prints.
fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore_terminal();
        previous(info);
    }));
}

/// Runs an interactive game until the player quits.
///
/// The terminal is restored before returning, also when setup or the game
/// loop fails, and before a panic message is printed.
pub fn run(config: &AppConfig) -> Result<()> {
    let theme = Theme::try_from(config.theme())?;

    info!("Starting terminal UI");

    install_panic_hook();
    let guard = TerminalGuard::enter()?;
    let terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let mut renderer = TerminalRenderer::new(terminal, theme);
    let mut session = Session::new();

    let res = event_loop(&mut renderer, &mut session);
    drop(guard);

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("Terminal UI closed");
    res
}

/// Draw, wait for one event, apply it, repeat.
#[instrument(skip_all)]
fn event_loop(
    renderer: &mut TerminalRenderer<CrosstermBackend<Stdout>>,
    session: &mut Session,
) -> Result<()> {
    loop {
        let view = session.view();
        renderer.render(&view)?;

        let event = event::read()?;
        let Some(layout) = renderer.layout().copied() else {
            continue;
        };

        match translate(&event, &view, renderer.focus(), &layout) {
            Command::Dispatch(action) => {
                session.dispatch(action);
            }
            Command::Focus(pos) => renderer.set_focus(pos),
            Command::Quit => {
                debug!("Quit requested");
                return Ok(());
            }
            Command::Ignore => {}
        }
    }
}
