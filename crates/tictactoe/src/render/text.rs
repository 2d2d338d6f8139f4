//! Plain-text rendering.

use std::io::Write;

use tracing::instrument;

use super::Renderer;
use crate::View;
use crate::view::Cell;

/// Formats a view as plain text.
///
/// Empty cells show their 1-based number, winning cells are bracketed.
#[instrument(skip(view))]
pub fn render_to_string(view: &View) -> String {
    let mut out = String::new();

    out.push_str(view.top().message());
    out.push('\n');
    if let Some(turn) = view.top().turn() {
        out.push_str(turn);
        out.push('\n');
    }
    out.push('\n');

    for (row, cells) in view.grid().cells().chunks(3).enumerate() {
        if row > 0 {
            out.push_str("---+---+---\n");
        }
        let line: Vec<String> = cells.iter().map(cell_text).collect();
        out.push_str(&line.join("|"));
        out.push('\n');
    }

    if let Some(control) = view.bottom() {
        out.push('\n');
        out.push_str(&format!("[ {} ]\n", control.label()));
    }

    out
}

fn cell_text(cell: &Cell) -> String {
    let mark = match cell.marker() {
        Some(player) => player.to_string(),
        None => (cell.position().to_index() + 1).to_string(),
    };
    if *cell.winning() {
        format!("[{}]", mark)
    } else {
        format!(" {} ", mark)
    }
}

/// Writes text renderings to any [`Write`] sink.
#[derive(Debug)]
pub struct TextRenderer<W> {
    out: W,
}

impl<W: Write> TextRenderer<W> {
    /// Creates a renderer writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consumes the renderer, returning the sink.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    type Error = std::io::Error;

    fn render(&mut self, view: &View) -> Result<(), Self::Error> {
        self.out.write_all(render_to_string(view).as_bytes())?;
        self.out.flush()
    }
}
