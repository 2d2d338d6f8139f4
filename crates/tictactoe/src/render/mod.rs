//! Renderers paint a [`View`](crate::View) onto some output.

mod text;

pub use text::{TextRenderer, render_to_string};

use crate::View;

/// Something that can display a view tree.
///
/// Renderers are handed the complete view on every call and redraw it in
/// full.
pub trait Renderer {
    /// Error raised by the output.
    type Error;

    /// Paints `view`, replacing whatever was shown before.
    fn render(&mut self, view: &View) -> Result<(), Self::Error>;
}
