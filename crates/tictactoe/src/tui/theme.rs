//! Resolved terminal colours.

use std::str::FromStr;

use ratatui::style::Color;
use tictactoe_engine::Player;
use tracing::instrument;

use crate::config::{ConfigError, ThemeConfig};

/// Colours used when painting the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Colour of X marks.
    pub x: Color,
    /// Colour of O marks.
    pub o: Color,
    /// Background of winning cells.
    pub winning: Color,
    /// Background of the focused cell.
    pub focus: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            x: Color::Blue,
            o: Color::Red,
            winning: Color::Green,
            focus: Color::White,
        }
    }
}

impl Theme {
    /// Colour of `player`'s marks.
    pub fn mark(&self, player: Player) -> Color {
        match player {
            Player::X => self.x,
            Player::O => self.o,
        }
    }
}

fn parse_color(field: &str, value: &str) -> Result<Color, ConfigError> {
    Color::from_str(value)
        .map_err(|_| ConfigError::new(format!("Unknown colour {:?} for theme.{}", value, field)))
}

impl TryFrom<&ThemeConfig> for Theme {
    type Error = ConfigError;

    #[instrument]
    fn try_from(config: &ThemeConfig) -> Result<Self, Self::Error> {
        Ok(Self {
            x: parse_color("x", config.x())?,
            o: parse_color("o", config.o())?,
            winning: parse_color("winning", config.winning())?,
            focus: parse_color("focus", config.focus())?,
        })
    }
}
