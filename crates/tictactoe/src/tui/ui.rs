//! Paints a view tree into a ratatui frame.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_engine::Position;

use super::layout::ScreenLayout;
use super::theme::Theme;
use crate::View;
use crate::view::{Cell, Headline};


/// Draws `view` over the whole frame and returns the layout used.
pub fn draw(frame: &mut Frame, view: &View, focus: Position, theme: &Theme) -> ScreenLayout {
    let layout = ScreenLayout::new(frame.area());

    draw_headline(frame, layout.top, view.top());

    for cell in view.grid().cells() {
        draw_cell(
            frame,
            layout.cells[cell.position().to_index()],
            cell,
            *cell.position() == focus,
            theme,
        );
    }
    for area in layout.row_separators {
        draw_separator(frame, area);
    }
    for area in layout.col_separators {
        draw_separator_vertical(frame, area);
    }

    if let Some(control) = view.bottom() {
        let button = Paragraph::new(*control.label())
            .style(Style::default().add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(button, layout.restart);
    }

    let help = Paragraph::new(help_text(view))
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, layout.help);

    layout
}

/// Key help, listing the cells that can still be played.
fn help_text(view: &View) -> String {
    let keys = if view.bottom().is_some() {
        "Enter/R: restart | Q: quit"
    } else {
        "click or arrows+Enter: play | Q: quit"
    };
    if view.open_cells().is_empty() {
        return keys.to_string();
    }
    let open: Vec<String> = view
        .open_cells()
        .iter()
        .map(|pos| (pos.to_index() + 1).to_string())
        .collect();
    format!("Open: {} | {}", open.join(" "), keys)
}

fn draw_headline(frame: &mut Frame, area: Rect, headline: &Headline) {
    let message = Line::from(Span::styled(
        headline.message().as_str(),
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    ));
    let turn = Line::from(Span::styled(
        headline.turn().as_deref().unwrap_or_default(),
        Style::default().fg(Color::Yellow),
    ));

    let paragraph = Paragraph::new(vec![message, turn])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Tic Tac Toe"));
    frame.render_widget(paragraph, area);
}

fn draw_cell(frame: &mut Frame, area: Rect, cell: &Cell, focused: bool, theme: &Theme) {
    let (symbol, base_style) = match cell.marker() {
        None => (
            (cell.position().to_index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Some(player) => (
            player.to_string(),
            Style::default()
                .fg(theme.mark(*player))
                .add_modifier(Modifier::BOLD),
        ),
    };

    let style = if *cell.winning() {
        base_style.bg(theme.winning).fg(Color::Black)
    } else if focused {
        base_style.bg(theme.focus).fg(Color::Black)
    } else {
        base_style
    };

    // Middle row of the cell carries the symbol.
    let lines = vec![Line::from(""), Line::from(symbol), Line::from("")];
    let paragraph = Paragraph::new(lines)
        .style(style)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let lines: Vec<Line> = (0..area.height).map(|_| Line::from("│")).collect();
    let sep = Paragraph::new(lines).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}
