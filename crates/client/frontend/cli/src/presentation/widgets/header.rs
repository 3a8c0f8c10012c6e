//! Header widget displaying session counters and the outcome.

use client_frontend_core::{PresentationMapper, ViewModel};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::state::AppState;

/// Render the header panel with moves, best tile, outcome and mode.
pub fn render<T: PresentationMapper<Style = Style>>(
    frame: &mut Frame,
    area: Rect,
    view_model: &ViewModel,
    app_state: &AppState,
    win_value: u32,
    theme: &T,
) {
    let text = vec![Line::from(vec![
        Span::raw("Moves: "),
        Span::styled(
            view_model.moves.to_string(),
            Style::default().fg(Color::Yellow),
        ),
        Span::raw(" | Best: "),
        Span::styled(
            view_model.best_tile.to_string(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(" / {win_value}")),
        Span::raw(" | "),
        Span::styled(
            view_model.outcome.to_string(),
            theme.style_outcome(view_model.outcome),
        ),
        Span::styled(
            app_state.mode_label(),
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ),
    ])];

    let paragraph =
        Paragraph::new(text).block(Block::default().borders(Borders::ALL).title("Slide"));

    frame.render_widget(paragraph, area);
}
