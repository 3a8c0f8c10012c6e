//! Footer widget displaying context-sensitive key bindings.

use game_core::Direction;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::state::{AppMode, AppState};

/// Render the footer panel with key bindings help. `hints` lists the
/// directions that would move tiles; `None` hides the list.
pub fn render(frame: &mut Frame, area: Rect, app_state: &AppState, hints: Option<&[Direction]>) {
    let mut spans = match app_state.mode {
        AppMode::Ready | AppMode::Presenting => vec![
            Span::raw("[hjkl/WASD/Arrows] Slide | "),
            Span::raw("[n] New game | "),
            Span::raw("[q/ESC] Quit"),
        ],
        AppMode::GameOver => vec![Span::raw("[n] New game | "), Span::raw("[q/ESC] Quit")],
    };
    if app_state.accepts_moves()
        && let Some(hints) = hints
    {
        spans.push(Span::raw(format!(" | Can move: {}", hint_text(hints))));
    }

    let paragraph =
        Paragraph::new(vec![Line::from(spans)]).block(Block::default().borders(Borders::ALL));

    frame.render_widget(paragraph, area);
}

fn hint_text(directions: &[Direction]) -> String {
    if directions.is_empty() {
        return "none".to_string();
    }
    directions
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
