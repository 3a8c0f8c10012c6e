//! Messages widget displaying recent session events.

use client_frontend_core::{MessageEntry, PresentationMapper};
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, List, ListDirection, ListItem},
};

/// Render the message log panel.
///
/// Expects `messages` newest first and displays them bottom-to-top.
pub fn render<T: PresentationMapper<Style = Style>>(
    frame: &mut Frame,
    area: Rect,
    messages: &[MessageEntry],
    panel_height: u16,
    theme: &T,
) {
    let mut items: Vec<ListItem> = messages
        .iter()
        .map(|entry| ListItem::new(format_message(entry)).style(theme.style_message(entry.level)))
        .collect();

    // Pad with empty lines to maintain consistent height
    while items.len() < panel_height.saturating_sub(2) as usize {
        items.push(ListItem::new(""));
    }

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Messages"))
        .direction(ListDirection::BottomToTop);

    frame.render_widget(list, area);
}

/// Format a message entry with its optional move counter.
fn format_message(entry: &MessageEntry) -> String {
    match entry.moves {
        Some(moves) => format!("[{}] {}", moves, entry.text),
        None => entry.text.clone(),
    }
}
