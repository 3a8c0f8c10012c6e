//! Ratatui theme implementation of PresentationMapper.
//!
//! This module provides concrete styling for the terminal UI, implementing
//! the framework-agnostic PresentationMapper trait from client-frontend-core.

use client_frontend_core::{MessageLevel, PresentationMapper, tile_rank};
use game_core::Outcome;
use ratatui::style::{Color, Modifier, Style};

/// Background per tile rank, 2 through 2048. Larger tiles reuse the last.
const TILE_COLORS: [Color; 11] = [
    Color::Rgb(238, 228, 218),
    Color::Rgb(237, 224, 200),
    Color::Rgb(242, 177, 121),
    Color::Rgb(245, 149, 99),
    Color::Rgb(246, 124, 95),
    Color::Rgb(246, 94, 59),
    Color::Rgb(237, 207, 114),
    Color::Rgb(237, 204, 97),
    Color::Rgb(237, 200, 80),
    Color::Rgb(237, 197, 63),
    Color::Rgb(237, 194, 46),
];

/// Ranks below this use dark text on the light tiles.
const LIGHT_TEXT_FROM_RANK: usize = 2;

/// Ratatui-specific theme implementing PresentationMapper.
///
/// This provides consistent color schemes and styling rules for the CLI.
#[derive(Clone, Copy, Debug, Default)]
pub struct RatatuiTheme;

impl PresentationMapper for RatatuiTheme {
    type Style = Style;

    fn style_tile(&self, value: u32) -> Self::Style {
        let rank = tile_rank(value);
        let background = TILE_COLORS[rank.min(TILE_COLORS.len() - 1)];
        let foreground = if rank < LIGHT_TEXT_FROM_RANK {
            Color::Rgb(119, 110, 101)
        } else {
            Color::Rgb(249, 246, 242)
        };
        Style::default()
            .bg(background)
            .fg(foreground)
            .add_modifier(Modifier::BOLD)
    }

    fn style_empty(&self) -> Self::Style {
        Style::default().bg(Color::Rgb(205, 193, 180))
    }

    fn style_message(&self, level: MessageLevel) -> Self::Style {
        match level {
            MessageLevel::Info => Style::default().fg(Color::White),
            MessageLevel::Success => Style::default().fg(Color::LightGreen),
            MessageLevel::Warning => Style::default().fg(Color::Yellow),
            MessageLevel::Error => Style::default().fg(Color::LightRed),
        }
    }

    fn style_outcome(&self, outcome: Outcome) -> Self::Style {
        let color = match outcome {
            Outcome::Continue => Color::Cyan,
            Outcome::Won => Color::LightGreen,
            Outcome::Lost => Color::LightRed,
        };
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }
}

impl RatatuiTheme {
    /// Create a new RatatuiTheme instance.
    pub fn new() -> Self {
        Self
    }

    /// Board frame style.
    pub fn style_board(&self) -> Style {
        Style::default().bg(Color::Rgb(187, 173, 160))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn huge_tiles_reuse_last_color() {
        let theme = RatatuiTheme::new();
        assert_eq!(theme.style_tile(2048).bg, theme.style_tile(1 << 20).bg);
        assert_ne!(theme.style_tile(2).bg, theme.style_tile(4).bg);
    }

    #[test]
    fn small_tiles_use_dark_text() {
        let theme = RatatuiTheme::new();
        assert_ne!(theme.style_tile(4).fg, theme.style_tile(8).fg);
    }
}
