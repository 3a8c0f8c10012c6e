//! Framework-agnostic presentation mapping traits.
//!
//! Each frontend (TUI, GUI, Web) implements [`PresentationMapper`] with its
//! own styling system while sharing the same view model.

use game_core::Outcome;

use crate::message::MessageLevel;

/// Framework-agnostic presentation mapper for board elements.
///
/// # Example
///
/// ```ignore
/// impl PresentationMapper for RatatuiTheme {
///     type Style = ratatui::style::Style;
///
///     fn style_tile(&self, value: u32) -> Self::Style {
///         let color = PALETTE[tile_rank(value).min(PALETTE.len() - 1)];
///         Style::default().bg(color)
///     }
///     // ...
/// }
/// ```
pub trait PresentationMapper {
    /// Style type for this frontend (e.g., `ratatui::style::Style`).
    type Style: Clone;

    /// Style for an occupied cell holding `value`.
    fn style_tile(&self, value: u32) -> Self::Style;

    /// Style for an empty cell.
    fn style_empty(&self) -> Self::Style;

    /// Style for message log entries based on level.
    fn style_message(&self, level: MessageLevel) -> Self::Style;

    /// Style for the outcome shown in the header.
    fn style_outcome(&self, outcome: Outcome) -> Self::Style;
}

/// Colour rank of a tile: 0 for 2, 1 for 4, and so on. Values that are not
/// powers of two round down.
pub fn tile_rank(value: u32) -> usize {
    match value {
        0 | 1 => 0,
        v => (v.ilog2() - 1) as usize,
    }
}
