//! UI rendering using the widget architecture with ViewModel.
//!
//! This module provides the main render entry point that composes all widgets
//! to create the complete terminal UI.
use anyhow::Result;
use ratatui::layout::{Constraint, Direction, Layout};

use crate::{
    presentation::{terminal::Tui, theme::RatatuiTheme, widgets},
    state::AppState,
};
use client_frontend_core::{MessageLog, Transition, ViewModel};

/// Rendering context containing all state and configuration needed for UI rendering.
pub struct RenderContext<'a> {
    pub view_model: &'a ViewModel,
    /// Move being presented, if any. Takes precedence over the settled board.
    pub transition: Option<&'a Transition>,
    pub messages: &'a MessageLog,
    pub app_state: &'a AppState,
    pub message_panel_height: u16,
    pub show_hints: bool,
    pub win_value: u32,
}

/// Render the terminal UI: header, board, messages and footer.
pub fn render_with_view_model(terminal: &mut Tui, ctx: &RenderContext) -> Result<()> {
    let theme = RatatuiTheme::new();

    terminal.draw(|frame| {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),                        // Header
                Constraint::Min(0),                           // Board
                Constraint::Length(ctx.message_panel_height), // Messages
                Constraint::Length(3),                        // Footer
            ])
            .split(frame.area());

        widgets::header::render(
            frame,
            chunks[0],
            ctx.view_model,
            ctx.app_state,
            ctx.win_value,
            &theme,
        );

        widgets::board::render(frame, chunks[1], ctx.view_model, ctx.transition, &theme);

        // Border takes two lines.
        let visible = ctx.message_panel_height.saturating_sub(2) as usize;
        let recent_messages: Vec<_> = ctx.messages.recent(visible).cloned().collect();
        widgets::messages::render(
            frame,
            chunks[2],
            &recent_messages,
            ctx.message_panel_height,
            &theme,
        );

        let hints = ctx.show_hints.then_some(ctx.view_model.legal.as_slice());
        widgets::footer::render(frame, chunks[3], ctx.app_state, hints);
    })?;

    Ok(())
}
