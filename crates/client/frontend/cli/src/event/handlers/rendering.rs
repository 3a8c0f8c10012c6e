//! Rendering handlers.

use anyhow::Result;

use super::super::EventLoop;
use crate::presentation::{terminal::Tui, ui};

impl EventLoop {
    /// Render current state using ViewModel.
    pub(in crate::event) fn render(&self, terminal: &mut Tui) -> Result<()> {
        let ctx = ui::RenderContext {
            view_model: &self.view_model,
            transition: self.transition.as_ref(),
            messages: &self.messages,
            app_state: &self.app_state,
            message_panel_height: self.cli_config.ui.message_panel_height,
            show_hints: self.cli_config.ui.show_hints,
            win_value: self.session.config().win_value,
        };

        ui::render_with_view_model(terminal, &ctx)
    }
}
