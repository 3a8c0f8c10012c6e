//! Event loop orchestrating user input, move transitions, and rendering.
//!
//! This module coordinates three main concerns:
//! - Keyboard input processing (moves, new game, quit)
//! - Presenting each changed move as a frame-by-frame transition
//! - Rendering using the ViewModel

use anyhow::Result;
use game_core::GameSession;
use tokio::time::{self, Duration};

use crate::{config::CliConfig, input::InputHandler, presentation::terminal::Tui, state::AppState};
use client_frontend_core::{FrontendConfig, MessageLog, Transition, ViewModel};

/// Event loop owning the session and all presentation state.
///
/// This is the main orchestrator that:
/// - Owns the GameSession and applies moves to it
/// - Owns the ViewModel (single source of truth for presentation state)
/// - Gates input while a transition is presenting
pub struct EventLoop {
    pub(crate) session: GameSession,
    pub(crate) input: InputHandler,
    pub(crate) app_state: AppState,
    pub(crate) view_model: ViewModel,
    pub(crate) messages: MessageLog,
    /// Move currently being presented.
    pub(crate) transition: Option<Transition>,
    pub(crate) frontend_config: FrontendConfig,
    pub(crate) cli_config: CliConfig,
}

impl EventLoop {
    pub fn new(
        session: GameSession,
        messages: MessageLog,
        frontend_config: FrontendConfig,
        cli_config: CliConfig,
    ) -> Self {
        let view_model = ViewModel::from_session(&session);

        Self {
            session,
            input: InputHandler::new(),
            app_state: AppState::new(),
            view_model,
            messages,
            transition: None,
            frontend_config,
            cli_config,
        }
    }

    /// Runs until the player quits and hands the session back.
    pub async fn run(mut self, terminal: &mut Tui) -> Result<GameSession> {
        // Initial render
        self.render(terminal)?;

        let mut frames = time::interval(Duration::from_millis(
            self.frontend_config.animation.frame_interval_ms,
        ));
        frames.set_missed_tick_behavior(time::MissedTickBehavior::Skip);

        loop {
            frames.tick().await;

            if self.advance_transition() {
                self.render(terminal)?;
            }
            if self.handle_input_tick(terminal)? {
                break;
            }
        }

        Ok(self.session)
    }
}
