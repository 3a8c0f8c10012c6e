//! Glue code tying the session and terminal UI together.
use anyhow::Result;
use async_trait::async_trait;
use game_core::GameSession;

use crate::config::CliConfig;
use crate::event::EventLoop;
use crate::presentation::terminal;
use client_frontend_core::{Frontend, FrontendConfig, MessageLog};

/// Terminal frontend.
pub struct CliFrontend {
    frontend_config: FrontendConfig,
    cli_config: CliConfig,
}

impl CliFrontend {
    pub fn new(frontend_config: FrontendConfig, cli_config: CliConfig) -> Self {
        Self {
            frontend_config,
            cli_config,
        }
    }
}

#[async_trait]
impl Frontend for CliFrontend {
    async fn run(&mut self, session: GameSession) -> Result<()> {
        tracing::info!("CLI client starting...");

        let mut messages = MessageLog::new(self.frontend_config.messages.capacity);
        messages.push_text(format!(
            "Welcome! Merge tiles to reach {}.",
            session.config().win_value
        ));

        let event_loop = EventLoop::new(
            session,
            messages,
            self.frontend_config.clone(),
            self.cli_config.clone(),
        );

        let mut terminal = terminal::init()?;
        let guard = terminal::TerminalGuard;

        let session = event_loop.run(&mut terminal).await?;

        drop(guard);
        tracing::info!(
            moves = session.moves(),
            best = session.best_tile(),
            outcome = %session.query_outcome(),
            "CLI client exiting"
        );

        Ok(())
    }
}
