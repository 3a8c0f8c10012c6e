//! Client builder with dependency injection pattern.

use anyhow::{Context, Result};
use game_core::GameSession;

use crate::{Client, ClientConfig, Frontend};

/// Builder for constructing a Client with proper validation.
///
/// # Design Principles
///
/// - **Required fields**: Session (or its config) and Frontend must be provided
/// - **Fail-fast validation**: Missing fields or invalid rules fail `build()`
/// - **Fluent API**: Chainable methods for ergonomic construction
#[derive(Default)]
pub struct ClientBuilder {
    session: Option<GameSession>,
    config: Option<ClientConfig>,
    frontend: Option<Box<dyn Frontend>>,
}

impl ClientBuilder {
    /// Create a new ClientBuilder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use an already started session.
    pub fn session(mut self, session: GameSession) -> Self {
        self.session = Some(session);
        self
    }

    /// Start a fresh session from `config` at build time.
    ///
    /// Ignored when a session was supplied with [`ClientBuilder::session`].
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the frontend (required).
    pub fn frontend(mut self, frontend: impl Frontend + 'static) -> Self {
        self.frontend = Some(Box::new(frontend));
        self
    }

    /// Build the Client.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Neither a session nor a config is set
    /// - The configured rules are invalid
    /// - Frontend is not set (required)
    pub fn build(self) -> Result<Client> {
        let session = match (self.session, self.config) {
            (Some(session), _) => session,
            (None, Some(config)) => GameSession::new(config.game, config.seed)
                .context("Failed to start game session")?,
            (None, None) => anyhow::bail!("Session is required. Use .session() or .config()."),
        };

        let frontend = self
            .frontend
            .context("Frontend is required. Use .frontend() to set it.")?;

        Ok(Client { session, frontend })
    }
}
