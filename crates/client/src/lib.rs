//! Top-level client wiring a game session to a frontend.
//!
//! # Architecture
//!
//! ```text
//! Client (Top-level container)
//!   ├─→ GameSession (rules, board, randomness)
//!   └─→ Frontend (UI layer - CLI, GUI, etc.)
//! ```
//!
//! The session is built from [`ClientConfig`] and handed to the frontend,
//! which owns it until the player quits.

mod builder;
pub mod config;

pub use builder::ClientBuilder;
pub use config::ClientConfig;

// Re-export Frontend trait from client-frontend-core
pub use client_frontend_core::Frontend;

use anyhow::Result;
use game_core::GameSession;

/// Top-level client container.
pub struct Client {
    session: GameSession,
    frontend: Box<dyn Frontend>,
}

impl Client {
    /// Create a new ClientBuilder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Transfers control to the frontend until the user quits.
    ///
    /// # Errors
    ///
    /// Returns an error if the frontend fails.
    pub async fn run(self) -> Result<()> {
        let Client {
            session,
            mut frontend,
        } = self;

        tracing::info!(
            seed = session.state().game_seed,
            size = session.config().board_size,
            "Handing session to frontend"
        );
        frontend.run(session).await
    }
}
