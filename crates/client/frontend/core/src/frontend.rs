//! Trait describing a runnable client front-end.
use anyhow::Result;
use async_trait::async_trait;
use game_core::GameSession;

/// Frontend abstraction for UI layers.
///
/// The composition root builds a [`GameSession`] and hands ownership to the
/// frontend, which drives it from player input until the player quits.
///
/// # Implementations
///
/// - `CliFrontend`: Terminal-based UI (ratatui + crossterm)
/// - Future: `GuiFrontend`, `WebFrontend`, etc.
///
/// # Example Implementation
///
/// ```no_run
/// use async_trait::async_trait;
/// use client_frontend_core::Frontend;
/// use game_core::{Direction, GameSession};
/// use anyhow::Result;
///
/// struct AlwaysLeft;
///
/// #[async_trait]
/// impl Frontend for AlwaysLeft {
///     async fn run(&mut self, mut session: GameSession) -> Result<()> {
///         while session.apply_move(Direction::Left)?.changed {}
///         Ok(())
///     }
/// }
/// ```
#[async_trait]
pub trait Frontend: Send {
    /// Run the frontend event loop.
    ///
    /// It should return once the user quits the application.
    ///
    /// # Errors
    ///
    /// Returns an error if the frontend encounters a fatal error.
    async fn run(&mut self, session: GameSession) -> Result<()>;
}
