//! Cross-frontend primitives for presenting the game.
//!
//! Houses message logging, view-model snapshots, board layout math and the
//! move transition machinery that both the CLI and future graphical clients
//! can reuse.
pub mod barrier;
pub mod config;
pub mod frontend;
pub mod layout;
pub mod message;
pub mod presentation;
pub mod transition;
pub mod view_model;

pub use barrier::CompletionBarrier;
pub use config::{AnimationConfig, FrontendConfig, MessageConfig};
pub use frontend::Frontend;
pub use message::{MessageEntry, MessageLevel, MessageLog};
pub use presentation::{PresentationMapper, tile_rank};
pub use transition::{AnimatedTile, Transition};
pub use view_model::{TileView, ViewModel};
