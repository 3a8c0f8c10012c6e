//! Deterministic sliding-tile merge engine.
//!
//! `game-core` defines the canonical rules (grid, orientation transforms,
//! row collapse, spawning, terminal-state evaluation) and exposes pure APIs
//! that frontends and offline tools share. All state mutation flows through
//! [`engine::GameEngine`], usually driven by a [`GameSession`].
//!
//! ```
//! use game_core::{Direction, GameConfig, GameSession, Outcome};
//!
//! let mut session = GameSession::new(GameConfig::default(), 42).unwrap();
//! let result = session.apply_move(Direction::Left).unwrap();
//! if result.changed {
//!     let _plan = result.motion_plan();
//! }
//! assert_ne!(session.query_outcome(), Outcome::Lost);
//! ```
pub mod action;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod session;
pub mod state;

pub use action::Direction;
pub use config::GameConfig;
pub use engine::{
    GameEngine, Merge, MoveResult, Outcome, Slide, SpawnedTile, collapse_left, evaluate,
    legal_directions, reverse_rows, slide, transpose,
};
pub use env::{GameEnv, PcgRng, RngOracle};
pub use error::{CoreError, ErrorKind, ErrorSeverity, GameError};
pub use session::GameSession;
pub use state::{
    Cell, GameState, Grid, MotionPlan, Position, Tile, TileId, TileIdAllocator, TileMotion,
};
