//! Read-only collaborators the engine consults while executing a move.
//!
//! [`GameEnv`] bundles the configuration and the randomness oracle. Neither
//! is owned by the state, so tests can swap in scripted oracles without
//! touching the board.
pub mod rng;

pub use rng::{PcgRng, RngOracle, SPAWN_CELL_ROLL, SPAWN_VALUE_ROLL, compute_seed};

use crate::config::GameConfig;

/// Borrowed view of everything a move needs besides the state itself.
#[derive(Clone, Copy)]
pub struct GameEnv<'a> {
    config: &'a GameConfig,
    rng: &'a dyn RngOracle,
}

impl<'a> GameEnv<'a> {
    pub fn new(config: &'a GameConfig, rng: &'a dyn RngOracle) -> Self {
        Self { config, rng }
    }

    pub fn config(&self) -> &'a GameConfig {
        self.config
    }

    pub fn rng(&self) -> &'a dyn RngOracle {
        self.rng
    }
}

impl core::fmt::Debug for GameEnv<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("GameEnv")
            .field("config", self.config)
            .finish_non_exhaustive()
    }
}
