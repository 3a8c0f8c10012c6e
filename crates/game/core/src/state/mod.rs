//! Authoritative game state representation.
//!
//! This module owns the data structures that describe the board, its tiles,
//! the id allocator and the spawn bookkeeping. Frontends clone or query this
//! state but mutate it exclusively through the engine.
pub mod grid;
pub mod motion;
pub mod tile;

pub use grid::{Cell, Grid, Position};
pub use motion::{MotionPlan, TileMotion};
pub use tile::{Tile, TileId, TileIdAllocator};

use crate::error::CoreError;

/// Canonical snapshot of one game session's mutable data.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    /// RNG seed for deterministic spawns.
    ///
    /// Set once when the session starts and never modified.
    /// Combined with `spawn_nonce` to derive a unique seed for each spawn.
    pub game_seed: u64,

    /// Number of spawn attempts made so far (one per spawn, never per no-op).
    pub spawn_nonce: u64,

    /// Number of moves that changed the board.
    pub moves: u64,

    /// Tile id allocator scoped to this session.
    pub ids: TileIdAllocator,

    /// The board.
    pub grid: Grid,
}

impl GameState {
    /// Creates an empty board of side `size` with a fresh allocator.
    pub fn new(game_seed: u64, size: usize) -> Self {
        Self {
            game_seed,
            spawn_nonce: 0,
            moves: 0,
            ids: TileIdAllocator::new(),
            grid: Grid::empty(size),
        }
    }

    /// Adopts a caller-built grid.
    ///
    /// The grid is validated and the allocator is advanced past every id it
    /// already contains, so adopted tiles can never collide with new ones.
    pub fn with_grid(game_seed: u64, grid: Grid) -> Result<Self, CoreError> {
        grid.validate()?;
        let mut ids = TileIdAllocator::new();
        if let Some(max) = grid.max_id() {
            ids.reserve_through(max);
        }
        Ok(Self {
            game_seed,
            spawn_nonce: 0,
            moves: 0,
            ids,
            grid,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adopted_grid_advances_allocator() {
        let mut external = TileIdAllocator::new();
        for _ in 0..10 {
            external.allocate().unwrap();
        }
        let grid = Grid::from_values(&[[2, 4], [0, 8]], &mut external).unwrap();

        let mut state = GameState::with_grid(7, grid).unwrap();
        assert_eq!(state.ids.allocate().unwrap(), TileId(14));
        assert_eq!(state.game_seed, 7);
    }

    #[test]
    fn fresh_state_is_empty() {
        let state = GameState::new(1, 4);
        assert_eq!(state.grid.size(), 4);
        assert_eq!(state.grid.tile_count(), 0);
        assert_eq!(state.ids.peek(), TileId(1));
        assert_eq!(state.spawn_nonce, 0);
    }
}
