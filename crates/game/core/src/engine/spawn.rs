//! Random tile placement after a successful move.

use crate::config::GameConfig;
use crate::env::{GameEnv, SPAWN_CELL_ROLL, SPAWN_VALUE_ROLL, compute_seed};
use crate::error::CoreError;
use crate::state::{GameState, Position, Tile};

/// A tile placed by the spawner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpawnedTile {
    pub position: Position,
    pub tile: Tile,
}

/// Places one new tile on a uniformly chosen empty cell.
///
/// The value is 4 with `four_spawn_percent` probability, 2 otherwise.
/// A full board is a no-op: no id is allocated and the nonce is untouched.
pub fn spawn_tile(
    state: &mut GameState,
    env: &GameEnv<'_>,
) -> Result<Option<SpawnedTile>, CoreError> {
    let empty = state.grid.empty_cells();
    if empty.is_empty() {
        tracing::debug!("no empty cells, nothing to spawn");
        return Ok(None);
    }

    let rng = env.rng();
    let nonce = state.spawn_nonce;
    let cell_seed = compute_seed(state.game_seed, nonce, SPAWN_CELL_ROLL);
    let value_seed = compute_seed(state.game_seed, nonce, SPAWN_VALUE_ROLL);

    let position = empty[rng.index(cell_seed, empty.len())];
    let value = spawn_value(rng.roll_d100(value_seed), env.config());

    let tile = Tile::new(state.ids.allocate()?, value);
    state.grid.set(position, Some(tile));
    state.spawn_nonce += 1;

    tracing::debug!(id = %tile.id, value, %position, empty = empty.len(), "spawned tile");
    Ok(Some(SpawnedTile { position, tile }))
}

/// Maps a d100 roll onto a spawn value.
fn spawn_value(roll: u32, config: &GameConfig) -> u32 {
    if roll > 100 - config.four_spawn_percent {
        GameConfig::LARGE_SPAWN_VALUE
    } else {
        GameConfig::SMALL_SPAWN_VALUE
    }
}
