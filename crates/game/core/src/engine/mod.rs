//! Move orchestration.
//!
//! The [`GameEngine`] is the only mutator of [`GameState`]. A move runs the
//! full pipeline synchronously:
//! normalize orientation → collapse every row → restore orientation → spawn
//!
//! The pure half of the pipeline is exposed as [`slide`] so that callers
//! (hints, tests, solvers) can ask what a direction would do without
//! touching the session.

pub mod collapse;
pub mod orientation;
pub mod outcome;
pub mod spawn;

pub use collapse::{Collapse, Merge, collapse_left};
pub use orientation::{Orientation, reverse_rows, transpose};
pub use outcome::{Outcome, evaluate, has_moves};
pub use spawn::{SpawnedTile, spawn_tile};

use crate::action::Direction;
use crate::env::GameEnv;
use crate::error::CoreError;
use crate::state::{GameState, Grid, MotionPlan};

/// Board produced by shifting a grid, before any spawn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Slide {
    pub grid: Grid,
    pub changed: bool,
    pub merges: Vec<Merge>,
}

/// Shifts `grid` toward `direction` without spawning.
///
/// The input is validated first: a malformed grid fails with an
/// invalid-state error instead of being transformed.
pub fn slide(grid: &Grid, direction: Direction) -> Result<Slide, CoreError> {
    grid.validate()?;

    let orientation = Orientation::for_direction(direction);
    let normalized = orientation.normalize(grid);

    let mut changed = false;
    let mut merges = Vec::new();
    let mut rows = Vec::with_capacity(normalized.size());
    for row in normalized.rows() {
        let collapse = collapse_left(row)?;
        changed |= collapse.changed;
        merges.extend(collapse.merges);
        rows.push(collapse.row);
    }

    let restored = orientation.restore(Grid::from_rows_unchecked(rows));
    Ok(Slide {
        grid: restored,
        changed,
        merges,
    })
}

/// Directions that would change `grid`, in [`Direction::ALL`] order.
pub fn legal_directions(grid: &Grid) -> Result<Vec<Direction>, CoreError> {
    let mut legal = Vec::with_capacity(Direction::ALL.len());
    for direction in Direction::ALL {
        if slide(grid, direction)?.changed {
            legal.push(direction);
        }
    }
    Ok(legal)
}

/// Everything a frontend needs to present one move.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveResult {
    pub direction: Direction,
    /// Deep copy of the board before the move.
    pub old_grid: Grid,
    /// Board after the move, including the spawned tile.
    pub new_grid: Grid,
    pub changed: bool,
    pub merges: Vec<Merge>,
    pub spawned: Option<SpawnedTile>,
}

impl MoveResult {
    /// Per-tile motion from `old_grid` to `new_grid`.
    pub fn motion_plan(&self) -> MotionPlan {
        MotionPlan::between(&self.old_grid, &self.new_grid, &self.merges)
    }
}

/// Game engine that executes moves against a borrowed state.
pub struct GameEngine<'a> {
    state: &'a mut GameState,
}

impl<'a> GameEngine<'a> {
    pub fn new(state: &'a mut GameState) -> Self {
        Self { state }
    }

    /// Spawns the configured number of opening tiles on an empty board.
    pub fn start(&mut self, env: &GameEnv<'_>) -> Result<Vec<SpawnedTile>, CoreError> {
        self.check_shape(env)?;
        let mut spawned = Vec::with_capacity(env.config().initial_tiles);
        for _ in 0..env.config().initial_tiles {
            if let Some(tile) = spawn_tile(self.state, env)? {
                spawned.push(tile);
            }
        }
        tracing::debug!(tiles = spawned.len(), "opening tiles spawned");
        Ok(spawned)
    }

    /// Executes one move.
    ///
    /// When nothing slides or merges the state is left untouched: same
    /// tiles, same ids, no id allocated and no spawn roll consumed.
    pub fn execute(
        &mut self,
        env: &GameEnv<'_>,
        direction: Direction,
    ) -> Result<MoveResult, CoreError> {
        self.check_shape(env)?;
        tracing::debug!(%direction, "executing move");

        let old_grid = self.state.grid.clone();
        let Slide {
            grid,
            changed,
            merges,
        } = slide(&old_grid, direction)?;

        if !changed {
            tracing::debug!(%direction, "no tiles moved, nothing spawned");
            return Ok(MoveResult {
                direction,
                new_grid: old_grid.clone(),
                old_grid,
                changed: false,
                merges,
                spawned: None,
            });
        }

        self.state.grid = grid;
        let spawned = spawn_tile(self.state, env)?;
        self.state.moves += 1;

        tracing::debug!(
            %direction,
            merges = merges.len(),
            moves = self.state.moves,
            "board changed"
        );

        Ok(MoveResult {
            direction,
            old_grid,
            new_grid: self.state.grid.clone(),
            changed: true,
            merges,
            spawned,
        })
    }

    fn check_shape(&self, env: &GameEnv<'_>) -> Result<(), CoreError> {
        let expected = env.config().board_size;
        let actual = self.state.grid.size();
        if actual != expected {
            return Err(CoreError::SizeMismatch { expected, actual });
        }
        self.state.grid.validate()
    }
}
