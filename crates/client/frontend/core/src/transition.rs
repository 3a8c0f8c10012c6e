//! Frame-by-frame presentation of one move.
//!
//! A [`Transition`] walks the [`MotionPlan`] of a [`MoveResult`] over a fixed
//! number of frames. Every tile that changes cell is one pending completion
//! on a [`CompletionBarrier`]; the final board is handed back once the last
//! of them lands, after which the frontend evaluates the outcome and accepts
//! input again.

use game_core::{Direction, Grid, MotionPlan, MoveResult, TileId, TileMotion};

use crate::barrier::CompletionBarrier;
use crate::layout;

/// A tile as drawn on an intermediate frame, in fractional cell units.
#[derive(Clone, Debug, PartialEq)]
pub struct AnimatedTile {
    pub id: TileId,
    pub value: u32,
    pub row: f32,
    pub col: f32,
    /// Disappears into its survivor when the transition settles.
    pub absorbed: bool,
}

pub struct Transition {
    direction: Direction,
    plan: MotionPlan,
    frames: u32,
    frame: u32,
    barrier: CompletionBarrier<Grid>,
}

impl Transition {
    /// Arms a transition for `result`. With `frames == 0` the barrier is
    /// released immediately and the first [`Transition::advance`] settles.
    pub fn new(result: &MoveResult, frames: u32) -> Self {
        let plan = result.motion_plan();
        let pending = if frames == 0 { 0 } else { plan.moving_count() };
        let final_grid = result.new_grid.clone();
        let barrier = CompletionBarrier::new(pending, move || final_grid);

        tracing::debug!(
            direction = %result.direction,
            moving = plan.moving_count(),
            frames,
            "transition armed"
        );

        Self {
            direction: result.direction,
            plan,
            frames,
            frame: 0,
            barrier,
        }
    }

    /// Steps one frame. Returns the final board on the frame the barrier
    /// is released, `None` before and after.
    pub fn advance(&mut self) -> Option<Grid> {
        if self.frame < self.frames {
            self.frame += 1;
            if self.frame == self.frames {
                let landed = self.plan.moving_count();
                for _ in 0..landed {
                    self.barrier.signal();
                }
            }
        }
        self.barrier.take_output()
    }

    /// Fraction of the slide completed, `0.0..=1.0`.
    pub fn progress(&self) -> f32 {
        if self.frames == 0 {
            return 1.0;
        }
        self.frame as f32 / self.frames as f32
    }

    pub fn is_settled(&self) -> bool {
        self.barrier.is_complete()
    }

    pub fn pending(&self) -> usize {
        self.barrier.pending()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn plan(&self) -> &MotionPlan {
        &self.plan
    }

    /// Tiles at their interpolated positions for the current frame.
    ///
    /// Spawned tiles are not part of the slide; they appear with the final
    /// board. Merged survivors show their pre-merge value while in flight.
    pub fn tiles(&self) -> Vec<AnimatedTile> {
        let t = self.progress();
        self.plan
            .iter()
            .filter_map(|motion| {
                let (value, absorbed) = match *motion {
                    TileMotion::Slide { value, merged, .. } => {
                        (if merged { value / 2 } else { value }, false)
                    }
                    TileMotion::Absorbed { value, .. } => (value, true),
                    TileMotion::Spawned { .. } => return None,
                };
                let (from, to) = (motion.start(), motion.end());
                Some(AnimatedTile {
                    id: motion.id(),
                    value,
                    row: layout::interpolate(from.row, to.row, t),
                    col: layout::interpolate(from.col, to.col, t),
                    absorbed,
                })
            })
            .collect()
    }
}

impl std::fmt::Debug for Transition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transition")
            .field("direction", &self.direction)
            .field("frame", &self.frame)
            .field("frames", &self.frames)
            .field("barrier", &self.barrier)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{GameConfig, GameSession, GameState, PcgRng, TileIdAllocator};

    fn session_with(values: &[[u32; 4]; 4]) -> GameSession {
        let mut ids = TileIdAllocator::new();
        let grid = Grid::from_values(values, &mut ids).unwrap();
        let state = GameState::with_grid(3, grid).unwrap();
        GameSession::from_state(GameConfig::default(), state, PcgRng).unwrap()
    }

    #[test]
    fn settles_on_last_frame() {
        let mut session = session_with(&[[0, 0, 2, 2], [0; 4], [0; 4], [0; 4]]);
        let result = session.apply_move(Direction::Left).unwrap();
        let mut transition = Transition::new(&result, 3);
        assert_eq!(transition.pending(), 2);

        assert!(transition.advance().is_none());
        assert!(transition.advance().is_none());
        assert!(!transition.is_settled());

        let settled = transition.advance().unwrap();
        assert_eq!(settled, result.new_grid);
        assert!(transition.is_settled());
        assert!(transition.advance().is_none());
    }

    #[test]
    fn zero_frames_settles_immediately() {
        let mut session = session_with(&[[0, 0, 0, 2], [0; 4], [0; 4], [0; 4]]);
        let result = session.apply_move(Direction::Left).unwrap();
        let mut transition = Transition::new(&result, 0);
        assert!(transition.is_settled());
        assert_eq!(transition.progress(), 1.0);
        assert_eq!(transition.advance(), Some(result.new_grid.clone()));
    }

    #[test]
    fn tiles_interpolate_toward_destination() {
        let mut session = session_with(&[[0, 0, 2, 2], [0; 4], [0; 4], [0; 4]]);
        let result = session.apply_move(Direction::Left).unwrap();
        let mut transition = Transition::new(&result, 2);

        transition.advance();
        let midway = transition.tiles();
        assert_eq!(midway.len(), 2, "spawned tile is hidden while sliding");

        let survivor = midway.iter().find(|t| t.id == TileId(1)).unwrap();
        assert_eq!(survivor.col, 1.0);
        assert_eq!(survivor.value, 2);
        assert!(!survivor.absorbed);

        let absorbed = midway.iter().find(|t| t.id == TileId(2)).unwrap();
        assert_eq!(absorbed.col, 1.5);
        assert!(absorbed.absorbed);
    }
}
