//! Per-tile motion between two snapshots of the board.
//!
//! Motion is derived from tile ids alone. Matching tiles by value would be
//! ambiguous as soon as two tiles share a value, so it is never attempted.

use std::collections::HashMap;

use super::{Grid, Position, TileId};
use crate::engine::Merge;

/// How one tile got from the old board to the new one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TileMotion {
    /// Tile present on both boards. `merged` is set when it absorbed a neighbour.
    Slide {
        id: TileId,
        from: Position,
        to: Position,
        value: u32,
        merged: bool,
    },
    /// Tile consumed by a merge: it travels to its survivor's cell and disappears.
    Absorbed {
        id: TileId,
        from: Position,
        to: Position,
        value: u32,
        into: TileId,
    },
    /// Tile that did not exist before the move.
    Spawned { id: TileId, at: Position, value: u32 },
}

impl TileMotion {
    pub const fn id(&self) -> TileId {
        match *self {
            TileMotion::Slide { id, .. }
            | TileMotion::Absorbed { id, .. }
            | TileMotion::Spawned { id, .. } => id,
        }
    }

    pub const fn start(&self) -> Position {
        match *self {
            TileMotion::Slide { from, .. } | TileMotion::Absorbed { from, .. } => from,
            TileMotion::Spawned { at, .. } => at,
        }
    }

    pub const fn end(&self) -> Position {
        match *self {
            TileMotion::Slide { to, .. } | TileMotion::Absorbed { to, .. } => to,
            TileMotion::Spawned { at, .. } => at,
        }
    }

    /// Value displayed while the tile is in flight.
    pub const fn value(&self) -> u32 {
        match *self {
            TileMotion::Slide { value, .. }
            | TileMotion::Absorbed { value, .. }
            | TileMotion::Spawned { value, .. } => value,
        }
    }

    /// Whether the tile changes cell during the move.
    pub fn is_moving(&self) -> bool {
        self.start() != self.end()
    }
}

/// Every tile motion of one move, in a stable order: tiles of the new board
/// row-major, then absorbed tiles in merge order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MotionPlan {
    motions: Vec<TileMotion>,
}

impl MotionPlan {
    /// Derives motion by matching ids between `old` and `new`.
    ///
    /// `merges` lets consumed tiles be animated into their survivor; tiles
    /// that vanished without a merge record are dropped from the plan.
    pub fn between(old: &Grid, new: &Grid, merges: &[Merge]) -> Self {
        let previous: HashMap<TileId, (Position, u32)> = old
            .tiles()
            .map(|(position, tile)| (tile.id, (position, tile.value)))
            .collect();

        let mut current: HashMap<TileId, Position> = HashMap::new();
        let mut motions = Vec::with_capacity(previous.len() + 1);
        for (to, tile) in new.tiles() {
            current.insert(tile.id, to);
            let motion = match previous.get(&tile.id) {
                Some(&(from, old_value)) => TileMotion::Slide {
                    id: tile.id,
                    from,
                    to,
                    value: tile.value,
                    merged: tile.value != old_value,
                },
                None => TileMotion::Spawned {
                    id: tile.id,
                    at: to,
                    value: tile.value,
                },
            };
            motions.push(motion);
        }

        for merge in merges {
            let (Some(&(from, value)), Some(&to)) =
                (previous.get(&merge.consumed), current.get(&merge.survivor))
            else {
                tracing::warn!(
                    consumed = %merge.consumed,
                    survivor = %merge.survivor,
                    "merge record does not match the boards"
                );
                continue;
            };
            motions.push(TileMotion::Absorbed {
                id: merge.consumed,
                from,
                to,
                value,
                into: merge.survivor,
            });
        }

        Self { motions }
    }

    pub fn motions(&self) -> &[TileMotion] {
        &self.motions
    }

    pub fn iter(&self) -> impl Iterator<Item = &TileMotion> {
        self.motions.iter()
    }

    pub fn get(&self, id: TileId) -> Option<&TileMotion> {
        self.motions.iter().find(|motion| motion.id() == id)
    }

    /// Number of tiles that change cell.
    pub fn moving_count(&self) -> usize {
        self.motions.iter().filter(|motion| motion.is_moving()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.motions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Direction;
    use crate::engine::slide;
    use crate::state::{Tile, TileIdAllocator};

    #[test]
    fn slide_and_merge_are_tracked_by_id() {
        let mut ids = TileIdAllocator::new();
        // Two 2s with distinct ids; value matching could not tell them apart.
        let old = Grid::from_values(&[[0, 2, 0, 2], [0; 4], [0; 4], [0; 4]], &mut ids).unwrap();
        let out = slide(&old, Direction::Left).unwrap();
        let plan = MotionPlan::between(&old, &out.grid, &out.merges);

        assert_eq!(
            plan.get(TileId(1)),
            Some(&TileMotion::Slide {
                id: TileId(1),
                from: Position::new(0, 1),
                to: Position::new(0, 0),
                value: 4,
                merged: true,
            })
        );
        assert_eq!(
            plan.get(TileId(2)),
            Some(&TileMotion::Absorbed {
                id: TileId(2),
                from: Position::new(0, 3),
                to: Position::new(0, 0),
                value: 2,
                into: TileId(1),
            })
        );
        assert_eq!(plan.moving_count(), 2);
    }

    #[test]
    fn new_ids_are_spawns() {
        let mut ids = TileIdAllocator::new();
        let old = Grid::from_values(&[[2, 0], [0, 0]], &mut ids).unwrap();
        let mut new = old.clone();
        new.set(Position::new(1, 1), Some(Tile::new(TileId(9), 4)));

        let plan = MotionPlan::between(&old, &new, &[]);
        assert_eq!(plan.motions().len(), 2);
        assert!(!plan.get(TileId(1)).unwrap().is_moving());
        assert_eq!(
            plan.get(TileId(9)),
            Some(&TileMotion::Spawned {
                id: TileId(9),
                at: Position::new(1, 1),
                value: 4
            })
        );
        assert_eq!(plan.moving_count(), 0);
    }

    #[test]
    fn stale_merge_records_are_skipped() {
        let grid = Grid::empty(2);
        let bogus = Merge {
            survivor: TileId(1),
            consumed: TileId(2),
            value: 4,
        };
        assert!(MotionPlan::between(&grid, &grid, &[bogus]).is_empty());
    }
}
