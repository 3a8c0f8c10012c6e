use std::fmt;

use crate::error::CoreError;

/// Unique identifier of a tile within one game session.
///
/// Ids persist across moves so that frontends can follow a tile from its
/// old cell to its new one. An id disappears only when its tile is consumed
/// by a merge; it is never handed out again.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileId(pub u64);

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A numbered game piece.
///
/// Tiles are plain values: cloning a grid copies every tile, so a snapshot
/// taken before a move is never affected by the merge that follows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tile {
    pub id: TileId,
    pub value: u32,
}

impl Tile {
    pub const fn new(id: TileId, value: u32) -> Self {
        Self { id, value }
    }

    /// Absorbs `other` into this tile. The surviving tile keeps its id.
    ///
    /// Fails without touching `self` when the sum does not fit in a `u32`.
    #[inline]
    pub(crate) fn absorb(&mut self, other: Tile) -> Result<(), CoreError> {
        self.value = self
            .value
            .checked_add(other.value)
            .ok_or(CoreError::TileValueOverflow {
                survivor: self.id,
                value: other.value,
            })?;
        Ok(())
    }
}

/// Sequential tile id allocator (monotonically increasing, starts at 1).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileIdAllocator {
    next: u64,
}

impl TileIdAllocator {
    pub const FIRST: TileId = TileId(1);

    pub const fn new() -> Self {
        Self {
            next: Self::FIRST.0,
        }
    }

    /// Allocates a new unique [`TileId`].
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::TileIdOverflow`] once every id has been issued.
    pub fn allocate(&mut self) -> Result<TileId, CoreError> {
        let id = TileId(self.next);
        self.next = self
            .next
            .checked_add(1)
            .ok_or(CoreError::TileIdOverflow { current: self.next })?;
        Ok(id)
    }

    /// The id the next call to [`allocate`](Self::allocate) will return.
    pub const fn peek(&self) -> TileId {
        TileId(self.next)
    }

    /// Number of ids handed out so far.
    pub const fn issued(&self) -> u64 {
        self.next - Self::FIRST.0
    }

    /// Moves the counter past `id` so that it is never issued again.
    ///
    /// Used when adopting grids built outside the allocator.
    pub(crate) fn reserve_through(&mut self, id: TileId) {
        if id.0 >= self.next {
            self.next = id.0.saturating_add(1);
        }
    }
}

impl Default for TileIdAllocator {
    fn default() -> Self {
        Self::new()
    }
}
