//! View-model snapshots derived from a [`game_core::GameSession`].
use game_core::{Direction, GameSession, Grid, Outcome, Position, RngOracle, TileId};

/// One occupied cell as presented to the player.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileView {
    pub id: TileId,
    pub value: u32,
    pub label: String,
}

impl TileView {
    pub fn new(id: TileId, value: u32) -> Self {
        Self {
            id,
            value,
            label: value.to_string(),
        }
    }
}

/// Presentation-ready snapshot of the board and session counters.
///
/// Rebuilt wholesale after every settled move; boards are small enough that
/// incremental updates would buy nothing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewModel {
    pub size: usize,
    /// Row-major cells, `None` for empty.
    pub cells: Vec<Vec<Option<TileView>>>,
    pub outcome: Outcome,
    pub moves: u64,
    pub best_tile: u32,
    /// Directions that would change the board.
    pub legal: Vec<Direction>,
}

impl ViewModel {
    pub fn from_session<R: RngOracle>(session: &GameSession<R>) -> Self {
        let mut view = Self::from_grid(session.grid(), session.query_outcome(), session.moves());
        view.legal = session.legal_directions().unwrap_or_else(|err| {
            tracing::warn!(%err, "cannot compute legal directions");
            Vec::new()
        });
        view
    }

    /// Snapshot of a bare grid. `legal` is left empty.
    pub fn from_grid(grid: &Grid, outcome: Outcome, moves: u64) -> Self {
        let cells = grid
            .rows()
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| cell.map(|tile| TileView::new(tile.id, tile.value)))
                    .collect()
            })
            .collect();

        Self {
            size: grid.size(),
            cells,
            outcome,
            moves,
            best_tile: grid.max_value().unwrap_or(0),
            legal: Vec::new(),
        }
    }

    pub fn tile(&self, position: Position) -> Option<&TileView> {
        self.cells.get(position.row)?.get(position.col)?.as_ref()
    }

    pub fn tiles(&self) -> impl Iterator<Item = (Position, &TileView)> {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter_map(move |(col, cell)| cell.as_ref().map(|t| (Position::new(row, col), t)))
        })
    }

    pub fn tile_count(&self) -> usize {
        self.tiles().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{GameConfig, TileIdAllocator};

    #[test]
    fn mirrors_grid_layout() {
        let mut ids = TileIdAllocator::new();
        let grid = Grid::from_values(&[[2, 0], [0, 1024]], &mut ids).unwrap();
        let view = ViewModel::from_grid(&grid, Outcome::Won, 7);

        assert_eq!(view.size, 2);
        assert_eq!(view.best_tile, 1024);
        assert_eq!(view.moves, 7);
        assert_eq!(view.outcome, Outcome::Won);
        assert!(view.tile(Position::new(0, 1)).is_none());

        let corner = view.tile(Position::new(1, 1)).unwrap();
        assert_eq!(corner.label, "1024");
        assert_eq!(corner.id, TileId(2));
        assert_eq!(view.tile_count(), 2);
    }

    #[test]
    fn session_snapshot_includes_legal_moves() {
        let session = GameSession::new(GameConfig::default(), 8).unwrap();
        let view = ViewModel::from_session(&session);
        assert_eq!(view.tile_count(), 2);
        assert_eq!(view.outcome, Outcome::Continue);
        assert!(!view.legal.is_empty());
    }

    #[test]
    fn out_of_range_lookup_is_none() {
        let grid = Grid::empty(4);
        let view = ViewModel::from_grid(&grid, Outcome::Continue, 0);
        assert!(view.tile(Position::new(9, 0)).is_none());
        assert_eq!(view.best_tile, 0);
    }
}
