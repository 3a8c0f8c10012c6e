use std::collections::HashSet;
use std::fmt;

use super::tile::{Tile, TileId, TileIdAllocator};
use crate::error::CoreError;

/// A single board cell: either empty or holding exactly one tile.
pub type Cell = Option<Tile>;

/// Cell coordinates on the board, row-major.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Square matrix of optional tiles.
///
/// Grids produced by the core are always square and every tile on them has
/// a distinct id. Grids assembled by callers go through [`Grid::from_rows`]
/// or [`Grid::validate`] before the engine touches them.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    rows: Vec<Vec<Cell>>,
}

impl Grid {
    /// Returns an `n`×`n` grid of empty cells.
    pub fn empty(n: usize) -> Self {
        Self {
            rows: vec![vec![None; n]; n],
        }
    }

    /// Builds a grid from raw rows, rejecting malformed shapes.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, CoreError> {
        let grid = Self { rows };
        grid.validate()?;
        Ok(grid)
    }

    /// Builds a grid from plain values (`0` is an empty cell), allocating
    /// ids for the tiles in row-major order.
    pub fn from_values<R>(values: &[R], ids: &mut TileIdAllocator) -> Result<Self, CoreError>
    where
        R: AsRef<[u32]>,
    {
        let mut rows = Vec::with_capacity(values.len());
        for row in values {
            let mut cells = Vec::with_capacity(row.as_ref().len());
            for &value in row.as_ref() {
                let cell = match value {
                    0 => None,
                    value => Some(Tile::new(ids.allocate()?, value)),
                };
                cells.push(cell);
            }
            rows.push(cells);
        }
        Self::from_rows(rows)
    }

    /// Wraps rows the engine produced itself; shape is preserved by construction.
    pub(crate) fn from_rows_unchecked(rows: Vec<Vec<Cell>>) -> Self {
        Self { rows }
    }

    /// Checks the structural invariants: non-empty, square, power-of-two
    /// values, and no id present twice.
    pub fn validate(&self) -> Result<(), CoreError> {
        let size = self.rows.len();
        if size == 0 {
            return Err(CoreError::EmptyGrid);
        }

        let mut seen = HashSet::with_capacity(size * size);
        for (row, cells) in self.rows.iter().enumerate() {
            if cells.len() != size {
                return Err(CoreError::NotSquare {
                    row,
                    len: cells.len(),
                    expected: size,
                });
            }
            for (col, tile) in cells.iter().enumerate() {
                let Some(tile) = tile else { continue };
                if !tile.value.is_power_of_two() {
                    return Err(CoreError::InvalidTileValue {
                        id: tile.id,
                        row,
                        col,
                        value: tile.value,
                    });
                }
                if !seen.insert(tile.id) {
                    return Err(CoreError::DuplicateTileId { id: tile.id });
                }
            }
        }
        Ok(())
    }

    /// Side length of the grid.
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&[Cell]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    /// Tile at `position`, or `None` for empty or out-of-range cells.
    pub fn get(&self, position: Position) -> Option<&Tile> {
        self.rows
            .get(position.row)
            .and_then(|row| row.get(position.col))
            .and_then(Option::as_ref)
    }

    /// Places `cell` at `position`, returning what was there before.
    pub(crate) fn set(&mut self, position: Position, cell: Cell) -> Cell {
        std::mem::replace(&mut self.rows[position.row][position.col], cell)
    }

    /// All empty coordinates in row-major order.
    pub fn empty_cells(&self) -> Vec<Position> {
        self.rows
            .iter()
            .enumerate()
            .flat_map(|(row, cells)| {
                cells
                    .iter()
                    .enumerate()
                    .filter(|(_, cell)| cell.is_none())
                    .map(move |(col, _)| Position::new(row, col))
            })
            .collect()
    }

    /// Every tile with its position, row-major.
    pub fn tiles(&self) -> impl Iterator<Item = (Position, &Tile)> + '_ {
        self.rows.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter_map(move |(col, cell)| cell.as_ref().map(|t| (Position::new(row, col), t)))
        })
    }

    pub fn tile_count(&self) -> usize {
        self.tiles().count()
    }

    pub fn is_full(&self) -> bool {
        self.rows.iter().flatten().all(Option::is_some)
    }

    /// Largest tile value on the board.
    pub fn max_value(&self) -> Option<u32> {
        self.tiles().map(|(_, tile)| tile.value).max()
    }

    /// Sum of every tile value.
    pub fn value_sum(&self) -> u64 {
        self.tiles().map(|(_, tile)| u64::from(tile.value)).sum()
    }

    /// Highest tile id on the board.
    pub fn max_id(&self) -> Option<TileId> {
        self.tiles().map(|(_, tile)| tile.id).max()
    }

    /// Current position of the tile with `id`.
    pub fn position_of(&self, id: TileId) -> Option<Position> {
        self.tiles()
            .find(|(_, tile)| tile.id == id)
            .map(|(position, _)| position)
    }

    /// Plain value matrix with `0` for empty cells.
    pub fn values(&self) -> Vec<Vec<u32>> {
        self.rows
            .iter()
            .map(|row| row.iter().map(|cell| cell.map_or(0, |t| t.value)).collect())
            .collect()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            for cell in row {
                match cell {
                    Some(tile) => write!(f, "{:6}", tile.value)?,
                    None => write!(f, "     .")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
