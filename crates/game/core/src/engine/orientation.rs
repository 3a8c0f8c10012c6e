//! Direction-agnostic reshaping of the board.
//!
//! Every direction reduces to "collapse each row toward its start" after
//! zero or more of two self-inverse transforms:
//!
//! | direction | normalize                    | restore                      |
//! |-----------|------------------------------|------------------------------|
//! | left      | identity                     | identity                     |
//! | right     | reverse rows                 | reverse rows                 |
//! | up        | transpose                    | transpose                    |
//! | down      | transpose, then reverse rows | reverse rows, then transpose |

use crate::action::Direction;
use crate::state::Grid;

/// Swaps rows and columns: the cell at `[r][c]` moves to `[c][r]`.
pub fn transpose(grid: &Grid) -> Grid {
    let rows = grid.rows();
    let width = rows.first().map_or(0, Vec::len);
    let transposed = (0..width)
        .map(|col| rows.iter().map(|row| row[col]).collect())
        .collect();
    Grid::from_rows_unchecked(transposed)
}

/// Reverses the order of cells within each row.
pub fn reverse_rows(grid: &Grid) -> Grid {
    let reversed = grid
        .rows()
        .iter()
        .map(|row| row.iter().rev().copied().collect())
        .collect();
    Grid::from_rows_unchecked(reversed)
}

/// The transforms that map a direction onto a left collapse.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Orientation {
    transposed: bool,
    reversed: bool,
}

impl Orientation {
    pub const fn for_direction(direction: Direction) -> Self {
        Self {
            transposed: direction.is_vertical(),
            reversed: direction.is_reversed(),
        }
    }

    pub const fn is_identity(&self) -> bool {
        !self.transposed && !self.reversed
    }

    /// Reshapes `grid` so that `direction` becomes a left collapse.
    pub fn normalize(&self, grid: &Grid) -> Grid {
        let mut out = grid.clone();
        if self.transposed {
            out = transpose(&out);
            tracing::trace!("transposed for vertical move");
        }
        if self.reversed {
            out = reverse_rows(&out);
            tracing::trace!("reversed rows for right/down move");
        }
        out
    }

    /// Undoes [`normalize`](Self::normalize), applying the transforms in reverse order.
    pub fn restore(&self, grid: Grid) -> Grid {
        let mut out = grid;
        if self.reversed {
            out = reverse_rows(&out);
            tracing::trace!("re-reversed rows to restore orientation");
        }
        if self.transposed {
            out = transpose(&out);
            tracing::trace!("re-transposed to restore orientation");
        }
        out
    }
}
