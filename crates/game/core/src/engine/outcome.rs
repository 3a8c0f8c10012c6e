//! Terminal-state evaluation.

use crate::state::Grid;

/// Derived game outcome; never stored, always recomputed from the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Outcome {
    /// Moves remain and the win value has not been reached.
    Continue,
    /// Some tile reached the win value. Takes priority over `Lost`.
    Won,
    /// The board is full and no adjacent pair is equal.
    Lost,
}

impl Outcome {
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Outcome::Continue)
    }
}

/// Classifies `grid` against `win_value`.
pub fn evaluate(grid: &Grid, win_value: u32) -> Outcome {
    let outcome = if grid.tiles().any(|(_, tile)| tile.value >= win_value) {
        Outcome::Won
    } else if !has_moves(grid) {
        Outcome::Lost
    } else {
        Outcome::Continue
    };
    tracing::debug!(%outcome, win_value, "evaluated board");
    outcome
}

/// Whether any move could still change the board: an empty cell exists or
/// two horizontally or vertically adjacent tiles share a value.
pub fn has_moves(grid: &Grid) -> bool {
    let rows = grid.rows();
    let value_at = |r: usize, c: usize| rows[r][c].map(|tile| tile.value);

    for r in 0..rows.len() {
        for c in 0..rows[r].len() {
            let Some(value) = value_at(r, c) else {
                return true;
            };
            if c + 1 < rows[r].len() && value_at(r, c + 1) == Some(value) {
                return true;
            }
            if r + 1 < rows.len() && value_at(r + 1, c) == Some(value) {
                return true;
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::TileIdAllocator;

    fn grid(values: &[[u32; 4]; 4]) -> Grid {
        let mut ids = TileIdAllocator::new();
        Grid::from_values(values, &mut ids).unwrap()
    }

    #[test]
    fn checkerboard_is_lost() {
        let g = grid(&[[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
        assert!(!has_moves(&g));
        assert_eq!(evaluate(&g, 1024), Outcome::Lost);
        assert!(Outcome::Lost.is_terminal());
    }

    #[test]
    fn empty_cell_is_never_lost() {
        let g = grid(&[[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 0, 4], [4, 2, 4, 2]]);
        assert_eq!(evaluate(&g, 1024), Outcome::Continue);
    }

    #[test]
    fn horizontal_pair_keeps_game_alive() {
        let g = grid(&[[2, 2, 4, 8], [4, 8, 16, 32], [8, 16, 32, 64], [16, 32, 64, 128]]);
        assert_eq!(evaluate(&g, 1024), Outcome::Continue);
    }

    #[test]
    fn vertical_pair_keeps_game_alive() {
        let g = grid(&[[2, 4, 8, 16], [2, 8, 16, 32], [4, 16, 32, 64], [8, 32, 64, 128]]);
        assert_eq!(evaluate(&g, 1024), Outcome::Continue);
    }

    #[test]
    fn win_beats_loss() {
        let g = grid(&[[1024, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
        assert!(!has_moves(&g));
        assert_eq!(evaluate(&g, 1024), Outcome::Won);
    }

    #[test]
    fn values_above_threshold_also_win() {
        let g = grid(&[[2048, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]);
        assert_eq!(evaluate(&g, 1024), Outcome::Won);
        assert_eq!(evaluate(&g, 4096), Outcome::Continue);
    }

    #[test]
    fn empty_board_continues() {
        assert_eq!(evaluate(&Grid::empty(4), 1024), Outcome::Continue);
    }
}
