//! Row collapse: compaction plus single-pass merging toward index 0.
//!
//! Algorithm:
//! 1. Compact: drop empty cells, keeping the order of the remaining tiles
//! 2. Merge: scan left to right once; an equal adjacent pair merges into the
//!    left tile (which keeps its id) and the scan skips past both, so a tile
//!    produced by a merge never merges again in the same move
//! 3. Re-compact and pad with empty cells back to the original length
//! 4. Compare the result with the input cell by cell (id and value)

use crate::error::CoreError;
use crate::state::{Cell, Tile, TileId};

/// Record of one merge: `consumed` was absorbed into `survivor`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Merge {
    pub survivor: TileId,
    pub consumed: TileId,
    /// Value of the surviving tile after the merge.
    pub value: u32,
}

/// Result of collapsing one row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Collapse {
    pub row: Vec<Cell>,
    pub changed: bool,
    pub merges: Vec<Merge>,
}

/// Collapses `row` toward its start.
///
/// Fails with [`CoreError::TileValueOverflow`] when a merge would exceed `u32`.
pub fn collapse_left(row: &[Cell]) -> Result<Collapse, CoreError> {
    let len = row.len();
    let compacted: Vec<Tile> = row.iter().flatten().copied().collect();

    let mut changed = compacted.len() != len
        && row
            .iter()
            .position(Option::is_none)
            .is_some_and(|first_gap| first_gap < compacted.len());

    let mut merged: Vec<Cell> = Vec::with_capacity(len);
    let mut merges = Vec::new();
    let mut i = 0;
    while i < compacted.len() {
        let mut current = compacted[i];
        if let Some(&next) = compacted.get(i + 1) {
            if current.value == next.value {
                current.absorb(next)?;
                merges.push(Merge {
                    survivor: current.id,
                    consumed: next.id,
                    value: current.value,
                });
                changed = true;
                tracing::trace!(
                    survivor = %current.id,
                    consumed = %next.id,
                    value = current.value,
                    "merged tiles"
                );
                // Skip the consumed tile; the merged one is done for this move.
                i += 2;
                merged.push(Some(current));
                continue;
            }
        }
        merged.push(Some(current));
        i += 1;
    }
    merged.resize(len, None);

    if !changed && merged.as_slice() != row {
        changed = true;
    }

    Ok(Collapse {
        row: merged,
        changed,
        merges,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Builds a row of fresh tiles with ids 1.. for non-zero values.
    fn row(values: &[u32]) -> Vec<Cell> {
        values
            .iter()
            .enumerate()
            .map(|(i, &value)| (value != 0).then(|| Tile::new(TileId(i as u64 + 1), value)))
            .collect()
    }

    fn values(cells: &[Cell]) -> Vec<u32> {
        cells.iter().map(|cell| cell.map_or(0, |t| t.value)).collect()
    }

    fn sum(cells: &[Cell]) -> u64 {
        cells.iter().flatten().map(|t| u64::from(t.value)).sum()
    }

    #[test]
    fn empty_row_is_unchanged() {
        let out = collapse_left(&row(&[0, 0, 0, 0])).unwrap();
        assert_eq!(values(&out.row), vec![0, 0, 0, 0]);
        assert!(!out.changed);
        assert!(out.merges.is_empty());
    }

    #[test]
    fn compacted_merge_free_row_is_unchanged() {
        let input = row(&[2, 4, 2, 0]);
        let out = collapse_left(&input).unwrap();
        assert_eq!(out.row, input);
        assert!(!out.changed);
    }

    #[test]
    fn gaps_merge_across() {
        let out = collapse_left(&row(&[0, 2, 0, 2])).unwrap();
        assert_eq!(values(&out.row), vec![4, 0, 0, 0]);
        assert!(out.changed);
        // Leftmost tile survives.
        assert_eq!(out.row[0].unwrap().id, TileId(2));
        assert_eq!(
            out.merges,
            vec![Merge {
                survivor: TileId(2),
                consumed: TileId(4),
                value: 4
            }]
        );
    }

    #[test]
    fn no_chain_merge() {
        let out = collapse_left(&row(&[2, 2, 2, 2])).unwrap();
        assert_eq!(values(&out.row), vec![4, 4, 0, 0]);
        assert_eq!(out.merges.len(), 2);

        let out = collapse_left(&row(&[4, 2, 2, 0])).unwrap();
        assert_eq!(values(&out.row), vec![4, 4, 0, 0]);
        assert_eq!(out.merges.len(), 1);
    }

    #[test]
    fn three_equal_merges_only_first_pair() {
        let out = collapse_left(&row(&[2, 2, 2, 0])).unwrap();
        assert_eq!(values(&out.row), vec![4, 2, 0, 0]);
        assert_eq!(out.row[0].unwrap().id, TileId(1));
        assert_eq!(out.row[1].unwrap().id, TileId(3));
    }

    #[test]
    fn slide_without_merge_is_a_change() {
        let out = collapse_left(&row(&[0, 0, 0, 8])).unwrap();
        assert_eq!(values(&out.row), vec![8, 0, 0, 0]);
        assert!(out.changed);
        assert!(out.merges.is_empty());
    }

    #[test]
    fn trailing_gap_alone_is_not_a_change() {
        let out = collapse_left(&row(&[8, 16, 0, 0])).unwrap();
        assert!(!out.changed);
    }

    #[test]
    fn merge_conserves_value() {
        let cases: [&[u32]; 6] = [
            &[2, 2, 4, 4],
            &[0, 2, 0, 2],
            &[2, 2, 2, 2],
            &[8, 0, 8, 16],
            &[4, 2, 2, 0],
            &[1024, 1024, 0, 2],
        ];
        for case in cases {
            let input = row(case);
            let out = collapse_left(&input).unwrap();
            assert_eq!(sum(&input), sum(&out.row), "case {case:?}");
            assert_eq!(out.row.len(), input.len());
        }
    }

    #[test]
    fn overflowing_merge_is_an_error() {
        let err = collapse_left(&row(&[1 << 31, 1 << 31, 0, 0])).unwrap_err();
        assert!(matches!(
            err,
            CoreError::TileValueOverflow {
                survivor: TileId(1),
                ..
            }
        ));

        // The largest value that still fits merges normally.
        let out = collapse_left(&row(&[1 << 30, 1 << 30])).unwrap();
        assert_eq!(values(&out.row), vec![1 << 31, 0]);
    }

    #[test]
    fn works_for_other_lengths() {
        let out = collapse_left(&row(&[2, 2, 4, 0, 4, 8])).unwrap();
        assert_eq!(values(&out.row), vec![4, 8, 8, 0, 0, 0]);
        assert!(out.changed);
    }
}
