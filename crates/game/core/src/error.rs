//! Common error infrastructure for game-core.
//!
//! Every failure in the core is local to a single call: there is no retry
//! policy and no partially applied move. Callers (frontends, tests) decide
//! whether to surface the error or ignore the input that caused it.
//!
//! # Design Principles
//!
//! - **Type Safety**: one error enum with a variant per failure, each carrying context
//! - **Severity Classification**: errors are categorized for the caller's handling strategy
//! - **Two kinds**: every variant is either an invalid argument or an invalid state

use crate::state::TileId;

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Validation**: invalid input that should be rejected without retry
/// - **Internal**: unexpected state inconsistencies (grids built outside the core)
/// - **Fatal**: the session cannot continue
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Invalid input, should not retry without changes.
    ///
    /// Examples: unknown direction token, zero board size
    Validation,

    /// Unexpected state inconsistency.
    ///
    /// Examples: ragged grid rows, duplicate tile ids
    Internal,

    /// Unrecoverable, the session must be restarted.
    ///
    /// Examples: tile id space exhausted
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error indicates an internal bug or corrupted session.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Broad classification of a [`CoreError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The caller passed a value outside the accepted domain.
    InvalidArgument,
    /// A grid or session handed to the core violates a structural invariant.
    InvalidState,
}

/// Common trait for all game-core errors.
///
/// Provides a uniform interface for error classification across the crate
/// and for frontends that only need to log or display a failure.
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Errors surfaced by the engine, the session and grid construction.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// Direction token that does not name one of the four directions.
    #[error("invalid direction token {token:?} (expected left, right, up or down)")]
    InvalidDirection { token: String },

    /// Configuration value outside its accepted range.
    #[error("invalid config: {field} = {value} ({reason})")]
    InvalidConfig {
        field: &'static str,
        value: u64,
        reason: &'static str,
    },

    /// Grid with no rows at all.
    #[error("grid has no rows")]
    EmptyGrid,

    /// Row whose length differs from the number of rows.
    #[error("grid is not square: row {row} has {len} cells, expected {expected}")]
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },

    /// Grid whose side length differs from the configured board size.
    #[error("grid size {actual} does not match configured board size {expected}")]
    SizeMismatch { expected: usize, actual: usize },

    /// Tile whose value is not a positive power of two.
    #[error("tile {id} at ({row}, {col}) has value {value}, expected a positive power of two")]
    InvalidTileValue {
        id: TileId,
        row: usize,
        col: usize,
        value: u32,
    },

    /// Merge whose sum does not fit in a tile value.
    #[error("merging {value} into tile {survivor} overflows the tile value")]
    TileValueOverflow { survivor: TileId, value: u32 },

    /// Same tile id present in two cells.
    #[error("tile {id} appears more than once on the grid")]
    DuplicateTileId { id: TileId },

    /// Tile id space exhausted.
    #[error("tile id overflow (current: {current})")]
    TileIdOverflow { current: u64 },
}

impl CoreError {
    /// Returns the broad kind of this error.
    pub const fn kind(&self) -> ErrorKind {
        use CoreError::*;
        match self {
            InvalidDirection { .. } | InvalidConfig { .. } => ErrorKind::InvalidArgument,
            EmptyGrid
            | NotSquare { .. }
            | SizeMismatch { .. }
            | InvalidTileValue { .. }
            | TileValueOverflow { .. }
            | DuplicateTileId { .. }
            | TileIdOverflow { .. } => ErrorKind::InvalidState,
        }
    }

    pub(crate) fn invalid_config(field: &'static str, value: u64, reason: &'static str) -> Self {
        Self::InvalidConfig {
            field,
            value,
            reason,
        }
    }
}

impl GameError for CoreError {
    fn severity(&self) -> ErrorSeverity {
        use CoreError::*;
        match self {
            InvalidDirection { .. } | InvalidConfig { .. } => ErrorSeverity::Validation,

            // Shape errors only arise from grids built outside the core
            EmptyGrid
            | NotSquare { .. }
            | SizeMismatch { .. }
            | InvalidTileValue { .. }
            | TileValueOverflow { .. }
            | DuplicateTileId { .. } => ErrorSeverity::Internal,

            TileIdOverflow { .. } => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        use CoreError::*;
        match self {
            InvalidDirection { .. } => "CORE_INVALID_DIRECTION",
            InvalidConfig { .. } => "CORE_INVALID_CONFIG",
            EmptyGrid => "CORE_EMPTY_GRID",
            NotSquare { .. } => "CORE_NOT_SQUARE",
            SizeMismatch { .. } => "CORE_SIZE_MISMATCH",
            InvalidTileValue { .. } => "CORE_INVALID_TILE_VALUE",
            TileValueOverflow { .. } => "CORE_TILE_VALUE_OVERFLOW",
            DuplicateTileId { .. } => "CORE_DUPLICATE_TILE_ID",
            TileIdOverflow { .. } => "CORE_TILE_ID_OVERFLOW",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_split_arguments_from_state() {
        let bad_token = CoreError::InvalidDirection {
            token: "sideways".into(),
        };
        assert_eq!(bad_token.kind(), ErrorKind::InvalidArgument);
        assert_eq!(bad_token.severity(), ErrorSeverity::Validation);

        let ragged = CoreError::NotSquare {
            row: 2,
            len: 3,
            expected: 4,
        };
        assert_eq!(ragged.kind(), ErrorKind::InvalidState);
        assert!(ragged.severity().is_internal());
        assert_eq!(ragged.error_code(), "CORE_NOT_SQUARE");
    }

    #[test]
    fn overflow_is_fatal() {
        let err = CoreError::TileIdOverflow { current: u64::MAX };
        assert_eq!(err.severity(), ErrorSeverity::Fatal);
        assert_eq!(err.severity().as_str(), "fatal");
    }
}
