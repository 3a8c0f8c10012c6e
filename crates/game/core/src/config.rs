use crate::error::CoreError;

/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Side length of the square board.
    pub board_size: usize,
    /// Tile value that wins the game once present anywhere on the board.
    pub win_value: u32,
    /// Chance (0-100) that a spawned tile is a 4 instead of a 2.
    pub four_spawn_percent: u32,
    /// Number of tiles spawned when a session starts.
    pub initial_tiles: usize,
}

impl GameConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_BOARD_SIZE: usize = 4;
    pub const DEFAULT_WIN_VALUE: u32 = 1024;
    pub const DEFAULT_FOUR_SPAWN_PERCENT: u32 = 10;
    pub const DEFAULT_INITIAL_TILES: usize = 2;
    pub const MAX_BOARD_SIZE: usize = 16;

    // ===== fixed spawn values =====
    pub const SMALL_SPAWN_VALUE: u32 = 2;
    pub const LARGE_SPAWN_VALUE: u32 = 4;

    pub fn new() -> Self {
        Self {
            board_size: Self::DEFAULT_BOARD_SIZE,
            win_value: Self::DEFAULT_WIN_VALUE,
            four_spawn_percent: Self::DEFAULT_FOUR_SPAWN_PERCENT,
            initial_tiles: Self::DEFAULT_INITIAL_TILES,
        }
    }

    #[must_use]
    pub fn with_board_size(mut self, board_size: usize) -> Self {
        self.board_size = board_size;
        self
    }

    #[must_use]
    pub fn with_win_value(mut self, win_value: u32) -> Self {
        self.win_value = win_value;
        self
    }

    #[must_use]
    pub fn with_four_spawn_percent(mut self, percent: u32) -> Self {
        self.four_spawn_percent = percent;
        self
    }

    #[must_use]
    pub fn with_initial_tiles(mut self, initial_tiles: usize) -> Self {
        self.initial_tiles = initial_tiles;
        self
    }

    /// Rejects values the engine cannot honour.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.board_size == 0 {
            return Err(CoreError::invalid_config(
                "board_size",
                0,
                "board must have at least one cell",
            ));
        }
        if self.board_size > Self::MAX_BOARD_SIZE {
            return Err(CoreError::invalid_config(
                "board_size",
                self.board_size as u64,
                "board may have at most 16 cells per side",
            ));
        }
        if self.win_value < 2 || !self.win_value.is_power_of_two() {
            return Err(CoreError::invalid_config(
                "win_value",
                u64::from(self.win_value),
                "must be a power of two no smaller than 2",
            ));
        }
        if self.four_spawn_percent > 100 {
            return Err(CoreError::invalid_config(
                "four_spawn_percent",
                u64::from(self.four_spawn_percent),
                "must be a percentage",
            ));
        }
        let cells = self.board_size.saturating_mul(self.board_size);
        if self.initial_tiles > cells {
            return Err(CoreError::invalid_config(
                "initial_tiles",
                self.initial_tiles as u64,
                "more initial tiles than cells",
            ));
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
