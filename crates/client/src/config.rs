//! Session configuration loaded from the environment.

use std::env;
use std::time::{SystemTime, UNIX_EPOCH};

use game_core::GameConfig;

/// Everything the composition root needs to start a session.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Seed for the first game. Defaults to the wall clock.
    pub seed: u64,
    pub game: GameConfig,
    /// Names the log directory. Generated when unset.
    pub session_id: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            seed: clock_seed(),
            game: GameConfig::default(),
            session_id: None,
        }
    }
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `GAME_SEED` - Seed for the first game (default: wall clock)
    /// - `GAME_BOARD_SIZE` - Board side length (default: 4, at most 16)
    /// - `GAME_WIN_VALUE` - Tile value that wins (default: 1024)
    /// - `GAME_FOUR_PERCENT` - Chance in percent that a spawn is a 4 (default: 10)
    /// - `GAME_SESSION_ID` - Session name used for the log directory
    ///
    /// Unparseable values fall back to their defaults. Range checks are left
    /// to [`GameConfig::validate`] when the session starts.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(seed) = read_env::<u64>("GAME_SEED") {
            config.seed = seed;
        }
        if let Some(size) = read_env::<usize>("GAME_BOARD_SIZE") {
            config.game = config.game.with_board_size(size);
        }
        if let Some(win_value) = read_env::<u32>("GAME_WIN_VALUE") {
            config.game = config.game.with_win_value(win_value);
        }
        if let Some(percent) = read_env::<u32>("GAME_FOUR_PERCENT") {
            config.game = config.game.with_four_spawn_percent(percent);
        }
        config.session_id = env::var("GAME_SESSION_ID")
            .ok()
            .filter(|id| !id.trim().is_empty());

        config
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_use_standard_rules() {
        let config = ClientConfig::default();
        assert_eq!(config.game, GameConfig::default());
        assert!(config.session_id.is_none());
    }
}
