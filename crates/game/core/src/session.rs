//! Explicit game session: state, configuration and randomness in one value.
//!
//! A [`GameSession`] replaces ambient globals. Everything a move touches is
//! owned here and passed down explicitly, so two sessions in one process
//! never share a board or an id counter.

use crate::action::Direction;
use crate::config::GameConfig;
use crate::engine::{self, GameEngine, MoveResult, Outcome};
use crate::env::{GameEnv, PcgRng, RngOracle};
use crate::error::CoreError;
use crate::state::{GameState, Grid};

/// One game in progress.
#[derive(Clone, Debug)]
pub struct GameSession<R: RngOracle = PcgRng> {
    config: GameConfig,
    rng: R,
    state: GameState,
}

impl GameSession<PcgRng> {
    /// Starts a new game: an empty board with the opening tiles spawned.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, CoreError> {
        Self::with_rng(config, seed, PcgRng)
    }
}

impl<R: RngOracle> GameSession<R> {
    /// Starts a new game using a caller-supplied randomness oracle.
    pub fn with_rng(config: GameConfig, seed: u64, rng: R) -> Result<Self, CoreError> {
        config.validate()?;
        let mut session = Self {
            state: GameState::new(seed, config.board_size),
            config,
            rng,
        };
        session.start()?;
        Ok(session)
    }

    /// Resumes from an existing state without spawning anything.
    pub fn from_state(config: GameConfig, state: GameState, rng: R) -> Result<Self, CoreError> {
        config.validate()?;
        state.grid.validate()?;
        if state.grid.size() != config.board_size {
            return Err(CoreError::SizeMismatch {
                expected: config.board_size,
                actual: state.grid.size(),
            });
        }
        Ok(Self { config, rng, state })
    }

    /// Discards the current board and starts over with `seed`.
    ///
    /// The id allocator is scoped to the game, so ids restart at 1.
    pub fn new_game(&mut self, seed: u64) -> Result<(), CoreError> {
        tracing::info!(seed, "starting new game");
        self.state = GameState::new(seed, self.config.board_size);
        self.start()
    }

    /// Applies one directional move.
    pub fn apply_move(&mut self, direction: Direction) -> Result<MoveResult, CoreError> {
        let env = GameEnv::new(&self.config, &self.rng);
        GameEngine::new(&mut self.state).execute(&env, direction)
    }

    /// Parses a direction token and applies it.
    pub fn apply_intent(&mut self, token: &str) -> Result<MoveResult, CoreError> {
        let direction = Direction::parse(token).inspect_err(|err| {
            tracing::warn!(%err, "rejected move intent");
        })?;
        self.apply_move(direction)
    }

    /// Classifies the current board.
    pub fn query_outcome(&self) -> Outcome {
        engine::evaluate(&self.state.grid, self.config.win_value)
    }

    /// Directions that would change the current board.
    pub fn legal_directions(&self) -> Result<Vec<Direction>, CoreError> {
        engine::legal_directions(&self.state.grid)
    }

    pub fn grid(&self) -> &Grid {
        &self.state.grid
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Moves that changed the board.
    pub fn moves(&self) -> u64 {
        self.state.moves
    }

    /// Largest tile value on the board.
    pub fn best_tile(&self) -> u32 {
        self.state.grid.max_value().unwrap_or(0)
    }

    fn start(&mut self) -> Result<(), CoreError> {
        let env = GameEnv::new(&self.config, &self.rng);
        GameEngine::new(&mut self.state).start(&env)?;
        tracing::info!(
            seed = self.state.game_seed,
            size = self.config.board_size,
            "game started"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::TileId;

    #[test]
    fn new_session_has_two_tiles() {
        let session = GameSession::new(GameConfig::default(), 42).unwrap();
        assert_eq!(session.grid().tile_count(), 2);
        assert_eq!(session.grid().size(), 4);
        assert_eq!(session.query_outcome(), Outcome::Continue);
        assert_eq!(session.moves(), 0);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = GameConfig::new().with_board_size(0);
        assert!(matches!(
            GameSession::new(config, 1),
            Err(CoreError::InvalidConfig {
                field: "board_size",
                ..
            })
        ));
    }

    #[test]
    fn bad_intent_is_invalid_argument() {
        let mut session = GameSession::new(GameConfig::default(), 42).unwrap();
        let before = session.state().clone();
        let err = session.apply_intent("diagonal").unwrap_err();
        assert!(matches!(err, CoreError::InvalidDirection { .. }));
        assert_eq!(session.state(), &before);
    }

    #[test]
    fn new_game_resets_ids() {
        let mut session = GameSession::new(GameConfig::default(), 42).unwrap();
        for direction in Direction::ALL {
            session.apply_move(direction).unwrap();
        }
        session.new_game(43).unwrap();
        let max_id = session.grid().max_id().unwrap();
        assert_eq!(max_id, TileId(2));
        assert_eq!(session.moves(), 0);
    }

    #[test]
    fn same_seed_same_game() {
        let mut a = GameSession::new(GameConfig::default(), 2024).unwrap();
        let mut b = GameSession::new(GameConfig::default(), 2024).unwrap();
        assert_eq!(a.grid(), b.grid());
        for direction in [Direction::Left, Direction::Up, Direction::Right, Direction::Down] {
            assert_eq!(
                a.apply_move(direction).unwrap(),
                b.apply_move(direction).unwrap()
            );
        }
    }

    #[test]
    fn from_state_checks_size() {
        let state = GameState::new(0, 3);
        let err = GameSession::from_state(GameConfig::default(), state, PcgRng).unwrap_err();
        assert!(matches!(err, CoreError::SizeMismatch { .. }));
    }
}
