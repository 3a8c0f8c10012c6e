use std::collections::VecDeque;
use std::sync::Mutex;

use game_core::{
    Cell, Direction, GameConfig, GameSession, GameState, Grid, Outcome, PcgRng, Position, RngOracle,
    Tile, TileId, TileIdAllocator, TileMotion, collapse_left, reverse_rows, transpose,
};

/// Oracle that replays queued numbers, then returns 0 forever.
struct ScriptedRng {
    rolls: Mutex<VecDeque<u32>>,
}

impl ScriptedRng {
    fn new(rolls: impl IntoIterator<Item = u32>) -> Self {
        Self {
            rolls: Mutex::new(rolls.into_iter().collect()),
        }
    }
}

impl RngOracle for ScriptedRng {
    fn next_u32(&self, _seed: u64) -> u32 {
        self.rolls.lock().unwrap().pop_front().unwrap_or(0)
    }
}

fn board(values: &[[u32; 4]; 4]) -> Grid {
    let mut ids = TileIdAllocator::new();
    Grid::from_values(values, &mut ids).unwrap()
}

fn row(values: &[u32]) -> Vec<Cell> {
    let mut ids = TileIdAllocator::new();
    values
        .iter()
        .map(|&v| (v != 0).then(|| Tile::new(ids.allocate().unwrap(), v)))
        .collect()
}

fn row_values(values: &[u32]) -> Vec<u32> {
    collapse_left(&row(values))
        .unwrap()
        .row
        .iter()
        .map(|cell| cell.map_or(0, |t| t.value))
        .collect()
}

#[test]
fn scenario_a_opening_pair_merges_left() {
    // Cell roll 0 / value roll 0 twice: (0,0)=2 then (0,1)=2.
    let rng = ScriptedRng::new([0, 0, 0, 0]);
    let mut session = GameSession::with_rng(GameConfig::default(), 0, rng).unwrap();
    assert_eq!(session.grid().values()[0], vec![2, 2, 0, 0]);
    assert_eq!(session.grid().tile_count(), 2);

    let result = session.apply_move(Direction::Left).unwrap();
    assert!(result.changed);

    let merged = session.grid().get(Position::new(0, 0)).unwrap();
    assert_eq!(merged.value, 4);
    assert_eq!(merged.id, TileId(1));

    let spawned = result.spawned.unwrap();
    assert_ne!(spawned.position, Position::new(0, 0));
    assert_eq!(spawned.tile.id, TileId(3));
    assert_eq!(session.grid().tile_count(), 2);
    assert_eq!(session.query_outcome(), Outcome::Continue);
}

#[test]
fn scenario_b_locked_row_is_unchanged() {
    assert_eq!(row_values(&[2, 4, 2, 0]), vec![2, 4, 2, 0]);

    let cells = row(&[2, 4, 2, 0]);
    assert!(!collapse_left(&cells).unwrap().changed);
}

#[test]
fn scenario_c_gapped_pair_merges() {
    assert_eq!(row_values(&[0, 2, 0, 2]), vec![4, 0, 0, 0]);
}

#[test]
fn scenario_d_checkerboard_is_lost() {
    let grid = board(&[[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
    let state = GameState::with_grid(0, grid).unwrap();
    let mut session = GameSession::from_state(GameConfig::default(), state, PcgRng).unwrap();

    assert_eq!(session.query_outcome(), Outcome::Lost);
    assert!(session.legal_directions().unwrap().is_empty());
    for direction in Direction::ALL {
        assert!(!session.apply_move(direction).unwrap().changed);
    }
}

#[test]
fn no_chain_merge_on_full_row() {
    assert_eq!(row_values(&[2, 2, 2, 2]), vec![4, 4, 0, 0]);
}

#[test]
fn orientation_round_trip() {
    let grid = board(&[[2, 0, 4, 0], [8, 16, 0, 0], [0, 0, 0, 32], [64, 0, 2, 2]]);
    assert_eq!(transpose(&transpose(&grid)), grid);
    assert_eq!(reverse_rows(&reverse_rows(&grid)), grid);
}

#[test]
fn random_play_preserves_invariants() {
    let mut session = GameSession::new(GameConfig::default(), 0xC0FFEE).unwrap();
    for step in 0..400 {
        let direction = Direction::ALL[(step * 7 + step / 3) % 4];
        let before = session.state().clone();
        let result = session.apply_move(direction).unwrap();

        if result.changed {
            // Merges conserve value; the only new value is the spawned tile.
            let spawned = result.spawned.expect("changed move on non-full board spawns");
            assert!(matches!(spawned.tile.value, 2 | 4));
            assert_eq!(
                result.new_grid.value_sum(),
                result.old_grid.value_sum() + u64::from(spawned.tile.value)
            );
            assert_eq!(spawned.tile.id, before.ids.peek());
            assert_eq!(session.moves(), before.moves + 1);
        } else {
            assert_eq!(session.state(), &before, "no-op must not touch the state");
            assert_eq!(result.new_grid, result.old_grid);
        }

        session.grid().validate().unwrap();
        if !session.grid().empty_cells().is_empty() {
            assert_ne!(session.query_outcome(), Outcome::Lost);
        }
        if session.query_outcome() == Outcome::Lost {
            break;
        }
    }
    assert!(session.moves() > 0);
}

#[test]
fn motion_plan_accounts_for_every_tile() {
    let mut session = GameSession::new(GameConfig::default(), 99).unwrap();
    for step in 0..50 {
        let result = session.apply_move(Direction::ALL[step % 4]).unwrap();
        if !result.changed {
            continue;
        }
        let plan = result.motion_plan();
        let absorbed = plan
            .iter()
            .filter(|m| matches!(m, TileMotion::Absorbed { .. }))
            .count();
        let spawned = plan
            .iter()
            .filter(|m| matches!(m, TileMotion::Spawned { .. }))
            .count();
        assert_eq!(absorbed, result.merges.len());
        assert_eq!(spawned, 1);
        assert_eq!(
            plan.motions().len(),
            result.old_grid.tile_count() + 1,
            "every old tile slides or is absorbed, plus one spawn"
        );
    }
}

#[test]
fn win_is_reported_and_play_continues() {
    let grid = board(&[[512, 512, 0, 0], [0; 4], [0; 4], [0; 4]]);
    let state = GameState::with_grid(1, grid).unwrap();
    let mut session = GameSession::from_state(GameConfig::default(), state, PcgRng).unwrap();

    assert_eq!(session.query_outcome(), Outcome::Continue);
    assert!(session.apply_move(Direction::Left).unwrap().changed);
    assert_eq!(session.query_outcome(), Outcome::Won);
    assert_eq!(session.best_tile(), 1024);

    // Winning does not end the session.
    assert!(session.apply_move(Direction::Right).unwrap().changed);
}

#[cfg(feature = "serde")]
#[test]
fn move_result_serializes_for_replay_tools() {
    let mut session = GameSession::new(GameConfig::default(), 5).unwrap();
    let result = session.apply_move(Direction::Up).unwrap();
    let json = serde_json::to_string(&result).unwrap();
    let back: game_core::MoveResult = serde_json::from_str(&json).unwrap();
    assert_eq!(back, result);
}
