//! Application state for mode management and outcome reporting.

use game_core::Outcome;

/// Top-level application mode determining how input is handled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppMode {
    /// Waiting for a move.
    Ready,
    /// A move is being presented; move keys are ignored.
    Presenting,
    /// No move can change the board; only a new game or quit is accepted.
    GameOver,
}

/// Outcome worth telling the player about after a move settles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Announcement {
    Won,
    Lost,
}

/// Mutable application state tracking the current mode.
#[derive(Clone, Debug)]
pub struct AppState {
    pub mode: AppMode,
    /// Set once the win has been announced for the current game.
    pub win_announced: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            mode: AppMode::Ready,
            win_announced: false,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn accepts_moves(&self) -> bool {
        self.mode == AppMode::Ready
    }

    pub fn begin_transition(&mut self) {
        self.mode = AppMode::Presenting;
    }

    /// Leaves the presenting mode once the board has settled on `outcome`.
    ///
    /// A win is reported once per game; play continues afterwards. A loss is
    /// reported and moves are refused until [`AppState::reset`].
    pub fn settle(&mut self, outcome: Outcome) -> Option<Announcement> {
        match outcome {
            Outcome::Continue => {
                self.mode = AppMode::Ready;
                None
            }
            Outcome::Won => {
                self.mode = AppMode::Ready;
                if self.win_announced {
                    None
                } else {
                    self.win_announced = true;
                    Some(Announcement::Won)
                }
            }
            Outcome::Lost => {
                self.mode = AppMode::GameOver;
                Some(Announcement::Lost)
            }
        }
    }

    /// Starts over for a fresh game.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Short label shown in the header.
    pub fn mode_label(&self) -> &'static str {
        match self.mode {
            AppMode::Ready => "",
            AppMode::Presenting => " [SLIDING]",
            AppMode::GameOver => " [GAME OVER]",
        }
    }
}
