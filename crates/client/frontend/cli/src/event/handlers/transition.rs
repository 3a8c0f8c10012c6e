//! Transition handlers: frame ticks and settling a presented move.

use client_frontend_core::{MessageLevel, ViewModel};
use game_core::Grid;

use super::super::EventLoop;
use crate::state::{AppMode, Announcement};

impl EventLoop {
    /// Advance the current transition by one frame. Returns `true` when
    /// something changed on screen.
    pub(in crate::event) fn advance_transition(&mut self) -> bool {
        let Some(transition) = self.transition.as_mut() else {
            return false;
        };

        if let Some(settled) = transition.advance() {
            self.transition = None;
            self.finalize_move(settled);
        }
        true
    }

    /// Draws the final board, evaluates the outcome and re-enables input.
    fn finalize_move(&mut self, settled: Grid) {
        if &settled != self.session.grid() {
            tracing::warn!("settled board differs from the session; redrawing from session");
        }

        self.view_model = ViewModel::from_session(&self.session);
        let moves = self.view_model.moves;

        match self.app_state.settle(self.view_model.outcome) {
            Some(Announcement::Won) => {
                tracing::info!(moves, "game won");
                self.messages.push_at(
                    moves,
                    MessageLevel::Success,
                    format!(
                        "You reached {}! Keep going or press n for a new game.",
                        self.session.config().win_value
                    ),
                );
            }
            Some(Announcement::Lost) => {
                tracing::info!(moves, best = self.view_model.best_tile, "game lost");
                self.messages.push_at(
                    moves,
                    MessageLevel::Error,
                    format!(
                        "Game over! Best tile {}. Press n for a new game.",
                        self.view_model.best_tile
                    ),
                );
            }
            None => {}
        }

        // A won board can still lock up; winning outranks losing in the outcome.
        if self.app_state.accepts_moves() && self.view_model.legal.is_empty() {
            self.app_state.mode = AppMode::GameOver;
            self.messages.push_at(
                moves,
                MessageLevel::Warning,
                "No moves left. Press n for a new game.",
            );
        }
    }
}
