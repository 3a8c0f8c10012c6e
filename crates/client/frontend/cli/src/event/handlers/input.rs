//! Input handling (keyboard and move submission).

use anyhow::Result;
use client_frontend_core::{MessageLevel, Transition, ViewModel};
use crossterm::event::{self as term_event, Event as TermEvent, KeyEventKind};
use game_core::{Direction, GameError};
use tokio::time::Duration;

use super::super::EventLoop;
use crate::{input::KeyAction, presentation::terminal::Tui, state::AppMode};

impl EventLoop {
    /// Drain pending terminal events. Returns `true` when the player quits.
    pub(in crate::event) fn handle_input_tick(&mut self, terminal: &mut Tui) -> Result<bool> {
        while term_event::poll(Duration::from_millis(0))? {
            match term_event::read()? {
                TermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                    let action = self.input.handle_key(key);
                    let quit = self.apply_key(action)?;
                    self.render(terminal)?;
                    if quit {
                        return Ok(true);
                    }
                }
                TermEvent::Resize(_, _) => {
                    self.render(terminal)?;
                }
                _ => {}
            }
        }
        Ok(false)
    }

    /// Apply a decoded key. Returns `true` when the player quits.
    pub(in crate::event) fn apply_key(&mut self, action: KeyAction) -> Result<bool> {
        match action {
            KeyAction::Quit => {
                self.messages.push_text("Quitting...");
                Ok(true)
            }
            KeyAction::NewGame => {
                self.start_new_game()?;
                Ok(false)
            }
            KeyAction::Move(direction) => {
                self.submit_move(direction);
                Ok(false)
            }
            KeyAction::None => Ok(false),
        }
    }

    fn submit_move(&mut self, direction: Direction) {
        match self.app_state.mode {
            AppMode::Presenting => {
                tracing::trace!(%direction, "move ignored while presenting");
                return;
            }
            AppMode::GameOver => {
                self.messages.push_at(
                    self.session.moves(),
                    MessageLevel::Warning,
                    "No moves left. Press n for a new game.",
                );
                return;
            }
            AppMode::Ready => {}
        }

        let result = match self.session.apply_move(direction) {
            Ok(result) => result,
            Err(err) => {
                tracing::warn!(code = err.error_code(), "Move rejected: {}", err);
                self.messages.push_at(
                    self.session.moves(),
                    MessageLevel::Error,
                    format!("Move rejected: {err}"),
                );
                return;
            }
        };

        if !result.changed {
            tracing::debug!(%direction, "nothing moved");
            return;
        }

        let previous_best = self.view_model.best_tile;
        if let Some(best) = result.merges.iter().map(|merge| merge.value).max()
            && best > previous_best
        {
            self.messages.push_at(
                self.session.moves(),
                MessageLevel::Info,
                format!("New best tile: {best}"),
            );
        }

        self.transition = Some(Transition::new(
            &result,
            self.frontend_config.animation.frames,
        ));
        self.app_state.begin_transition();
    }

    fn start_new_game(&mut self) -> Result<()> {
        let seed = self.session.state().game_seed.wrapping_add(1);
        self.session.new_game(seed)?;
        self.transition = None;
        self.app_state.reset();
        self.view_model = ViewModel::from_session(&self.session);
        self.messages.push_at(
            0,
            MessageLevel::Info,
            format!("New game started (seed {seed})."),
        );
        Ok(())
    }
}
