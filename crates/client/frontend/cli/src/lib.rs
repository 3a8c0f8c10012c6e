//! Terminal UI frontend for the sliding-tile game.
//!
//! This crate provides a terminal-based user interface for the game.
//! It implements the `client_frontend_core::Frontend` trait.
//!
//! # Architecture
//!
//! CliFrontend is a pure UI layer that:
//! - Receives an owned `GameSession` from the composition root
//! - Translates key presses into moves and presents each move as a transition
//! - Reports outcomes through the message log

mod app;
mod config;
mod event;
mod input;
pub mod logging;
pub mod presentation;
mod state;

pub use app::CliFrontend;
pub use config::CliConfig;

// Re-export for convenience (used in main.rs)
pub use client_frontend_core::FrontendConfig;
