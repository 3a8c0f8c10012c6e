//! Widget modules for UI rendering.
//!
//! Each widget is a pure function that reads ViewModel and renders to a terminal frame.
//! Widgets follow these principles:
//! - Read-only access to ViewModel (immutable)
//! - No side effects or state mutations
//! - Framework-specific (Ratatui) but styled through PresentationMapper

pub mod board;
pub mod footer;
pub mod header;
pub mod messages;
