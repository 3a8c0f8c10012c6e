//! Frontend configuration structures and loaders.
//!
//! This module contains UI-specific configuration that is shared across
//! different frontend implementations (CLI, GUI, etc.).

use std::env;

/// Frontend-specific configuration.
///
/// This contains UI-related settings like message capacity and animation pacing.
#[derive(Clone, Debug, Default)]
pub struct FrontendConfig {
    pub messages: MessageConfig,
    pub animation: AnimationConfig,
}

impl FrontendConfig {
    pub const fn new(messages: MessageConfig, animation: AnimationConfig) -> Self {
        Self {
            messages,
            animation,
        }
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `CLI_MESSAGE_CAPACITY` - Message log capacity (default: 32)
    /// - `CLI_FRAME_INTERVAL_MS` - Delay between animation frames (default: 16)
    /// - `CLI_ANIMATION_FRAMES` - Frames per move, 0 disables sliding (default: 6)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(capacity) = read_env::<usize>("CLI_MESSAGE_CAPACITY") {
            config.messages.capacity = capacity.max(1);
        }

        if let Some(interval) = read_env::<u64>("CLI_FRAME_INTERVAL_MS") {
            config.animation.frame_interval_ms = interval.max(1);
        }
        if let Some(frames) = read_env::<u32>("CLI_ANIMATION_FRAMES") {
            config.animation.frames = frames;
        }

        config
    }
}

#[derive(Clone, Debug)]
pub struct MessageConfig {
    pub capacity: usize,
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self { capacity: 32 }
    }
}

/// Pacing of move transitions.
#[derive(Clone, Debug)]
pub struct AnimationConfig {
    /// Milliseconds between two rendered frames.
    pub frame_interval_ms: u64,
    /// Frames a sliding tile takes to reach its destination.
    pub frames: u32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            frame_interval_ms: 16,
            frames: 6,
        }
    }
}

impl AnimationConfig {
    pub fn is_enabled(&self) -> bool {
        self.frames > 0
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
