//! Terminal layout settings for the slide UI.
use std::env;

/// Settings that only make sense for the terminal board; shared rules and
/// animation timing live in [`client_frontend_core::FrontendConfig`].
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    pub ui: UiConfig,
}

impl CliConfig {
    /// Reads overrides from the environment.
    ///
    /// - `CLI_MESSAGE_PANEL_HEIGHT` - lines for the message log, borders
    ///   included (default: 6, at least 3)
    /// - `CLI_SHOW_HINTS` - list the directions that would move tiles in the
    ///   footer (default: true)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(height) = read_env::<u16>("CLI_MESSAGE_PANEL_HEIGHT") {
            config.ui.message_panel_height = height.max(UiConfig::MIN_MESSAGE_PANEL_HEIGHT);
        }
        if let Some(show) = read_env::<bool>("CLI_SHOW_HINTS") {
            config.ui.show_hints = show;
        }

        config
    }
}

/// Space given to each panel around the board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UiConfig {
    pub message_panel_height: u16,
    pub show_hints: bool,
}

impl UiConfig {
    /// Two border lines plus one message.
    pub const MIN_MESSAGE_PANEL_HEIGHT: u16 = 3;
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            message_panel_height: 6,
            show_hints: true,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.trim().parse().ok()
}
