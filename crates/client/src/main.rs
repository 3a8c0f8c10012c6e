//! Sliding-tile game client binary.
//!
//! # Architecture
//!
//! This binary is the composition root that assembles:
//! 1. Configuration from the environment (and `.env`)
//! 2. File logging
//! 3. A game session and a frontend, injected into the Client container
//!
//! # Features
//!
//! - `frontend-cli`: Terminal-based UI (default)
//!
//! # Examples
//!
//! ```bash
//! GAME_SEED=42 cargo run -p slide-client
//! ```

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    #[cfg(feature = "frontend-cli")]
    {
        run_cli().await?;
    }

    #[cfg(not(feature = "frontend-cli"))]
    {
        compile_error!("At least one frontend feature must be enabled (frontend-cli, etc.)");
    }

    Ok(())
}

/// Run the CLI frontend.
#[cfg(feature = "frontend-cli")]
async fn run_cli() -> Result<()> {
    use client_frontend_cli::{CliConfig, CliFrontend, FrontendConfig, logging};
    use slide_client::{Client, ClientConfig};

    // 1. Load configuration from environment
    let client_config = ClientConfig::from_env();
    let frontend_config = FrontendConfig::from_env();
    let cli_config = CliConfig::from_env();

    // 2. Setup logging
    let session_id = logging::session_id(client_config.session_id.as_deref());
    let _log_guard = logging::setup_logging(&session_id)?;

    tracing::info!("Starting slide client");
    tracing::info!("Seed: {}", client_config.seed);
    tracing::info!(
        "Rules: {}x{} board, win at {}, {}% fours",
        client_config.game.board_size,
        client_config.game.board_size,
        client_config.game.win_value,
        client_config.game.four_spawn_percent
    );

    // 3. Build Frontend (independent layer)
    let frontend = CliFrontend::new(frontend_config, cli_config);

    // 4. Build and run
    let client = Client::builder()
        .config(client_config)
        .frontend(frontend)
        .build()?;

    tracing::info!("Client assembled, starting...");
    client.run().await?;

    tracing::info!("Client shutdown complete");
    Ok(())
}
