//! Warrior server binary.
//!
//! Composition root: loads configuration, installs logging, builds the
//! warrior service once and hands it to the HTTP layer.

use anyhow::Result;
use game_server::{AppState, ServerConfig, logging};
use runtime::WarriorService;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    dotenvy::dotenv().ok();

    let config = ServerConfig::from_env();
    let _guard = logging::setup_logging(&config.log)?;

    tracing::info!("Starting warrior server");
    tracing::info!("Id policy: {}", config.runtime.id_policy);
    tracing::info!(
        "Critical rolls: {}",
        if config.runtime.rng_seed.is_some() {
            "seeded"
        } else {
            "random"
        }
    );

    let service = WarriorService::builder()
        .config(config.runtime.clone())
        .build();

    game_server::serve(&config, AppState::new(service)).await
}
