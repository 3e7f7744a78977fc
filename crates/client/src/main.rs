//! Leveling agent binary.
//!
//! Loads configuration and content, then runs the act 1 progression against
//! the in-memory world and prints the step report as JSON on stdout.
//!
//! # Examples
//!
//! ```bash
//! # Built-in presets, fresh character
//! cargo run -p leveling-client
//!
//! # Content from disk, character already level 8
//! BOT_DATA_DIR=crates/game/content/data BOT_START_LEVEL=8 cargo run -p leveling-client
//! ```

use anyhow::Result;
use leveling_client::{ClientConfig, Session, logging};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = ClientConfig::from_env();

    let log_dir = config.log_dir.clone().unwrap_or_else(logging::default_log_dir);
    let session_id = logging::session_id_or_timestamp(config.session_id.as_deref());
    let _guard = logging::setup_logging(&log_dir, &session_id)?;

    tracing::info!("Starting leveling agent");
    tracing::info!("Start level: {}", config.start_level);
    tracing::debug!(?config.runtime, "runtime tuning");

    let session = Session::load(&config)?;
    tracing::info!(
        character = %session.character.character_name,
        difficulty = %session.character.difficulty,
        "session ready"
    );

    let report = session
        .dry_run(config.start_level, config.runtime.clone())
        .await;

    for failure in report.failures() {
        tracing::warn!(step = %failure.step, status = ?failure.status, "step failed");
    }
    tracing::info!(status = ?report.status, steps = report.steps.len(), "run finished");

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
