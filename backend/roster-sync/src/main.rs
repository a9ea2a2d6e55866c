//! roster-sync - one-way sync of database accounts into the Superset user roster
//!
//! Configuration comes from `.roster-sync/config.toml` (or `$ROSTER_SYNC_CONFIG_DIR`),
//! overridden by environment variables, which may be set in a `.env` file.

use roster_sync::{RunnerErrorResult, log_file_path, logger, run};

use std::process::ExitCode;

use log::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    match start().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Sync failed: {}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn start() -> RunnerErrorResult<()> {
    let config = roster_config::Config::load()?;
    config.validate()?;

    let log_file = log_file_path(&config.logging, &roster_config::Config::config_dir()?)?;
    logger::initialize(config.logging.level, log_file, config.logging.colored)?;

    info!("Starting roster-sync v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let report = run(&config).await?;

    match serde_json::to_string(&report) {
        Ok(json) => info!("Report: {}", json),
        Err(e) => info!("Report: {} (JSON unavailable: {})", report, e),
    }

    Ok(())
}
