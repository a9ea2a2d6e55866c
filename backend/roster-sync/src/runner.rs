//! One synchronization run: connect, snapshot, reconcile.

use crate::{RunnerError, RunnerErrorResult};

use roster_client::SupersetClient;
use roster_config::{Config, LoggingConfig, SyncConfig};
use roster_core::{AccountSource, RosterSource, RosterWriter};
use roster_db::AccountReader;
use roster_reconcile::{ReconcileOptions, Reconciler, Snapshot, StaleAccountPolicy, SyncReport};

use std::path::{Path, PathBuf};

use log::info;

/// Run against the configured database and roster.
pub async fn run(config: &Config) -> RunnerErrorResult<SyncReport> {
    info!("Connecting to database (view {})", config.database.view);
    let reader = AccountReader::connect(&config.database.url, &config.database.view).await?;

    let mut client = SupersetClient::new(
        &config.superset.base_url,
        &config.superset.username,
        &config.superset.password,
    )?;
    client.authenticate().await?;

    sync(&reader, &client, reconcile_options(&config.sync)).await
}

/// Snapshot both sides, then reconcile.
pub async fn sync<A, R>(
    accounts: &A,
    roster: &R,
    options: ReconcileOptions,
) -> RunnerErrorResult<SyncReport>
where
    A: AccountSource,
    R: RosterSource + RosterWriter,
{
    let snapshot = Snapshot::load(accounts, roster).await?;
    let reconciler = Reconciler::new(options);

    Ok(reconciler.run(&snapshot, roster).await?)
}

pub fn reconcile_options(sync: &SyncConfig) -> ReconcileOptions {
    let policy = if sync.hard_delete() {
        StaleAccountPolicy::Delete
    } else {
        StaleAccountPolicy::Deactivate
    };

    ReconcileOptions::new(policy, &sync.ignore_users, sync.dry_run)
}

/// Resolve the log file under `config_dir`, creating its directory.
/// None when logging goes to stdout.
pub fn log_file_path(
    logging: &LoggingConfig,
    config_dir: &Path,
) -> RunnerErrorResult<Option<PathBuf>> {
    let Some(ref filename) = logging.file else {
        return Ok(None);
    };

    let log_dir = config_dir.join(&logging.dir);
    std::fs::create_dir_all(&log_dir).map_err(|e| RunnerError::LogDirectory {
        path: log_dir.display().to_string(),
        source: e,
    })?;

    Ok(Some(log_dir.join(filename)))
}
