use crate::phases::{activate_users, add_users, deactivate_users, delete_users};
use crate::{ReconcileOptions, Snapshot, StaleAccountPolicy, SyncReport};

use roster_core::{Result as SyncErrorResult, RosterWriter};

use log::info;

pub struct Reconciler {
    options: ReconcileOptions,
}

impl Reconciler {
    pub fn new(options: ReconcileOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ReconcileOptions {
        &self.options
    }

    /// Add, then activate, then delete or deactivate stale users.
    ///
    /// Order matters: a user created in this run is in the roster listing
    /// of neither later phase, so it is never considered stale.
    pub async fn run<W: RosterWriter>(
        &self,
        snapshot: &Snapshot,
        writer: &W,
    ) -> SyncErrorResult<SyncReport> {
        let mut report = SyncReport {
            dry_run: self.options.dry_run,
            ..SyncReport::default()
        };

        let added = add_users(snapshot, writer, &self.options).await?;
        report.created = added.applied;
        report.skipped += added.skipped;

        let activated = activate_users(snapshot, writer, &self.options).await?;
        report.activated = activated.applied;
        report.skipped += activated.skipped;

        match self.options.stale_policy {
            StaleAccountPolicy::Delete => {
                let deleted = delete_users(snapshot, writer, &self.options).await?;
                report.deleted = deleted.applied;
                report.skipped += deleted.skipped;
            }
            StaleAccountPolicy::Deactivate => {
                let deactivated = deactivate_users(snapshot, writer, &self.options).await?;
                report.deactivated = deactivated.applied;
                report.skipped += deactivated.skipped;
            }
        }

        info!("Sync finished: {}", report);
        Ok(report)
    }
}
