//! The four reconciliation phases.
//!
//! Each phase walks the snapshot in source order and issues one call per
//! account, awaiting it before moving on. A failing call aborts the phase;
//! calls already issued are not rolled back.

use crate::{PhaseCounts, ReconcileOptions, Snapshot};

use roster_core::{CreateUserPayload, EditUserPayload, Result as SyncErrorResult, RosterWriter};

use log::{debug, info};

/// Create every database account that is missing from the roster.
///
/// The ignore list is not consulted here. Fails with `UnmappedRole` on the
/// first account whose role the roster does not define.
pub async fn add_users<W: RosterWriter>(
    snapshot: &Snapshot,
    writer: &W,
    options: &ReconcileOptions,
) -> SyncErrorResult<PhaseCounts> {
    let mut counts = PhaseCounts::default();

    for username in snapshot.db_usernames() {
        if snapshot.in_roster(username) {
            continue;
        }

        let Some(account) = snapshot.db_account(username) else {
            continue;
        };
        let payload = CreateUserPayload::from_account(account, snapshot.role_map())?;

        if options.dry_run {
            info!("[dry run] Would create user: {}", username);
        } else {
            let status = writer.create_user(&payload).await?;
            info!("Created user: {} (HTTP {})", username, status);
        }
        counts.applied += 1;
    }

    Ok(counts)
}

/// Re-activate inactive roster users that are back in the database.
pub async fn activate_users<W: RosterWriter>(
    snapshot: &Snapshot,
    writer: &W,
    options: &ReconcileOptions,
) -> SyncErrorResult<PhaseCounts> {
    let mut counts = PhaseCounts::default();

    for username in snapshot.db_usernames() {
        let Some(account) = snapshot.roster_account(username) else {
            continue;
        };

        if options.is_ignored(username) {
            debug!("Skipping ignored user: {}", username);
            counts.skipped += 1;
            continue;
        }

        if account.is_active {
            counts.skipped += 1;
            continue;
        }

        let payload = EditUserPayload::from_roster(account).activated();

        if options.dry_run {
            info!("[dry run] Would activate user: {}", username);
        } else {
            let status = writer.update_user(&account.user_id, &payload).await?;
            info!("Activated user: {} (HTTP {})", username, status);
        }
        counts.applied += 1;
    }

    Ok(counts)
}

/// Deactivate active roster users that are gone from the database.
pub async fn deactivate_users<W: RosterWriter>(
    snapshot: &Snapshot,
    writer: &W,
    options: &ReconcileOptions,
) -> SyncErrorResult<PhaseCounts> {
    let mut counts = PhaseCounts::default();

    for username in snapshot.roster_usernames() {
        if snapshot.in_db(username) {
            continue;
        }

        let Some(account) = snapshot.roster_account(username) else {
            continue;
        };

        if options.is_ignored(username) {
            debug!("Skipping ignored user: {}", username);
            counts.skipped += 1;
            continue;
        }

        if !account.is_active {
            counts.skipped += 1;
            continue;
        }

        let payload = EditUserPayload::from_roster(account).deactivated();

        if options.dry_run {
            info!("[dry run] Would deactivate user: {}", username);
        } else {
            let status = writer.update_user(&account.user_id, &payload).await?;
            info!("Deactivated user: {} (HTTP {})", username, status);
        }
        counts.applied += 1;
    }

    Ok(counts)
}

/// Delete roster users that are gone from the database, active or not.
pub async fn delete_users<W: RosterWriter>(
    snapshot: &Snapshot,
    writer: &W,
    options: &ReconcileOptions,
) -> SyncErrorResult<PhaseCounts> {
    let mut counts = PhaseCounts::default();

    for username in snapshot.roster_usernames() {
        if snapshot.in_db(username) {
            continue;
        }

        let Some(account) = snapshot.roster_account(username) else {
            continue;
        };

        if options.is_ignored(username) {
            debug!("Skipping ignored user: {}", username);
            counts.skipped += 1;
            continue;
        }

        if options.dry_run {
            info!("[dry run] Would delete user: {}", username);
        } else {
            let status = writer.delete_user(&account.user_id).await?;
            info!("Deleted user: {} (HTTP {})", username, status);
        }
        counts.applied += 1;
    }

    Ok(counts)
}
