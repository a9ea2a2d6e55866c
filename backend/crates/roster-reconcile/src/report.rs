use serde::Serialize;

/// Outcome of one phase.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PhaseCounts {
    /// Accounts the phase issued (or, in a dry run, would have issued) a call for.
    pub applied: usize,
    /// Candidates left alone: ignore-listed or already in the target state.
    pub skipped: usize,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SyncReport {
    pub created: usize,
    pub activated: usize,
    pub deactivated: usize,
    pub deleted: usize,
    pub skipped: usize,
    pub dry_run: bool,
}

impl std::fmt::Display for SyncReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "created={} activated={} deactivated={} deleted={} skipped={}{}",
            self.created,
            self.activated,
            self.deactivated,
            self.deleted,
            self.skipped,
            if self.dry_run { " (dry run)" } else { "" }
        )
    }
}
