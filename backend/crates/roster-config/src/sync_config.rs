use crate::{DEFAULT_DRY_RUN, DEFAULT_IGNORE_USERS, DEFAULT_ON_DELETE, DELETE_MODE};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SyncConfig {
    /// `"delete"` removes stale roster users; any other value deactivates them.
    pub on_delete: String,
    /// Usernames exempt from activate/deactivate/delete.
    pub ignore_users: Vec<String>,
    /// Log every operation without issuing it.
    pub dry_run: bool,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            on_delete: String::from(DEFAULT_ON_DELETE),
            ignore_users: parse_ignore_users(DEFAULT_IGNORE_USERS),
            dry_run: DEFAULT_DRY_RUN,
        }
    }
}

impl SyncConfig {
    /// True when stale users are hard-deleted rather than deactivated.
    pub fn hard_delete(&self) -> bool {
        self.on_delete == DELETE_MODE
    }

    /// Lowercase, trim and drop empty entries.
    pub(crate) fn normalize(&mut self) {
        self.ignore_users = self
            .ignore_users
            .iter()
            .map(|user| user.trim().to_lowercase())
            .filter(|user| !user.is_empty())
            .collect();
    }
}

/// Parse a comma-separated username list.
pub fn parse_ignore_users(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|user| user.trim().to_lowercase())
        .filter(|user| !user.is_empty())
        .collect()
}
