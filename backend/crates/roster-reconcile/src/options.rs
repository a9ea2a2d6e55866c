use roster_core::normalize_username;

use std::collections::HashSet;

/// What happens to roster users that are no longer in the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StaleAccountPolicy {
    #[default]
    Delete,
    Deactivate,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconcileOptions {
    pub stale_policy: StaleAccountPolicy,
    /// Normalized usernames exempt from activate/deactivate/delete.
    /// The add phase does not consult this set.
    pub ignore_users: HashSet<String>,
    pub dry_run: bool,
}

impl ReconcileOptions {
    pub fn new<I, S>(stale_policy: StaleAccountPolicy, ignore_users: I, dry_run: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            stale_policy,
            ignore_users: ignore_users
                .into_iter()
                .map(|user| normalize_username(user.as_ref()))
                .filter(|user| !user.is_empty())
                .collect(),
            dry_run,
        }
    }

    pub fn is_ignored(&self, username: &str) -> bool {
        self.ignore_users.contains(&normalize_username(username))
    }
}

impl Default for ReconcileOptions {
    fn default() -> Self {
        Self::new(StaleAccountPolicy::default(), ["admin"], false)
    }
}
