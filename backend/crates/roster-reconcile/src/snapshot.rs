use roster_core::{
    AccountSource, DatabaseAccount, Result as SyncErrorResult, RoleMap, RosterAccount,
    RosterSource, normalize_username,
};

use std::collections::HashSet;

use log::info;

/// Both account sets as read at the start of a run. Immutable afterwards.
#[derive(Debug, Clone)]
pub struct Snapshot {
    db_accounts: Vec<DatabaseAccount>,
    roster_accounts: Vec<RosterAccount>,
    role_map: RoleMap,
    db_usernames: Vec<String>,
    roster_usernames: Vec<String>,
    db_index: HashSet<String>,
    roster_index: HashSet<String>,
}

impl Snapshot {
    pub fn new(
        db_accounts: Vec<DatabaseAccount>,
        roster_accounts: Vec<RosterAccount>,
        role_map: RoleMap,
    ) -> Self {
        let (db_usernames, db_index) =
            unique_usernames(db_accounts.iter().map(|a| a.username.as_str()));
        let (roster_usernames, roster_index) =
            unique_usernames(roster_accounts.iter().map(|a| a.username.as_str()));

        Self {
            db_accounts,
            roster_accounts,
            role_map,
            db_usernames,
            roster_usernames,
            db_index,
            roster_index,
        }
    }

    /// Read database accounts, then roles, then roster users.
    pub async fn load<A, R>(accounts: &A, roster: &R) -> SyncErrorResult<Self>
    where
        A: AccountSource,
        R: RosterSource,
    {
        let db_accounts = accounts.fetch_accounts().await?;
        let role_map = roster.list_roles().await?;
        let roster_accounts = roster.list_users(&role_map).await?;

        info!(
            "Loaded {} database accounts, {} roster users, {} roles",
            db_accounts.len(),
            roster_accounts.len(),
            role_map.len()
        );

        Ok(Self::new(db_accounts, roster_accounts, role_map))
    }

    /// Normalized database usernames in source order, first occurrence kept.
    pub fn db_usernames(&self) -> &[String] {
        &self.db_usernames
    }

    /// Normalized roster usernames in source order, first occurrence kept.
    pub fn roster_usernames(&self) -> &[String] {
        &self.roster_usernames
    }

    pub fn role_map(&self) -> &RoleMap {
        &self.role_map
    }

    pub fn in_db(&self, username: &str) -> bool {
        self.db_index.contains(&normalize_username(username))
    }

    pub fn in_roster(&self, username: &str) -> bool {
        self.roster_index.contains(&normalize_username(username))
    }

    pub fn db_account(&self, username: &str) -> Option<&DatabaseAccount> {
        let key = normalize_username(username);
        self.db_accounts
            .iter()
            .find(|account| normalize_username(&account.username) == key)
    }

    pub fn roster_account(&self, username: &str) -> Option<&RosterAccount> {
        let key = normalize_username(username);
        self.roster_accounts
            .iter()
            .find(|account| normalize_username(&account.username) == key)
    }
}

fn unique_usernames<'a>(raw: impl Iterator<Item = &'a str>) -> (Vec<String>, HashSet<String>) {
    let mut ordered = Vec::new();
    let mut seen = HashSet::new();

    for username in raw.map(normalize_username) {
        if seen.insert(username.clone()) {
            ordered.push(username);
        }
    }

    (ordered, seen)
}
