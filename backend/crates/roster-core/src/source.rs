//! Capabilities the reconciler needs from its two live sources.
//!
//! The roster side is split so that a scraping client and a proper API
//! client can be swapped without touching reconciliation.
#![allow(async_fn_in_trait)]

use crate::{
    CreateUserPayload, DatabaseAccount, EditUserPayload, Result as SyncErrorResult, RoleMap,
    RosterAccount,
};

/// Source of truth for who should have an account.
pub trait AccountSource {
    async fn fetch_accounts(&self) -> SyncErrorResult<Vec<DatabaseAccount>>;
}

/// Read access to the roster application.
pub trait RosterSource {
    async fn list_roles(&self) -> SyncErrorResult<RoleMap>;

    /// List users, resolving each role name through `roles`.
    async fn list_users(&self, roles: &RoleMap) -> SyncErrorResult<Vec<RosterAccount>>;
}

/// Mutating access to the roster application.
///
/// Each call returns the HTTP status of the response; callers do not act on it.
pub trait RosterWriter {
    async fn create_user(&self, payload: &CreateUserPayload) -> SyncErrorResult<u16>;

    async fn update_user(&self, user_id: &str, payload: &EditUserPayload)
    -> SyncErrorResult<u16>;

    async fn delete_user(&self, user_id: &str) -> SyncErrorResult<u16>;
}
