//! Request bodies for the roster's mutating endpoints.
//!
//! Activation state is expressed by the *presence* of the `active` field:
//! the roster treats an absent field as inactive, never a literal false.

use crate::{DatabaseAccount, Result as SyncErrorResult, RoleId, RoleMap, RosterAccount};

use serde::Serialize;

/// Value the roster expects in the `active` field.
pub const ACTIVE_FLAG: &str = "y";

/// Body of `POST users/add`.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct CreateUserPayload {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub active: &'static str,
    pub conf_password: String,
    pub password: String,
    pub roles: RoleId,
}

impl CreateUserPayload {
    /// Build a creation request, resolving the account's role by name.
    ///
    /// Fails with `UnmappedRole` when the role is not in `roles`.
    #[track_caller]
    pub fn from_account(account: &DatabaseAccount, roles: &RoleMap) -> SyncErrorResult<Self> {
        let role_id = roles.resolve(&account.role, &account.username)?;

        Ok(Self {
            first_name: account.first_name.clone(),
            last_name: account.last_name.clone(),
            username: account.username.to_lowercase(),
            email: account.email.to_lowercase(),
            active: ACTIVE_FLAG,
            conf_password: account.password.clone(),
            password: account.password.clone(),
            roles: role_id,
        })
    }
}

impl std::fmt::Debug for CreateUserPayload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CreateUserPayload")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("username", &self.username)
            .field("email", &self.email)
            .field("active", &self.active)
            .field("roles", &self.roles)
            .finish_non_exhaustive()
    }
}

/// Body of `POST users/edit/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditUserPayload {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub roles: Vec<Option<RoleId>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<&'static str>,
}

impl EditUserPayload {
    /// Copy the roster record's current fields. `active` is left unset.
    pub fn from_roster(account: &RosterAccount) -> Self {
        Self {
            first_name: account.first_name.clone(),
            last_name: account.last_name.clone(),
            username: account.username.clone(),
            email: account.email.clone(),
            roles: account.role_id.clone(),
            active: None,
        }
    }

    pub fn activated(mut self) -> Self {
        self.active = Some(ACTIVE_FLAG);
        self
    }

    /// Strip the `active` field so the roster deactivates the user.
    pub fn deactivated(mut self) -> Self {
        self.active = None;
        self
    }
}

/// Body of `POST users/delete/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DeleteUserPayload {
    pub delete: &'static str,
}
