use crate::RoleId;

/// A user as listed by the roster application.
///
/// `role` and `role_id` are parallel: `role_id[i]` is the resolved identifier
/// of `role[i]`, or `None` when the role listing has no such name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterAccount {
    /// Trailing path segment of the row's action link. Used for edit/delete calls.
    pub user_id: String,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub is_active: bool,
    pub role: Vec<String>,
    pub role_id: Vec<Option<RoleId>>,
}
