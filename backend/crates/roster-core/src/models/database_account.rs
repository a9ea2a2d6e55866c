use crate::normalize_username;

/// One row of the accounts view. Never written back.
#[derive(Clone, PartialEq, Eq)]
pub struct DatabaseAccount {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
    pub role: String,
}

impl DatabaseAccount {
    /// Build an account with `username` and `email` lowercased and trimmed.
    pub fn new(
        username: &str,
        email: &str,
        first_name: &str,
        last_name: &str,
        password: &str,
        role: &str,
    ) -> Self {
        Self {
            username: normalize_username(username),
            email: email.trim().to_lowercase(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            password: password.to_string(),
            role: role.to_string(),
        }
    }
}

impl std::fmt::Debug for DatabaseAccount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseAccount")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("password", &"<redacted>")
            .field("role", &self.role)
            .finish()
    }
}
