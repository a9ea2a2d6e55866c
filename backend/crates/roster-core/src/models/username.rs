/// Identity key shared by database and roster accounts.
///
/// Two accounts refer to the same person iff their keys are equal.
pub fn normalize_username(raw: &str) -> String {
    raw.trim().to_lowercase()
}
