use crate::{Result as SyncErrorResult, SyncError};

use std::collections::HashMap;

use serde::{Serialize, Serializer};

/// Opaque role identifier scraped from the role listing.
///
/// Serialized as a JSON number when it is a canonical unsigned integer, as a
/// string otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RoleId(pub String);

impl RoleId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RoleId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl std::fmt::Display for RoleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for RoleId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // Canonical integers only: "007" stays a string
        match self.0.parse::<u64>() {
            Ok(numeric) if numeric.to_string() == self.0 => serializer.serialize_u64(numeric),
            _ => serializer.serialize_str(&self.0),
        }
    }
}

/// Lowercased role name to role identifier. Built once per run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleMap {
    roles: HashMap<String, RoleId>,
}

impl RoleMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a role; the name is lowercased and trimmed.
    pub fn insert(&mut self, name: &str, id: RoleId) {
        self.roles.insert(name.trim().to_lowercase(), id);
    }

    /// Case-insensitive lookup.
    pub fn get(&self, name: &str) -> Option<&RoleId> {
        self.roles.get(&name.trim().to_lowercase())
    }

    /// Lookup that fails when the role is missing.
    #[track_caller]
    pub fn resolve(&self, name: &str, username: &str) -> SyncErrorResult<RoleId> {
        self.get(name)
            .cloned()
            .ok_or_else(|| SyncError::unmapped_role(name, username))
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }
}

impl<N: AsRef<str>> FromIterator<(N, RoleId)> for RoleMap {
    fn from_iter<I: IntoIterator<Item = (N, RoleId)>>(iter: I) -> Self {
        let mut map = RoleMap::new();
        for (name, id) in iter {
            map.insert(name.as_ref(), id);
        }
        map
    }
}
