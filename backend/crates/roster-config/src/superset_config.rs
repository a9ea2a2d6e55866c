use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

/// Connection details for the roster application. All fields are required.
#[derive(Clone, Default, Deserialize)]
#[serde(default)]
pub struct SupersetConfig {
    pub base_url: String,
    pub username: String,
    pub password: String,
}

impl SupersetConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.base_url.trim().is_empty() {
            return Err(ConfigError::superset("superset.base_url is required"));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ConfigError::superset(format!(
                "superset.base_url must start with http:// or https:// (got '{}')",
                self.base_url
            )));
        }

        if self.username.is_empty() {
            return Err(ConfigError::superset("superset.username is required"));
        }

        if self.password.is_empty() {
            return Err(ConfigError::superset("superset.password is required"));
        }

        Ok(())
    }
}

impl std::fmt::Debug for SupersetConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SupersetConfig")
            .field("base_url", &self.base_url)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
