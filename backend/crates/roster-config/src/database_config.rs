use crate::{ConfigError, ConfigErrorResult, DEFAULT_DATABASE_VIEW};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// sqlx connection URL (postgres://, mysql://, sqlite:)
    pub url: String,
    /// View holding one row per account that should exist in the roster.
    pub view: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            view: String::from(DEFAULT_DATABASE_VIEW),
        }
    }
}

impl DatabaseConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.url.trim().is_empty() {
            return Err(ConfigError::database("database.url is required"));
        }

        if self.view.trim().is_empty() {
            return Err(ConfigError::database("database.view cannot be empty"));
        }

        Ok(())
    }
}
