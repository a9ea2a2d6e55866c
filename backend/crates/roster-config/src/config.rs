use crate::{
    CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult, DEFAULT_CONFIG_DIR,
    DatabaseConfig, LoggingConfig, SupersetConfig, SyncConfig, parse_ignore_users,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub sync: SyncConfig,
    pub superset: SupersetConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration.
    ///
    /// Loading order:
    /// 1. Check for ROSTER_SYNC_CONFIG_DIR env var, else use ./.roster-sync/
    /// 2. Load config.toml if it exists, else use defaults
    /// 3. Apply environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_path = Self::config_dir()?.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();
        config.sync.normalize();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: ROSTER_SYNC_CONFIG_DIR env var > ./.roster-sync/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all configuration.
    /// Call after load() so a bad setup fails before any connection is made.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.superset.validate()?;
        self.database.validate()?;
        Ok(())
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  sync: on_delete={} ({}), ignore_users=[{}], dry_run={}",
            self.sync.on_delete,
            if self.sync.hard_delete() {
                "delete"
            } else {
                "deactivate"
            },
            self.sync.ignore_users.join(", "),
            self.sync.dry_run
        );
        info!(
            "  superset: {} as {}",
            self.superset.base_url, self.superset.username
        );
        info!("  database: view {}", self.database.view);
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        // Sync
        Self::apply_env_string("CLIENT_USER_ON_DELETE", &mut self.sync.on_delete);
        Self::apply_env_list("CLIENT_IGNORE_USERS", &mut self.sync.ignore_users);
        Self::apply_env_bool("ROSTER_SYNC_DRY_RUN", &mut self.sync.dry_run);

        // Superset
        Self::apply_env_string("SUPERSET_BASE_URL", &mut self.superset.base_url);
        Self::apply_env_string("SUPERSET_USERNAME", &mut self.superset.username);
        Self::apply_env_string("SUPERSET_PASSWORD", &mut self.superset.password);

        // Database
        Self::apply_env_string("DATABASE_URL", &mut self.database.url);
        Self::apply_env_string("DATABASE_VIEW", &mut self.database.view);

        // Logging
        Self::apply_env_parse("ROSTER_SYNC_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("ROSTER_SYNC_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("ROSTER_SYNC_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }

    /// Helper: Apply environment variable override for comma-separated lists
    fn apply_env_list(var_name: &str, target: &mut Vec<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = parse_ignore_users(&val);
        }
    }
}
