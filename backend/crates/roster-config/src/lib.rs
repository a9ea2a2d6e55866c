mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod superset_config;
mod sync_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use superset_config::SupersetConfig;
pub use sync_config::{SyncConfig, parse_ignore_users};

const CONFIG_DIR_ENV: &str = "ROSTER_SYNC_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".roster-sync";
const CONFIG_FILENAME: &str = "config.toml";

const DELETE_MODE: &str = "delete";
const DEFAULT_ON_DELETE: &str = DELETE_MODE;
const DEFAULT_IGNORE_USERS: &str = "admin";
const DEFAULT_DRY_RUN: bool = false;

const DEFAULT_DATABASE_VIEW: &str = "clients.v_user";

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;
