use thiserror::Error;

#[derive(Error, Debug)]
pub enum RunnerError {
    #[error("Config error: {0}")]
    Config(#[from] roster_config::ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] roster_db::DbError),

    #[error("Roster client error: {0}")]
    Client(#[from] roster_client::ClientError),

    #[error("Sync error: {0}")]
    Sync(#[from] roster_core::SyncError),

    #[error("Failed to prepare log directory {path}: {source}")]
    LogDirectory {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Logger error: {message}")]
    Logger { message: String },
}

pub type Result<T> = std::result::Result<T, RunnerError>;
