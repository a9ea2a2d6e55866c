use roster_core::SyncError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("Invalid view name '{view}' {location}")]
    InvalidView {
        view: String,
        location: ErrorLocation,
    },

    #[error("Column {column} is NULL or empty in row {row} {location}")]
    MissingValue {
        column: &'static str,
        row: usize,
        location: ErrorLocation,
    },
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        Self::Sqlx {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<DbError> for SyncError {
    #[track_caller]
    fn from(err: DbError) -> Self {
        SyncError::data_source(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
