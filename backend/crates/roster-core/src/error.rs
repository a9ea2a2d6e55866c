use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors surfaced through the account and roster capability traits.
#[derive(Error, Debug)]
pub enum SyncError {
    #[error("Authentication error: {message} {location}")]
    Authentication {
        message: String,
        location: ErrorLocation,
    },

    #[error("Data source error: {message} {location}")]
    DataSource {
        message: String,
        location: ErrorLocation,
    },

    #[error("Parse error: {message} {location}")]
    Parse {
        message: String,
        location: ErrorLocation,
    },

    #[error("Transport error: {message} {location}")]
    Transport {
        message: String,
        location: ErrorLocation,
    },

    #[error("Role '{role}' of user '{username}' is not defined in the roster {location}")]
    UnmappedRole {
        role: String,
        username: String,
        location: ErrorLocation,
    },

    #[error("Roster client used before authentication {location}")]
    NotAuthenticated { location: ErrorLocation },
}

impl SyncError {
    #[track_caller]
    pub fn authentication<S: Into<String>>(message: S) -> Self {
        SyncError::Authentication {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn data_source<S: Into<String>>(message: S) -> Self {
        SyncError::DataSource {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn parse<S: Into<String>>(message: S) -> Self {
        SyncError::Parse {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn transport<S: Into<String>>(message: S) -> Self {
        SyncError::Transport {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unmapped_role(role: &str, username: &str) -> Self {
        SyncError::UnmappedRole {
            role: role.to_string(),
            username: username.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_authenticated() -> Self {
        SyncError::NotAuthenticated {
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, SyncError>;
