use roster_core::SyncError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors that can occur while talking to the roster application
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("Authentication failed: {message} {location}")]
    Authentication {
        message: String,
        location: ErrorLocation,
    },

    #[error("HTML parse error: {message} {location}")]
    Parse {
        message: String,
        location: ErrorLocation,
    },

    #[error("Client used before authenticate() {location}")]
    NotAuthenticated { location: ErrorLocation },
}

impl ClientError {
    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        ClientError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    #[track_caller]
    pub fn authentication<S: Into<String>>(message: S) -> Self {
        ClientError::Authentication {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn parse<S: Into<String>>(message: S) -> Self {
        ClientError::Parse {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_authenticated() -> Self {
        ClientError::NotAuthenticated {
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for ClientError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        ClientError::from_reqwest(err)
    }
}

impl From<ClientError> for SyncError {
    #[track_caller]
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Http { message, .. } => SyncError::transport(message),
            ClientError::Authentication { message, .. } => SyncError::authentication(message),
            ClientError::Parse { message, .. } => SyncError::parse(message),
            ClientError::NotAuthenticated { .. } => SyncError::not_authenticated(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
