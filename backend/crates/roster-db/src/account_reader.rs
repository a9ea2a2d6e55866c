//! Reads the accounts that should exist in the roster.
//!
//! The view must expose `username, email, firstname, lastname, password, role`.
//! Any sqlx-supported backend works; the URL scheme picks the driver.

use crate::{DbError, Result as DbErrorResult};

use roster_core::{AccountSource, DatabaseAccount, Result as SyncErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use log::{debug, info};
use sqlx::any::{AnyPoolOptions, AnyRow, install_default_drivers};
use sqlx::{AnyPool, Row};

pub struct AccountReader {
    pool: AnyPool,
    view: String,
}

impl AccountReader {
    /// Wrap an existing pool. Fails if `view` is not a plain (optionally
    /// schema-qualified) identifier, since it is interpolated into the query.
    #[track_caller]
    pub fn new(pool: AnyPool, view: &str) -> DbErrorResult<Self> {
        let valid = !view.is_empty()
            && view
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '[' | ']' | '"'));

        if !valid {
            return Err(DbError::InvalidView {
                view: view.to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(Self {
            pool,
            view: view.to_string(),
        })
    }

    /// Open a single-connection pool; the run is sequential.
    pub async fn connect(url: &str, view: &str) -> DbErrorResult<Self> {
        install_default_drivers();

        let pool = AnyPoolOptions::new().max_connections(1).connect(url).await?;
        info!("Database connection established");

        Self::new(pool, view)
    }

    /// Select every row of the view, normalizing username and email.
    pub async fn fetch_accounts(&self) -> DbErrorResult<Vec<DatabaseAccount>> {
        let sql = format!(
            "SELECT username, email, firstname, lastname, password, role FROM {}",
            self.view
        );

        let rows = sqlx::query(&sql).fetch_all(&self.pool).await?;
        debug!("Fetched {} rows from {}", rows.len(), self.view);

        rows.iter()
            .enumerate()
            .map(|(index, row)| Self::map_row(index, row))
            .collect()
    }

    #[track_caller]
    fn map_row(index: usize, row: &AnyRow) -> DbErrorResult<DatabaseAccount> {
        let username = Self::required(index, row, "username")?;

        Ok(DatabaseAccount::new(
            &username,
            &Self::optional(row, "email")?,
            &Self::optional(row, "firstname")?,
            &Self::optional(row, "lastname")?,
            &Self::optional(row, "password")?,
            // Checked against the role map only when the account is created
            &Self::optional(row, "role")?,
        ))
    }

    #[track_caller]
    fn required(index: usize, row: &AnyRow, column: &'static str) -> DbErrorResult<String> {
        let value: Option<String> = row.try_get(column)?;

        match value {
            Some(value) if !value.trim().is_empty() => Ok(value),
            _ => Err(DbError::MissingValue {
                column,
                row: index,
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }

    fn optional(row: &AnyRow, column: &'static str) -> DbErrorResult<String> {
        let value: Option<String> = row.try_get(column)?;
        Ok(value.unwrap_or_default())
    }
}

impl AccountSource for AccountReader {
    async fn fetch_accounts(&self) -> SyncErrorResult<Vec<DatabaseAccount>> {
        Ok(AccountReader::fetch_accounts(self).await?)
    }
}
