//! roster-client library
//!
//! Session-based client for the Superset user administration pages, plus the
//! HTML table scraping those pages require.

pub(crate) mod client;
pub(crate) mod html;

#[cfg(test)]
mod tests;

pub use client::{ClientError, ClientResult, SupersetClient};
pub use html::{TableRecord, extract_csrf_token, parse_table};
