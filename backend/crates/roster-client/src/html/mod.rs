pub(crate) mod csrf;
pub(crate) mod table;

pub use csrf::extract_csrf_token;
pub use table::{TableRecord, parse_table};

use crate::{ClientError, ClientResult};

use scraper::Selector;

fn selector(css: &str) -> ClientResult<Selector> {
    Selector::parse(css).map_err(|e| ClientError::parse(format!("invalid selector {css}: {e:?}")))
}
