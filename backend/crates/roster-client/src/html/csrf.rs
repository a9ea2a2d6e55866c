use crate::html::selector;
use crate::{ClientError, ClientResult};

use scraper::Html;

const CSRF_INPUT_SELECTOR: &str = "input#csrf_token";

/// Read the anti-forgery token from the hidden `csrf_token` form field.
///
/// When the page renders several forms the last field wins.
pub fn extract_csrf_token(html: &str) -> ClientResult<String> {
    let document = Html::parse_document(html);

    document
        .select(&selector(CSRF_INPUT_SELECTOR)?)
        .filter_map(|input| input.value().attr("value"))
        .last()
        .map(String::from)
        .ok_or_else(|| ClientError::parse("no csrf_token input found on login page"))
}
