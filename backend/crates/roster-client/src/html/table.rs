//! Scraper for the admin list views.
//!
//! The list pages render one `table.table-hover` whose leading columns hold
//! checkboxes and action buttons. Every row carries exactly one action link
//! that is not an edit link; the last path segment of that link is the row id.

use crate::html::selector;
use crate::{ClientError, ClientResult};

use std::collections::BTreeMap;

use scraper::{ElementRef, Html};

/// One table row: column name to cell text, plus the id column.
pub type TableRecord = BTreeMap<String, String>;

const TABLE_SELECTOR: &str = "table.table.table-hover";
const ROW_SELECTOR: &str = "tbody > tr";
const ACTION_LINK_SELECTOR: &str = "a.btn.btn-sm.btn-default";
/// Delete buttons add a `confirm` class; only the plain buttons carry ids.
const ACTION_LINK_CLASS: &str = "btn btn-sm btn-default";
const EDIT_MARKER: &str = "edit";

/// Parse the first list table in `html`.
///
/// The first `skip_columns` cells of each body row are dropped and the rest are
/// named positionally by `column_names`. `id_column_name` receives the id taken
/// from the row's non-edit action link.
pub fn parse_table(
    html: &str,
    skip_columns: usize,
    column_names: &[&str],
    id_column_name: &str,
) -> ClientResult<Vec<TableRecord>> {
    let document = Html::parse_document(html);

    let table = document
        .select(&selector(TABLE_SELECTOR)?)
        .next()
        .ok_or_else(|| ClientError::parse(format!("no {TABLE_SELECTOR} element in page")))?;

    let rows: Vec<Vec<String>> = table
        .select(&selector(ROW_SELECTOR)?)
        .filter_map(row_cells)
        .collect();

    let ids: Vec<String> = table
        .select(&selector(ACTION_LINK_SELECTOR)?)
        .filter(|anchor| anchor.value().attr("class").map(str::trim) == Some(ACTION_LINK_CLASS))
        .filter_map(|anchor| anchor.value().attr("href"))
        .filter(|href| !href.contains(EDIT_MARKER))
        .map(|href| href.rsplit('/').next().unwrap_or_default().to_string())
        .collect();

    if ids.len() != rows.len() {
        return Err(ClientError::parse(format!(
            "found {} action links for {} table rows",
            ids.len(),
            rows.len()
        )));
    }

    rows.into_iter()
        .zip(ids)
        .enumerate()
        .map(|(index, (cells, id))| {
            let expected = skip_columns + column_names.len();
            if cells.len() != expected {
                return Err(ClientError::parse(format!(
                    "row {index} has {} cells, expected {expected}",
                    cells.len()
                )));
            }

            let mut record: TableRecord = column_names
                .iter()
                .map(|name| name.to_string())
                .zip(cells.into_iter().skip(skip_columns))
                .collect();
            record.insert(id_column_name.to_string(), id);

            Ok(record)
        })
        .collect()
}

/// Whitespace-collapsed text of each `td`/`th`; None for header-only rows.
fn row_cells(row: ElementRef<'_>) -> Option<Vec<String>> {
    let cells: Vec<ElementRef<'_>> = row
        .children()
        .filter_map(ElementRef::wrap)
        .filter(|cell| matches!(cell.value().name(), "td" | "th"))
        .collect();

    if !cells.iter().any(|cell| cell.value().name() == "td") {
        return None;
    }

    Some(
        cells
            .into_iter()
            .map(|cell| {
                cell.text()
                    .flat_map(str::split_whitespace)
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect(),
    )
}
