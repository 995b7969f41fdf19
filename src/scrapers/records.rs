//! Turns a results page into [`PersonRecord`]s.
//!
//! Rows are scanned in index order starting at `r0`. The page gives no row
//! count, so scanning stops at the first index with no row; rows after a gap
//! are never read.

use super::rows::{extract_row, row_exists};
use crate::age::parse_age_birthday;
use crate::cross_refs::CrossReferences;
use crate::error::LookupError;
use crate::models::{PersonRecord, RawRow};
use scraper::Html;
use tracing::{debug, instrument};

/// Lazily yields rows `r0`, `r1`, ... until the first missing index.
pub struct RowScanner<'a> {
    document: &'a Html,
    next_index: usize,
    done: bool,
}

impl<'a> RowScanner<'a> {
    pub fn new(document: &'a Html) -> Self {
        Self {
            document,
            next_index: 0,
            done: false,
        }
    }
}

impl Iterator for RowScanner<'_> {
    type Item = Result<RawRow, LookupError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let index = self.next_index;
        let row = match row_exists(self.document, index) {
            Ok(true) => extract_row(self.document, index),
            Ok(false) => {
                debug!(index, "No more rows");
                self.done = true;
                return None;
            }
            Err(e) => Err(e),
        };
        if row.is_err() {
            self.done = true;
        }
        self.next_index += 1;
        Some(row)
    }
}

/// Build the record for one row, including age/birthday and cross-reference link.
pub fn build_record(row: RawRow, cross_refs: &CrossReferences) -> PersonRecord {
    let parsed = parse_age_birthday(row.age_text.as_deref());
    let offender_link = row
        .name
        .as_deref()
        .and_then(|name| cross_refs.link_for(name))
        .map(str::to_string);

    PersonRecord {
        name: row.name,
        phone: row.phone,
        street: row.street,
        city: row.city,
        state: row.state,
        zip: row.zip,
        age: parsed.age,
        birthday: parsed.birthday,
        offender_link,
    }
}

/// Collect every non-empty record on the page, in row order.
pub fn assemble_records(
    document: &Html,
    cross_refs: &CrossReferences,
) -> Result<Vec<PersonRecord>, LookupError> {
    let mut records = Vec::new();
    for (index, row) in RowScanner::new(document).enumerate() {
        let record = build_record(row?, cross_refs);
        if record.is_empty() {
            debug!(index, "Skipping empty row");
            continue;
        }
        records.push(record);
    }
    Ok(records)
}

/// Parse raw HTML and collect its records.
#[instrument(level = "debug", skip_all, fields(bytes = html.len()))]
pub fn extract_records(
    html: &str,
    cross_refs: &CrossReferences,
) -> Result<Vec<PersonRecord>, LookupError> {
    let document = Html::parse_document(html);
    let records = assemble_records(&document, cross_refs)?;
    debug!(count = records.len(), "Extracted records");
    Ok(records)
}
