//! HTML extraction for people-search result pages.
//!
//! Extraction is split in two layers:
//!
//! 1. [`rows`]: reads the raw text of a single `r<index>` row at fixed paths
//! 2. [`records`]: scans rows in order, derives age/birthday, attaches
//!    cross-reference links and drops empty rows
//!
//! Everything here is synchronous and works on an already-fetched document.
//! [`scraper::Html`] is not `Send`, so callers parse and extract between
//! awaits rather than across them.

pub mod records;
pub mod rows;

pub use records::{RowScanner, assemble_records, extract_records};
