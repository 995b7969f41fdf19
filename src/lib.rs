//! # People Lookup
//!
//! Looks people up on a people-search site by name, email or phone number and
//! returns the listed results as structured records.
//!
//! ## Architecture
//!
//! 1. **Lookup**: build the results-page URL and fetch it ([`lookup`])
//! 2. **Extraction**: scan the `r0`, `r1`, ... rows of the page and read
//!    their fields ([`scrapers`])
//! 3. **Normalization**: split age/birthday ([`age`]), attach registry links
//!    ([`cross_refs`]) and drop empty rows
//! 4. **Serving**: expose the three lookups over HTTP as JSON ([`server`])
//!
//! Phone numbers are validated up front ([`phone`]); that is the only failure
//! a caller ever sees. Upstream problems yield an empty result list.

pub mod age;
pub mod cli;
pub mod cross_refs;
pub mod error;
pub mod lookup;
pub mod models;
pub mod phone;
pub mod scrapers;
pub mod server;
pub mod utils;

pub use cross_refs::CrossReferences;
pub use error::LookupError;
pub use lookup::LookupService;
pub use models::PersonRecord;
