//! Data models for people-search results.
//!
//! - [`RawRow`]: trimmed text pulled from one result row, before parsing
//! - [`PersonRecord`]: the record returned to callers
//! - [`LookupKind`]: which lookup produced a result, for logging
//!
//! Absent fields are skipped when serializing so the JSON only carries what
//! the site actually showed.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Text extracted from one result row.
///
/// Every field has already been trimmed; empty text is stored as `None`.
/// The age/birthday blurb is kept whole and split later.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RawRow {
    pub name: Option<String>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub phone: Option<String>,
    pub age_text: Option<String>,
}

/// A person as listed by the people-search site.
///
/// `phone` is whatever the site lists under contact details; it can hold
/// several numbers run together or an email-like identifier.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<String>,
    /// Birth month and year, e.g. `"January 1984"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthday: Option<String>,
    #[serde(rename = "offenderLink", skip_serializing_if = "Option::is_none")]
    pub offender_link: Option<String>,
}

impl PersonRecord {
    /// True when no field carries a non-empty value.
    pub fn is_empty(&self) -> bool {
        [
            &self.name,
            &self.phone,
            &self.street,
            &self.city,
            &self.state,
            &self.zip,
            &self.age,
            &self.birthday,
            &self.offender_link,
        ]
        .iter()
        .all(|field| field.as_deref().is_none_or(str::is_empty))
    }
}

/// The three ways the site can be searched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupKind {
    Name,
    Email,
    Phone,
}

impl fmt::Display for LookupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LookupKind::Name => "name",
            LookupKind::Email => "email",
            LookupKind::Phone => "phone",
        })
    }
}
