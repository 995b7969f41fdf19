//! Lookups against the people-search site.
//!
//! Each lookup builds a results-page URL, fetches it and extracts records.
//! Fetch, parse and extraction failures never reach the caller: they are
//! logged and the lookup returns an empty list. The only error a caller can
//! see is [`LookupError::InvalidPhoneNumber`], raised before any request.

use crate::cross_refs::CrossReferences;
use crate::error::LookupError;
use crate::models::{LookupKind, PersonRecord};
use crate::phone::normalize_phone;
use crate::scrapers::extract_records;
use crate::utils::{format_full_name, truncate_for_log};
use reqwest::Client;
use std::sync::Arc;
use tracing::{debug, error, info, instrument};
use url::Url;

/// Default site the lookups are run against.
pub const DEFAULT_BASE_URL: &str = "https://thatsthem.com";

/// Runs name, email and phone lookups.
#[derive(Debug, Clone)]
pub struct LookupService {
    client: Client,
    base_url: Url,
    cross_refs: Arc<CrossReferences>,
}

impl LookupService {
    /// Create a service for `base_url`.
    ///
    /// # Errors
    ///
    /// Fails if `base_url` cannot take path segments (e.g. `mailto:`) or the
    /// HTTP client cannot be built.
    pub fn new(base_url: Url, cross_refs: CrossReferences) -> Result<Self, LookupError> {
        if base_url.cannot_be_a_base() {
            return Err(LookupError::Url(base_url.to_string()));
        }
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            base_url,
            cross_refs: Arc::new(cross_refs),
        })
    }

    /// Look up people by full name and a place qualifier (e.g. `Troy-NY`).
    pub async fn by_name(&self, full_name: &str, place: &str) -> Vec<PersonRecord> {
        let name = format_full_name(full_name);
        self.lookup(LookupKind::Name, &["name", name.as_str(), place]).await
    }

    /// Look up people by email address.
    pub async fn by_email(&self, email: &str) -> Vec<PersonRecord> {
        self.lookup(LookupKind::Email, &["email", email]).await
    }

    /// Look up people by phone number.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::InvalidPhoneNumber`] if `phone` does not reduce
    /// to ten digits. No request is made in that case.
    pub async fn by_phone(&self, phone: &str) -> Result<Vec<PersonRecord>, LookupError> {
        let formatted = normalize_phone(phone)?;
        Ok(self.lookup(LookupKind::Phone, &["phone", formatted.as_str()]).await)
    }

    /// Results-page URL for the given path segments, each percent-encoded.
    pub fn lookup_url(&self, segments: &[&str]) -> Result<Url, LookupError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| LookupError::Url(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn lookup(&self, kind: LookupKind, segments: &[&str]) -> Vec<PersonRecord> {
        let result = match self.lookup_url(segments) {
            Ok(url) => self.fetch_records(url).await,
            Err(e) => Err(e),
        };

        match result {
            Ok(records) => {
                info!(%kind, count = records.len(), "Lookup complete");
                records
            }
            Err(e) => {
                error!(%kind, error = %e, "Lookup failed; returning no results");
                Vec::new()
            }
        }
    }

    #[instrument(level = "info", skip_all, fields(url = %url))]
    async fn fetch_records(&self, url: Url) -> Result<Vec<PersonRecord>, LookupError> {
        let body = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        debug!(
            bytes = body.len(),
            preview = %truncate_for_log(&body, 200),
            "Fetched results page"
        );
        extract_records(&body, &self.cross_refs)
    }
}
