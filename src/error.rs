//! Error types for lookups.
//!
//! Only [`LookupError::InvalidPhoneNumber`] ever reaches an HTTP caller. Every
//! other variant describes an upstream or extraction failure, which the
//! lookup layer logs and turns into an empty result list.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

/// Message returned when a phone number does not reduce to ten digits.
pub const INVALID_PHONE_MESSAGE: &str = "Invalid phone number. Must contain 10 digits.";

#[derive(Debug, Error)]
pub enum LookupError {
    /// The caller supplied a phone number that is not ten digits after cleanup.
    #[error("{}", INVALID_PHONE_MESSAGE)]
    InvalidPhoneNumber,

    /// Fetching the results page failed, including non-2xx responses.
    #[error("upstream fetch failed: {0}")]
    Fetch(#[from] reqwest::Error),

    /// A structural address could not be compiled into a CSS selector.
    #[error("invalid selector `{selector}`: {message}")]
    Selector { selector: String, message: String },

    /// The lookup URL could not be built from the configured base.
    #[error("cannot build lookup url from `{0}`")]
    Url(String),

    /// The cross-reference table could not be read or parsed.
    #[error("cross-reference table: {0}")]
    CrossReferences(String),
}

impl LookupError {
    /// True for errors caused by caller input rather than the service.
    pub fn is_client_error(&self) -> bool {
        matches!(self, LookupError::InvalidPhoneNumber)
    }
}

impl IntoResponse for LookupError {
    fn into_response(self) -> Response {
        let status = if self.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_phone_message() {
        assert_eq!(
            LookupError::InvalidPhoneNumber.to_string(),
            "Invalid phone number. Must contain 10 digits."
        );
    }

    #[test]
    fn test_client_error_classification() {
        assert!(LookupError::InvalidPhoneNumber.is_client_error());
        assert!(!LookupError::Url("x".into()).is_client_error());
    }

    #[test]
    fn test_invalid_phone_responds_bad_request() {
        let response = LookupError::InvalidPhoneNumber.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
