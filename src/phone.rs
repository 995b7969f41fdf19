//! Phone number validation and formatting for lookup paths.
//!
//! The people-search site addresses phone lookups as `DDD-DDD-DDDD`. Caller
//! input is free-form ("(202) 555-0199", "+1 202.555.0199", ...), so it is
//! reduced to digits, stripped of a leading US country code and regrouped.

use crate::error::LookupError;
use tracing::debug;

/// Normalize a raw phone string into the `DDD-DDD-DDDD` path segment.
///
/// # Errors
///
/// Returns [`LookupError::InvalidPhoneNumber`] unless the input holds exactly
/// ten digits, or eleven digits starting with `1`.
///
/// # Examples
///
/// ```
/// use people_lookup::phone::normalize_phone;
///
/// assert_eq!(normalize_phone("1-202-555-0199").unwrap(), "202-555-0199");
/// assert!(normalize_phone("555-0199").is_err());
/// ```
pub fn normalize_phone(raw: &str) -> Result<String, LookupError> {
    let mut digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();

    if digits.len() == 11 && digits.starts_with('1') {
        digits.remove(0);
    }

    if digits.len() != 10 {
        debug!(digit_count = digits.len(), "Rejected phone number");
        return Err(LookupError::InvalidPhoneNumber);
    }

    Ok(format!("{}-{}-{}", &digits[..3], &digits[3..6], &digits[6..]))
}
