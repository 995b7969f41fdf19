//! Small string helpers shared by the lookup layer.

/// Collapse a full name into the site's path form.
///
/// Leading and trailing whitespace is removed and each inner whitespace run
/// becomes a single hyphen.
///
/// # Examples
///
/// ```
/// use people_lookup::utils::format_full_name;
///
/// assert_eq!(format_full_name("  Jane   Q  Doe "), "Jane-Q-Doe");
/// ```
pub fn format_full_name(full_name: &str) -> String {
    full_name.split_whitespace().collect::<Vec<_>>().join("-")
}

/// Truncate a string for logging purposes.
///
/// Long strings are cut to at most `max` bytes on a character boundary with
/// `"…(+N bytes)"` appended.
pub fn truncate_for_log(s: &str, max: usize) -> String {
    if s.len() <= max {
        return s.to_string();
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}…(+{} bytes)", &s[..end], s.len() - end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_full_name() {
        assert_eq!(format_full_name("Jane Doe"), "Jane-Doe");
        assert_eq!(format_full_name(" Jane\tDoe\n"), "Jane-Doe");
        assert_eq!(format_full_name("Jane   Q   Doe"), "Jane-Q-Doe");
        assert_eq!(format_full_name("Cher"), "Cher");
        assert_eq!(format_full_name("   "), "");
    }

    #[test]
    fn test_truncate_for_log_short_string() {
        assert_eq!(truncate_for_log("Hello, world!", 100), "Hello, world!");
    }

    #[test]
    fn test_truncate_for_log_long_string() {
        let s = "a".repeat(500);
        let result = truncate_for_log(&s, 100);
        assert!(result.starts_with(&"a".repeat(100)));
        assert!(result.ends_with("…(+400 bytes)"));
    }

    #[test]
    fn test_truncate_for_log_char_boundary() {
        // 'é' is two bytes; cutting at 1 must back off to 0.
        assert_eq!(truncate_for_log("éa", 1), "…(+3 bytes)");
    }
}
