//! Splits the combined age/birthday blurb of a result row.
//!
//! The site renders both values in a single element, e.g.
//! `Born January 1984 (40 years old)`. Either half may be missing.

use once_cell::sync::Lazy;
use regex::Regex;

// ASCII classes only: `\d`/`\w` would also accept non-Latin digits.
static BIRTHDAY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"Born ([A-Za-z0-9_]+ [0-9]{4})").expect("birthday pattern compiles")
});
static AGE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\(([0-9]{1,3}) years old\)").expect("age pattern compiles"));

/// Age and birth month/year derived from one row.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AgeBirthday {
    /// Age in years, kept as text (1 to 3 digits).
    pub age: Option<String>,
    /// Birth month and year, e.g. `"January 1984"`.
    pub birthday: Option<String>,
}

/// Parse the age/birthday blurb. The two extractions are independent.
pub fn parse_age_birthday(text: Option<&str>) -> AgeBirthday {
    let Some(text) = text.filter(|t| !t.is_empty()) else {
        return AgeBirthday::default();
    };

    AgeBirthday {
        age: first_group(&AGE_RE, text),
        birthday: first_group(&BIRTHDAY_RE, text),
    }
}

fn first_group(re: &Regex, text: &str) -> Option<String> {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}
