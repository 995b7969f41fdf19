//! Reads individual result rows out of a people-search results page.
//!
//! Each result is rendered under an element with id `r<index>`, counting up
//! from zero. Fields live at fixed paths below that element; the paths below
//! must match the site's markup exactly.

use crate::error::LookupError;
use crate::models::RawRow;
use scraper::{Html, Selector};

const NAME_PATH: &str = "> div > div.heading > div.name";
const LOCATION_PATH: &str =
    "> div > div.fields > div:nth-child(1) > div > div > div.location > span > a >";
const PHONE_PATH: &str = "> div > div.fields > div:nth-child(2) > ul > li > div > span > a";
const AGE_PATH: &str = "> div > div.heading > div.age";

fn row_id(index: usize) -> String {
    format!("#r{index}")
}

fn compile(selector: &str) -> Result<Selector, LookupError> {
    Selector::parse(selector).map_err(|e| LookupError::Selector {
        selector: selector.to_string(),
        message: e.to_string(),
    })
}

fn field_selector(index: usize, path: &str) -> Result<Selector, LookupError> {
    compile(&format!("{} {}", row_id(index), path))
}

fn location_selector(index: usize, class: &str) -> Result<Selector, LookupError> {
    compile(&format!("{} {} span.{}", row_id(index), LOCATION_PATH, class))
}

/// Trimmed text of every element matching `selector`, joined in document
/// order. Empty text becomes `None`.
fn text_of(document: &Html, selector: &Selector) -> Option<String> {
    let text: String = document
        .select(selector)
        .flat_map(|element| element.text())
        .collect();
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Whether row `index` is present in the document.
pub fn row_exists(document: &Html, index: usize) -> Result<bool, LookupError> {
    let selector = compile(&row_id(index))?;
    Ok(document.select(&selector).next().is_some())
}

/// Pull the raw field text for row `index`.
///
/// Missing sub-elements simply leave the field empty. Callers check
/// [`row_exists`] first; a missing row yields an empty [`RawRow`].
pub fn extract_row(document: &Html, index: usize) -> Result<RawRow, LookupError> {
    let location = |class: &str| -> Result<Option<String>, LookupError> {
        Ok(text_of(document, &location_selector(index, class)?))
    };

    Ok(RawRow {
        name: text_of(document, &field_selector(index, NAME_PATH)?),
        street: location("street")?,
        city: location("city")?,
        state: location("state")?,
        zip: location("zip")?,
        phone: text_of(document, &field_selector(index, PHONE_PATH)?),
        age_text: text_of(document, &field_selector(index, AGE_PATH)?),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESULTS: &str = include_str!("../../tests/fixtures/results.html");

    #[test]
    fn test_row_exists() {
        let document = Html::parse_document(RESULTS);
        assert!(row_exists(&document, 0).unwrap());
        assert!(row_exists(&document, 1).unwrap());
        assert!(!row_exists(&document, 3).unwrap());
    }

    #[test]
    fn test_extract_full_row() {
        let document = Html::parse_document(RESULTS);
        let row = extract_row(&document, 0).unwrap();
        assert_eq!(row.name.as_deref(), Some("Jane Doe"));
        assert_eq!(row.street.as_deref(), Some("12 Main St"));
        assert_eq!(row.city.as_deref(), Some("Troy"));
        assert_eq!(row.state.as_deref(), Some("NY"));
        assert_eq!(row.zip.as_deref(), Some("12180"));
        assert_eq!(row.phone.as_deref(), Some("(518) 555-0101"));
        assert_eq!(
            row.age_text.as_deref(),
            Some("Born January 1984 (40 years old)")
        );
    }

    #[test]
    fn test_missing_fields_are_absent() {
        let document = Html::parse_document(RESULTS);
        let row = extract_row(&document, 1).unwrap();
        assert_eq!(row.name.as_deref(), Some("John Roe"));
        assert_eq!(row.street, None);
        assert_eq!(row.city.as_deref(), Some("Albany"));
        assert_eq!(row.phone, None);
        assert_eq!(row.age_text.as_deref(), Some("(62 years old)"));
    }

    #[test]
    fn test_whitespace_only_is_absent() {
        let html = r#"<div id="r0"><div><div class="heading"><div class="name">   </div></div></div></div>"#;
        let document = Html::parse_document(html);
        assert_eq!(extract_row(&document, 0).unwrap().name, None);
    }

    #[test]
    fn test_phone_matches_are_concatenated() {
        let html = r##"
            <div id="r0"><div><div class="fields">
              <div></div>
              <div><ul>
                <li><div><span><a href="#">518-555-0101</a></span></div></li>
                <li><div><span><a href="#">518-555-0102</a></span></div></li>
              </ul></div>
            </div></div></div>"##;
        let document = Html::parse_document(html);
        assert_eq!(
            extract_row(&document, 0).unwrap().phone.as_deref(),
            Some("518-555-0101518-555-0102")
        );
    }

    #[test]
    fn test_location_in_second_block_is_ignored() {
        // Only the first fields block holds the address.
        let html = r##"
            <div id="r0"><div><div class="fields">
              <div><p>no address</p></div>
              <div><div><div><div class="location"><span><a href="#"><span class="city">Nowhere</span></a></span></div></div></div></div>
            </div></div></div>"##;
        let document = Html::parse_document(html);
        assert_eq!(extract_row(&document, 0).unwrap().city, None);
    }

    #[test]
    fn test_nested_row_id_is_not_a_child_path() {
        // The name must sit directly under the row's first div.
        let html = r#"<div id="r0"><section><div><div class="heading"><div class="name">Hidden</div></div></div></section></div>"#;
        let document = Html::parse_document(html);
        assert_eq!(extract_row(&document, 0).unwrap().name, None);
    }
}
