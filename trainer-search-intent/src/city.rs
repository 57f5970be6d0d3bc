//! City extraction from case-preserving query text.
//!
//! Capitalisation is the signal: "near London" names a place while "near
//! home" does not. Fitness brands that are written capitalised are skipped.

use std::sync::LazyLock;

use regex::Regex;

const PLACE_SKIP: &[&str] = &["HIIT", "CrossFit", "Pilates", "Yoga", "Boxing", "MMA"];
const ACRONYM_SKIP: &[&str] = &["HIIT", "MMA", "TRX"];

static PLACE: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?:in|near|around)\s+([A-Z][a-zA-Z]*(?:\s+[A-Z][a-zA-Z]*)*)"));
static ACRONYM: LazyLock<Regex> = LazyLock::new(|| compile(r"(?:in|near|around)\s+([A-Z]{2,})"));

#[expect(
    clippy::expect_used,
    reason = "city patterns are constants exercised by the unit tests"
)]
fn compile(source: &str) -> Regex {
    Regex::new(source).expect("city pattern should compile")
}

/// Extract a city name from `text`.
///
/// The longest capitalised name following `in`, `near` or `around` wins, the
/// earliest one on a tie. Only when none qualifies is an all-caps token such
/// as `NYC` accepted, first match wins.
///
/// # Examples
/// ```
/// use trainer_search_intent::extract_city;
///
/// assert_eq!(extract_city("boxing in New York"), Some("New York"));
/// assert_eq!(extract_city("Yoga in Yoga"), None);
/// assert_eq!(extract_city("coach near me"), None);
/// ```
#[must_use]
pub fn extract_city(text: &str) -> Option<&str> {
    longest_place(text).or_else(|| first_acronym(text))
}

fn longest_place(text: &str) -> Option<&str> {
    PLACE
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|name| name.as_str())
        .filter(|name| !PLACE_SKIP.contains(name))
        .fold(None, |best: Option<&str>, name| match best {
            Some(current) if current.len() >= name.len() => Some(current),
            _ => Some(name),
        })
}

fn first_acronym(text: &str) -> Option<&str> {
    ACRONYM
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|name| name.as_str())
        .find(|name| !ACRONYM_SKIP.contains(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("trainer in Dubai", Some("Dubai"))]
    #[case("yoga near London under $50", Some("London"))]
    #[case("boxing around Los Angeles", Some("Los Angeles"))]
    #[case("coach in NYC", Some("NYC"))]
    #[case("in Rome or near San Francisco", Some("San Francisco"))]
    #[case("in Oslo or near Rome", Some("Oslo"))]
    #[case("classes in CrossFit", None)]
    #[case("trainer in dubai", None)]
    #[case("", None)]
    fn extracts_cities(#[case] text: &str, #[case] expected: Option<&str>) {
        assert_eq!(extract_city(text), expected);
    }

    #[rstest]
    fn skipped_brand_does_not_hide_a_later_city() {
        assert_eq!(extract_city("in Pilates near Leeds"), Some("Leeds"));
    }

    #[rstest]
    fn preposition_is_not_word_anchored() {
        assert_eq!(extract_city("join Paris club"), Some("Paris"));
    }

    #[rstest]
    fn acronym_fallback_skips_denied_tokens() {
        assert_eq!(first_acronym("in TRX near LA"), Some("LA"));
        assert_eq!(first_acronym("in HIIT"), None);
    }

    #[rstest]
    fn non_ascii_letters_end_a_name() {
        assert_eq!(extract_city("entraîneur à Montréal"), None);
        assert_eq!(extract_city("coach in Zürich"), Some("Z"));
    }
}
