//! Property-based tests for the intent parser.
//!
//! # Invariants tested
//!
//! - **Totality:** any string parses without panicking.
//! - **Purity:** parsing the same text twice yields equal intents.
//! - **No duplicates:** list facets never repeat a tag.
//! - **Country:** the parser never sets a country.
//! - **Trim invariance:** surrounding whitespace does not change the intent.

use std::collections::HashSet;

use proptest::prelude::*;
use trainer_search_intent::parse_intent;

fn assert_unique(tags: &[String]) -> Result<(), TestCaseError> {
    let unique: HashSet<_> = tags.iter().collect();
    prop_assert_eq!(unique.len(), tags.len(), "duplicate tags in {:?}", tags);
    Ok(())
}

/// Queries stitched together from vocabulary the parser reacts to, so the
/// interesting branches are hit far more often than with random text.
fn keyword_query() -> impl Strategy<Value = String> {
    let words = prop::sample::select(vec![
        "yoga", "in", "near", "London", "New", "York", "NYC", "HIIT", "under", "$50", "cheap",
        "bulk", "up", "strength", "training", "beginner", "pro", "back", "pain", "group",
        "classes", "online", "kickboxing", "mma", "over", "55", "per", "hour",
    ]);
    prop::collection::vec(words, 0..16).prop_map(|parts| parts.join(" "))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn parsing_is_total_and_pure(query in any::<String>()) {
        let first = parse_intent(&query);
        let second = parse_intent(&query);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn keyword_queries_keep_lists_unique(query in keyword_query()) {
        let intent = parse_intent(&query);
        assert_unique(intent.goals())?;
        assert_unique(intent.training_style())?;
        assert_unique(intent.health_conditions())?;
        prop_assert!(intent.country().is_none());
    }

    #[test]
    fn surrounding_whitespace_is_ignored(query in keyword_query(), pad in "[ \t\n]{0,4}") {
        let padded = format!("{pad}{query}{pad}");
        prop_assert_eq!(parse_intent(&padded), parse_intent(&query));
    }

    #[test]
    fn long_repeated_text_parses(ch in any::<char>(), len in 0_usize..20_000) {
        let query: String = std::iter::repeat_n(ch, len).collect();
        let intent = parse_intent(&query);
        prop_assert!(intent.country().is_none());
    }
}
