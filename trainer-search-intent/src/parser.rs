//! Deterministic free-text to [`SearchIntent`] parser.

use log::debug;
use trainer_search_core::{SearchIntent, SearchIntentBuilder};

use crate::budget::extract_max_rate;
use crate::city::extract_city;
use crate::taxonomy::{GOALS, HEALTH_CONDITIONS, LEVELS, STYLES};

/// Parse a free-text query into a [`SearchIntent`].
///
/// The parser is total and pure: any input, including empty or non-ASCII
/// text, yields an intent, and the same input always yields an equal
/// intent. Budget is read first, then the city from the case-preserving
/// text, then goals, styles, level and health conditions from the
/// lower-cased text.
///
/// # Examples
/// ```
/// use trainer_search_core::FitnessLevel;
/// use trainer_search_intent::parse_intent;
///
/// let intent = parse_intent("yoga near London under $50 for beginners");
/// assert_eq!(intent.goals(), ["yoga"]);
/// assert_eq!(intent.city(), Some("London"));
/// assert_eq!(intent.max_rate(), Some(50));
/// assert_eq!(intent.fitness_level(), Some(FitnessLevel::Beginner));
/// assert_eq!(intent.country(), None);
/// ```
#[must_use]
pub fn parse_intent(query: &str) -> SearchIntent {
    let original = query.trim();
    if original.is_empty() {
        return SearchIntent::empty();
    }
    let lower = normalise(original);

    let mut builder = SearchIntent::builder();
    builder.set_max_rate(extract_max_rate(&lower));
    builder.set_city(extract_city(original).map(str::to_owned));
    collect_goals(&mut builder, &lower);
    collect_styles(&mut builder, &lower);
    builder.set_fitness_level(LEVELS.matches(&lower).next().copied());
    collect_health_conditions(&mut builder, &lower);

    let intent = builder.build();
    debug!(
        "parsed query into {} goals, {} styles, level {:?}, city {:?}, max rate {:?}, {} health conditions",
        intent.goals().len(),
        intent.training_style().len(),
        intent.fitness_level(),
        intent.city(),
        intent.max_rate(),
        intent.health_conditions().len(),
    );
    intent
}

/// Lower-case `text` and collapse whitespace runs to single spaces.
fn normalise(text: &str) -> String {
    text.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn collect_goals(builder: &mut SearchIntentBuilder, text: &str) {
    for tags in GOALS.matches(text) {
        for tag in *tags {
            builder.push_goal(tag);
        }
    }
}

fn collect_styles(builder: &mut SearchIntentBuilder, text: &str) {
    for tag in STYLES.matches(text) {
        builder.push_training_style(tag);
    }
}

fn collect_health_conditions(builder: &mut SearchIntentBuilder, text: &str) {
    for tag in HEALTH_CONDITIONS.matches(text) {
        builder.push_health_condition(tag);
    }
}
