#![expect(
    clippy::expect_used,
    reason = "tests should fail fast when a step runs out of order"
)]

//! Behavioural coverage for free-text intent parsing.

use std::cell::RefCell;

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use trainer_search_core::SearchIntent;
use trainer_search_intent::parse_intent;

/// Scenario state shared between steps.
#[derive(Debug, Default)]
pub struct ParseWorld {
    query: RefCell<String>,
    intent: RefCell<Option<SearchIntent>>,
}

#[fixture]
/// Build a fresh world for each scenario run.
pub fn world() -> ParseWorld {
    ParseWorld::default()
}

impl ParseWorld {
    fn parsed(&self) -> SearchIntent {
        self.intent
            .borrow()
            .clone()
            .expect("the query should have been parsed")
    }
}

#[given("the query {query}")]
fn given_query(world: &ParseWorld, query: String) {
    // Gherkin quotes arrive with the captured text.
    world.query.replace(query.trim_matches('"').to_owned());
}

#[when("I parse the query")]
fn when_parse(world: &ParseWorld) {
    let intent = parse_intent(&world.query.borrow());
    world.intent.replace(Some(intent));
}

#[then("the intent is empty")]
fn then_empty(world: &ParseWorld) {
    assert_eq!(world.parsed(), SearchIntent::empty());
}

#[then("the goals include {tag}")]
fn then_goal(world: &ParseWorld, tag: String) {
    let intent = world.parsed();
    assert!(
        intent.goals().contains(&tag),
        "expected {tag} in {:?}",
        intent.goals()
    );
}

#[then("the training styles include {tag}")]
fn then_style(world: &ParseWorld, tag: String) {
    let intent = world.parsed();
    assert!(
        intent.training_style().contains(&tag),
        "expected {tag} in {:?}",
        intent.training_style()
    );
}

#[then("the city is {city}")]
fn then_city(world: &ParseWorld, city: String) {
    assert_eq!(world.parsed().city(), Some(city.as_str()));
}

#[then("the country is unset")]
fn then_no_country(world: &ParseWorld) {
    assert_eq!(world.parsed().country(), None);
}

#[then("the maximum rate is {rate}")]
fn then_rate(world: &ParseWorld, rate: u32) {
    assert_eq!(world.parsed().max_rate(), Some(rate));
}

#[scenario(path = "tests/features/intent_parser.feature", index = 0)]
fn empty_query(world: ParseWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/intent_parser.feature", index = 1)]
fn weight_loss_goal(world: ParseWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/intent_parser.feature", index = 2)]
fn yoga_classes(world: ParseWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/intent_parser.feature", index = 3)]
fn city_from_preposition(world: ParseWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/intent_parser.feature", index = 4)]
fn hourly_budget(world: ParseWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/intent_parser.feature", index = 5)]
fn literal_budget_wins(world: ParseWorld) {
    let _ = world;
}
