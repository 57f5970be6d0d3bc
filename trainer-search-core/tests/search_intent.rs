//! Integration coverage for building and inspecting search intents.

use rstest::{fixture, rstest};
use trainer_search_core::{FitnessLevel, SearchIntent};

#[fixture]
fn full_intent() -> SearchIntent {
    SearchIntent::builder()
        .with_goal("weight_loss")
        .with_goal("nutrition")
        .with_training_style("online")
        .with_fitness_level(FitnessLevel::Intermediate)
        .with_city("Dubai")
        .with_country("UAE")
        .with_max_rate(75)
        .with_health_condition("back_pain")
        .with_health_condition("back_pain")
        .build()
}

#[rstest]
fn builder_records_every_facet(full_intent: SearchIntent) {
    assert_eq!(full_intent.goals(), ["weight_loss", "nutrition"]);
    assert_eq!(full_intent.training_style(), ["online"]);
    assert_eq!(full_intent.fitness_level(), Some(FitnessLevel::Intermediate));
    assert_eq!(full_intent.city(), Some("Dubai"));
    assert_eq!(full_intent.country(), Some("UAE"));
    assert_eq!(full_intent.max_rate(), Some(75));
    assert_eq!(full_intent.health_conditions(), ["back_pain"]);
    assert!(!full_intent.is_empty());
}

#[rstest]
fn cloned_intents_compare_equal(full_intent: SearchIntent) {
    let copy = full_intent.clone();
    assert_eq!(copy, full_intent);
}

#[rstest]
fn setters_can_clear_scalars() {
    let mut builder = SearchIntent::builder().with_city("Paris").with_max_rate(10);
    builder.set_city(None);
    builder.set_max_rate(None);
    assert!(builder.build().is_empty());
}
