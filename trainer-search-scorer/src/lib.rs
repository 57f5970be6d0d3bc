//! Explainable scoring and ranking of trainers for a search intent.
//!
//! Every candidate within budget receives four facet scores that sum to at
//! most 100:
//! - **goal** (0–40): share of requested goals the trainer specialises in.
//! - **style** (20): constant, as candidates carry no style attribute.
//! - **level** (0–20): how well years of experience fit the requested level.
//! - **location** (0–20): city match, then country match.
//!
//! [`score_and_rank`] is the plain entry point; [`FacetRanker`] wraps it as a
//! [`Ranker`](trainer_search_core::Ranker) for callers that take the trait.
//!
//! # Examples
//!
//! ```
//! use trainer_search_core::{Candidate, FitnessLevel, SearchIntent};
//! use trainer_search_scorer::score_and_rank;
//!
//! let roster = [
//!     Candidate::new("t-1", "Ava")
//!         .with_specializations(["yoga"])
//!         .with_experience_years(2),
//!     Candidate::new("t-2", "Ben")
//!         .with_specializations(["boxing"])
//!         .with_experience_years(12),
//! ];
//! let intent = SearchIntent::builder()
//!     .with_goal("yoga")
//!     .with_fitness_level(FitnessLevel::Beginner)
//!     .build();
//! let ranked = score_and_rank(&intent, &roster);
//! assert_eq!(ranked[0].candidate().id, "t-1");
//! assert_eq!(ranked[0].score(), 100);
//! assert_eq!(ranked[1].score(), 50);
//! ```

#![forbid(unsafe_code)]

mod components;
mod engine;

pub use components::{
    COUNTRY_MATCH, LEVEL_MISMATCH, LEVEL_PARTIAL, goal_score, level_score, location_score,
    style_score,
};
pub use engine::{
    FacetRanker, compare_display_names, score_and_rank, score_candidate, within_budget,
};
