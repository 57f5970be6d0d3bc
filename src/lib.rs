//! Facade crate for the trainer search engine.
//!
//! This crate re-exports the core domain types and exposes the intent parser
//! and the ranking engine behind feature flags.
//!
//! # Examples
//!
//! ```
//! # #[cfg(all(feature = "intent", feature = "scorer"))]
//! # {
//! use trainer_search::{Candidate, parse_intent, score_and_rank};
//!
//! let roster = [
//!     Candidate::new("t-1", "Ava").with_specializations(["yoga"]),
//!     Candidate::new("t-2", "Ben").with_specializations(["boxing"]),
//! ];
//! let intent = parse_intent("yoga classes");
//! let ranked = score_and_rank(&intent, &roster);
//! assert_eq!(ranked[0].candidate().id, "t-1");
//! # }
//! ```

#![forbid(unsafe_code)]

pub use trainer_search_core::{
    Candidate, FitnessLevel, FitnessLevelError, GOAL_WEIGHT, LEVEL_WEIGHT, LOCATION_WEIGHT,
    MAX_SCORE, Ranker, STYLE_WEIGHT, ScoreBreakdown, ScoredCandidate, SearchIntent,
    SearchIntentBuilder,
};

#[cfg(feature = "test-support")]
pub use trainer_search_core::test_support;

#[cfg(feature = "intent")]
pub use trainer_search_intent::{extract_city, extract_max_rate, parse_intent, taxonomy};

#[cfg(feature = "scorer")]
pub use trainer_search_scorer::{FacetRanker, score_and_rank};
