//! Core domain types for the trainer search engine.
//!
//! The crate holds the values that flow between the intent parser and the
//! ranking engine: the structured [`SearchIntent`] extracted from free text,
//! the [`Candidate`] trainer records supplied by the data layer, and the
//! [`ScoredCandidate`] results produced by a [`Ranker`]. Nothing here
//! performs I/O; all types are plain values that are safe to share across
//! threads.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod candidate;
mod intent;
mod level;
mod ranking;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use candidate::Candidate;
pub use intent::{SearchIntent, SearchIntentBuilder};
pub use level::{FitnessLevel, FitnessLevelError};
pub use ranking::{
    GOAL_WEIGHT, LEVEL_WEIGHT, LOCATION_WEIGHT, MAX_SCORE, Ranker, STYLE_WEIGHT, ScoreBreakdown,
    ScoredCandidate,
};
