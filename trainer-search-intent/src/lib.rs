//! Rule-based intent parsing for trainer search.
//!
//! The crate turns a free-text request such as "yoga near London under $50
//! for beginners" into a [`SearchIntent`](trainer_search_core::SearchIntent)
//! without any learned model:
//! - **Budget** comes from an ordered list of [`budget::BudgetRule`]s where
//!   literal amounts outrank heuristic words.
//! - **City** comes from capitalised words after `in`, `near` or `around` in
//!   the original text.
//! - **Goals, styles, level and health conditions** come from the static
//!   [`taxonomy`] tables, scanned longest phrase first.
//!
//! # Examples
//!
//! ```
//! use trainer_search_intent::parse_intent;
//!
//! let intent = parse_intent("yoga classes");
//! assert_eq!(intent.goals(), ["yoga"]);
//! assert_eq!(intent.training_style(), ["group"]);
//! ```

#![forbid(unsafe_code)]

pub mod budget;
mod city;
mod parser;
pub mod taxonomy;

pub use budget::extract_max_rate;
pub use city::extract_city;
pub use parser::parse_intent;
