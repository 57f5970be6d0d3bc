//! Per-facet scoring rules.
//!
//! Each function scores one facet of a [`Candidate`] against a
//! [`SearchIntent`]. The results feed straight into
//! [`ScoreBreakdown::new`](trainer_search_core::ScoreBreakdown::new).

use std::collections::HashSet;

use trainer_search_core::{
    Candidate, FitnessLevel, GOAL_WEIGHT, LEVEL_WEIGHT, LOCATION_WEIGHT, SearchIntent,
    STYLE_WEIGHT,
};

/// Level points for an experience band adjacent to the requested level.
pub const LEVEL_PARTIAL: u8 = 15;
/// Level points for an experience band far from the requested level.
pub const LEVEL_MISMATCH: u8 = 10;
/// Location points when only the country matches.
pub const COUNTRY_MATCH: u8 = 10;

/// Score goal overlap in `0..=40`.
///
/// An intent without goals earns the full weight. Otherwise the score is the
/// share of requested goals the candidate specialises in, scaled to the
/// weight and rounded half up.
///
/// # Examples
/// ```
/// use trainer_search_core::{Candidate, SearchIntent};
/// use trainer_search_scorer::goal_score;
///
/// let intent = SearchIntent::builder()
///     .with_goal("yoga")
///     .with_goal("flexibility")
///     .build();
/// let trainer = Candidate::new("t-1", "Ava").with_specializations(["yoga"]);
/// assert_eq!(goal_score(&intent, &trainer), 20);
/// ```
#[must_use]
#[expect(
    clippy::integer_division,
    clippy::integer_division_remainder_used,
    reason = "round-half-up of a ratio stays exact in integer arithmetic"
)]
pub fn goal_score(intent: &SearchIntent, candidate: &Candidate) -> u8 {
    let goals = intent.goals();
    if goals.is_empty() {
        return GOAL_WEIGHT;
    }
    let specialisations: HashSet<&str> = candidate
        .specializations
        .iter()
        .map(String::as_str)
        .collect();
    let matched = goals
        .iter()
        .filter(|goal| specialisations.contains(goal.as_str()))
        .count();
    let total = goals.len();
    // round(matched / total * weight) == floor((2 * matched * weight + total) / (2 * total))
    let numerator = matched
        .saturating_mul(usize::from(GOAL_WEIGHT))
        .saturating_mul(2)
        .saturating_add(total);
    let scaled = numerator / total.saturating_mul(2);
    u8::try_from(scaled).map_or(GOAL_WEIGHT, |points| points.min(GOAL_WEIGHT))
}

/// Score training style.
///
/// Candidates carry no style attribute, so every candidate earns the full
/// weight.
#[must_use]
pub const fn style_score(_intent: &SearchIntent, _candidate: &Candidate) -> u8 {
    STYLE_WEIGHT
}

/// Score how well `experience_years` fits the requested fitness level.
///
/// | level | full (20) | partial (15) | otherwise (10) |
/// |---|---|---|---|
/// | beginner | up to 5 | 6 to 10 | over 10 |
/// | intermediate | 3 to 10 | over 10 | under 3 |
/// | advanced | 8 or more | 4 to 7 | under 4 |
///
/// No requested level earns the full weight.
#[must_use]
pub const fn level_score(level: Option<FitnessLevel>, experience_years: u32) -> u8 {
    match level {
        None => LEVEL_WEIGHT,
        Some(FitnessLevel::Beginner) => match experience_years {
            0..=5 => LEVEL_WEIGHT,
            6..=10 => LEVEL_PARTIAL,
            _ => LEVEL_MISMATCH,
        },
        Some(FitnessLevel::Intermediate) => match experience_years {
            3..=10 => LEVEL_WEIGHT,
            11.. => LEVEL_PARTIAL,
            _ => LEVEL_MISMATCH,
        },
        Some(FitnessLevel::Advanced) => match experience_years {
            8.. => LEVEL_WEIGHT,
            4..=7 => LEVEL_PARTIAL,
            _ => LEVEL_MISMATCH,
        },
    }
}

/// Score location fit in `0..=20`.
///
/// An intent without city or country earns the full weight. A city match
/// earns the full weight and is checked before the country, which earns
/// [`COUNTRY_MATCH`]. Names compare case-insensitively.
#[must_use]
pub fn location_score(intent: &SearchIntent, candidate: &Candidate) -> u8 {
    if !intent.has_location() {
        return LOCATION_WEIGHT;
    }
    if same_place(intent.city(), candidate.city.as_deref()) {
        return LOCATION_WEIGHT;
    }
    if same_place(intent.country(), candidate.country.as_deref()) {
        return COUNTRY_MATCH;
    }
    0
}

fn same_place(wanted: Option<&str>, actual: Option<&str>) -> bool {
    match (wanted, actual) {
        (Some(wanted_name), Some(actual_name)) if !actual_name.is_empty() => {
            wanted_name.to_lowercase() == actual_name.to_lowercase()
        }
        _ => false,
    }
}
