//! Filter, score and order candidates.

use std::cmp::Ordering;

use log::{debug, trace};
use trainer_search_core::{Candidate, Ranker, ScoreBreakdown, ScoredCandidate, SearchIntent};
use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

use crate::components::{goal_score, level_score, location_score, style_score};

/// Ranker combining goal, style, level and location facets.
///
/// # Examples
/// ```
/// use trainer_search_core::{Candidate, Ranker, SearchIntent};
/// use trainer_search_scorer::FacetRanker;
///
/// let roster = [Candidate::new("t-1", "Ava")];
/// let ranked = FacetRanker.rank(&SearchIntent::empty(), &roster);
/// assert_eq!(ranked[0].score(), 100);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FacetRanker;

impl Ranker for FacetRanker {
    fn rank<'a>(
        &self,
        intent: &SearchIntent,
        candidates: &'a [Candidate],
    ) -> Vec<ScoredCandidate<'a>> {
        score_and_rank(intent, candidates)
    }
}

/// Drop candidates over budget, score the rest and order them best first.
///
/// Ordering is by score, then experience (both descending), then display
/// name using [`compare_display_names`].
///
/// # Examples
/// ```
/// use trainer_search_core::{Candidate, SearchIntent};
/// use trainer_search_scorer::score_and_rank;
///
/// let roster = [
///     Candidate::new("t-1", "Ava").with_hourly_rate(60.0),
///     Candidate::new("t-2", "Ben").with_hourly_rate(40.0),
/// ];
/// let intent = SearchIntent::builder().with_max_rate(50).build();
/// let ranked = score_and_rank(&intent, &roster);
/// assert_eq!(ranked.len(), 1);
/// assert_eq!(ranked[0].candidate().display_name, "Ben");
/// ```
#[must_use]
pub fn score_and_rank<'a>(
    intent: &SearchIntent,
    candidates: &'a [Candidate],
) -> Vec<ScoredCandidate<'a>> {
    let mut ranked: Vec<ScoredCandidate<'a>> = candidates
        .iter()
        .filter(|candidate| within_budget(intent.max_rate(), candidate.hourly_rate))
        .map(|candidate| score_candidate(intent, candidate))
        .collect();
    ranked.sort_by(compare_ranked);
    debug!(
        "ranked {} of {} candidates (max rate {:?})",
        ranked.len(),
        candidates.len(),
        intent.max_rate()
    );
    ranked
}

/// Score one candidate without applying the budget filter.
#[must_use]
pub fn score_candidate<'a>(intent: &SearchIntent, candidate: &'a Candidate) -> ScoredCandidate<'a> {
    let breakdown = ScoreBreakdown::new(
        goal_score(intent, candidate),
        style_score(intent, candidate),
        level_score(intent.fitness_level(), candidate.experience_years),
        location_score(intent, candidate),
    );
    trace!(
        "candidate {} scored {} ({breakdown:?})",
        candidate.id,
        breakdown.total()
    );
    ScoredCandidate::new(candidate, breakdown)
}

/// Report whether a rate fits the budget.
///
/// Unknown rates always fit; a rate equal to the maximum fits.
#[must_use]
pub fn within_budget(max_rate: Option<u32>, hourly_rate: Option<f64>) -> bool {
    match (max_rate, hourly_rate) {
        (Some(max), Some(rate)) => rate <= f64::from(max),
        _ => true,
    }
}

/// Order display names the way a collator would.
///
/// Names compare on base letters first, ignoring case and accents. Accents
/// break ties next, unaccented first, then case with lower case first. A raw
/// comparison settles anything left, so the order is total.
///
/// # Examples
/// ```
/// use std::cmp::Ordering;
/// use trainer_search_scorer::compare_display_names;
///
/// assert_eq!(compare_display_names("ava", "Ben"), Ordering::Less);
/// assert_eq!(compare_display_names("ava", "Ava"), Ordering::Less);
/// assert_eq!(compare_display_names("Émile", "Eva"), Ordering::Less);
/// ```
#[must_use]
pub fn compare_display_names(left: &str, right: &str) -> Ordering {
    base_letters(left)
        .cmp(base_letters(right))
        .then_with(|| accented_letters(left).cmp(accented_letters(right)))
        .then_with(|| letter_cases(left).cmp(letter_cases(right)))
        .then_with(|| left.cmp(right))
}

fn base_letters(name: &str) -> impl Iterator<Item = char> + '_ {
    name.nfd()
        .filter(|ch| !is_combining_mark(*ch))
        .flat_map(char::to_lowercase)
}

fn accented_letters(name: &str) -> impl Iterator<Item = char> + '_ {
    name.nfd().flat_map(char::to_lowercase)
}

fn letter_cases(name: &str) -> impl Iterator<Item = bool> + '_ {
    name.nfd().map(char::is_uppercase)
}

fn compare_ranked(left: &ScoredCandidate<'_>, right: &ScoredCandidate<'_>) -> Ordering {
    right
        .score()
        .cmp(&left.score())
        .then_with(|| {
            right
                .candidate()
                .experience_years
                .cmp(&left.candidate().experience_years)
        })
        .then_with(|| {
            compare_display_names(
                &left.candidate().display_name,
                &right.candidate().display_name,
            )
        })
}
