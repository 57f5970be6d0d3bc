//! Rank candidates against a search intent.
//!
//! The [`Ranker`] trait turns a [`SearchIntent`](crate::SearchIntent) and a
//! slice of [`Candidate`](crate::Candidate) records into ordered
//! [`ScoredCandidate`] values. Every score is explainable: it is the sum of a
//! [`ScoreBreakdown`] whose components are capped at their facet weights.

use crate::{Candidate, SearchIntent};

/// Maximum points awarded for goal overlap.
pub const GOAL_WEIGHT: u8 = 40;
/// Points awarded for training style.
pub const STYLE_WEIGHT: u8 = 20;
/// Maximum points awarded for experience fit.
pub const LEVEL_WEIGHT: u8 = 20;
/// Maximum points awarded for location fit.
pub const LOCATION_WEIGHT: u8 = 20;
/// Highest possible total score.
pub const MAX_SCORE: u8 = GOAL_WEIGHT + STYLE_WEIGHT + LEVEL_WEIGHT + LOCATION_WEIGHT;

/// Per-facet points making up a candidate's score.
///
/// Each component is clamped to its weight on construction, so the total
/// never exceeds [`MAX_SCORE`].
///
/// # Examples
/// ```
/// use trainer_search_core::ScoreBreakdown;
///
/// let breakdown = ScoreBreakdown::new(20, 20, 15, 0);
/// assert_eq!(breakdown.total(), 55);
/// assert_eq!(ScoreBreakdown::new(99, 20, 20, 20).goal_score(), 40);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct ScoreBreakdown {
    goal_score: u8,
    style_score: u8,
    level_score: u8,
    location_score: u8,
}

impl ScoreBreakdown {
    /// Build a breakdown, clamping each component to its weight.
    #[must_use]
    pub const fn new(goal: u8, style: u8, level: u8, location: u8) -> Self {
        Self {
            goal_score: cap(goal, GOAL_WEIGHT),
            style_score: cap(style, STYLE_WEIGHT),
            level_score: cap(level, LEVEL_WEIGHT),
            location_score: cap(location, LOCATION_WEIGHT),
        }
    }

    /// Goal overlap points (0–40).
    #[must_use]
    pub const fn goal_score(self) -> u8 {
        self.goal_score
    }

    /// Training style points (always 20 in the current scoring model).
    #[must_use]
    pub const fn style_score(self) -> u8 {
        self.style_score
    }

    /// Experience fit points (0–20).
    #[must_use]
    pub const fn level_score(self) -> u8 {
        self.level_score
    }

    /// Location fit points (0–20).
    #[must_use]
    pub const fn location_score(self) -> u8 {
        self.location_score
    }

    /// Sum of all components.
    #[must_use]
    pub const fn total(self) -> u8 {
        self.goal_score + self.style_score + self.level_score + self.location_score
    }
}

const fn cap(value: u8, max: u8) -> u8 {
    if value > max { max } else { value }
}

/// A candidate paired with its score breakdown.
///
/// The total is always derived from the breakdown.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredCandidate<'a> {
    candidate: &'a Candidate,
    breakdown: ScoreBreakdown,
}

impl<'a> ScoredCandidate<'a> {
    /// Pair a candidate with its breakdown.
    #[must_use]
    pub const fn new(candidate: &'a Candidate, breakdown: ScoreBreakdown) -> Self {
        Self {
            candidate,
            breakdown,
        }
    }

    /// The scored trainer record.
    #[must_use]
    pub const fn candidate(&self) -> &'a Candidate {
        self.candidate
    }

    /// Component scores.
    #[must_use]
    pub const fn breakdown(&self) -> ScoreBreakdown {
        self.breakdown
    }

    /// Total score in `0..=100`.
    #[must_use]
    pub const fn score(&self) -> u8 {
        self.breakdown.total()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ScoredCandidate<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("ScoredCandidate", 3)?;
        state.serialize_field("candidate", self.candidate)?;
        state.serialize_field("score", &self.score())?;
        state.serialize_field("breakdown", &self.breakdown)?;
        state.end()
    }
}

/// Filter, score and order candidates for an intent.
///
/// Implementations must be thread-safe (`Send` + `Sync`) and total: every
/// input, including an empty slice, yields a result. The output never holds
/// more entries than the input and only borrows from it.
///
/// # Examples
///
/// ```rust
/// use trainer_search_core::{Candidate, Ranker, ScoreBreakdown, ScoredCandidate, SearchIntent};
///
/// struct FlatRanker;
///
/// impl Ranker for FlatRanker {
///     fn rank<'a>(
///         &self,
///         _intent: &SearchIntent,
///         candidates: &'a [Candidate],
///     ) -> Vec<ScoredCandidate<'a>> {
///         candidates
///             .iter()
///             .map(|c| ScoredCandidate::new(c, ScoreBreakdown::new(40, 20, 20, 20)))
///             .collect()
///     }
/// }
///
/// let roster = [Candidate::new("t-1", "Sam")];
/// let ranked = FlatRanker.rank(&SearchIntent::empty(), &roster);
/// assert_eq!(ranked[0].score(), 100);
/// ```
pub trait Ranker: Send + Sync {
    /// Return the candidates that survive filtering, best match first.
    fn rank<'a>(
        &self,
        intent: &SearchIntent,
        candidates: &'a [Candidate],
    ) -> Vec<ScoredCandidate<'a>>;
}
