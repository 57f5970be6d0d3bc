//! Structured search intent extracted from a free-text query.
//!
//! A [`SearchIntent`] is immutable once built. List facets never contain the
//! same canonical tag twice and keep the order in which tags were first
//! produced, so two intents built from the same input compare equal.

use crate::FitnessLevel;

/// Facets describing what kind of trainer a user is looking for.
///
/// # Examples
/// ```
/// use trainer_search_core::{FitnessLevel, SearchIntent};
///
/// let intent = SearchIntent::builder()
///     .with_goal("yoga")
///     .with_goal("yoga")
///     .with_fitness_level(FitnessLevel::Beginner)
///     .with_city("London")
///     .build();
/// assert_eq!(intent.goals(), ["yoga"]);
/// assert_eq!(intent.city(), Some("London"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase", from = "wire::IntentWire")
)]
pub struct SearchIntent {
    goals: Vec<String>,
    training_style: Vec<String>,
    fitness_level: Option<FitnessLevel>,
    city: Option<String>,
    country: Option<String>,
    max_rate: Option<u32>,
    health_conditions: Vec<String>,
}

impl SearchIntent {
    /// The canonical empty intent: no list entries and no scalar facets.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            goals: Vec::new(),
            training_style: Vec::new(),
            fitness_level: None,
            city: None,
            country: None,
            max_rate: None,
            health_conditions: Vec::new(),
        }
    }

    /// Start building an intent.
    #[must_use]
    pub const fn builder() -> SearchIntentBuilder {
        SearchIntentBuilder {
            intent: Self::empty(),
        }
    }

    /// Reopen the intent for further edits, such as adding a location the
    /// text did not mention.
    ///
    /// # Examples
    /// ```
    /// use trainer_search_core::SearchIntent;
    ///
    /// let intent = SearchIntent::builder().with_goal("yoga").build();
    /// let widened = intent.into_builder().with_country("UK").build();
    /// assert_eq!(widened.goals(), ["yoga"]);
    /// assert_eq!(widened.country(), Some("UK"));
    /// ```
    #[must_use]
    pub const fn into_builder(self) -> SearchIntentBuilder {
        SearchIntentBuilder { intent: self }
    }

    /// Canonical goal tags such as `weight_loss`.
    #[must_use]
    pub fn goals(&self) -> &[String] {
        &self.goals
    }

    /// Canonical training style tags such as `one_on_one`.
    #[must_use]
    pub fn training_style(&self) -> &[String] {
        &self.training_style
    }

    /// Requested fitness level, if one was mentioned.
    #[must_use]
    pub const fn fitness_level(&self) -> Option<FitnessLevel> {
        self.fitness_level
    }

    /// Requested city, case preserved.
    #[must_use]
    pub fn city(&self) -> Option<&str> {
        self.city.as_deref()
    }

    /// Requested country. The text parser never sets this.
    #[must_use]
    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }

    /// Maximum hourly rate in whole currency units.
    #[must_use]
    pub const fn max_rate(&self) -> Option<u32> {
        self.max_rate
    }

    /// Canonical health condition tags such as `back_pain`.
    #[must_use]
    pub fn health_conditions(&self) -> &[String] {
        &self.health_conditions
    }

    /// Report whether no facet carries a value.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self == &Self::empty()
    }

    /// Report whether the intent constrains location at all.
    #[must_use]
    pub const fn has_location(&self) -> bool {
        self.city.is_some() || self.country.is_some()
    }
}

/// Incremental builder for [`SearchIntent`].
///
/// `push_*` methods ignore tags that are already recorded and report whether
/// the tag was new.
#[derive(Debug, Clone, Default)]
pub struct SearchIntentBuilder {
    intent: SearchIntent,
}

impl SearchIntentBuilder {
    /// Record a goal tag unless already present.
    pub fn push_goal(&mut self, tag: &str) -> bool {
        push_unique(&mut self.intent.goals, tag)
    }

    /// Record a training style tag unless already present.
    pub fn push_training_style(&mut self, tag: &str) -> bool {
        push_unique(&mut self.intent.training_style, tag)
    }

    /// Record a health condition tag unless already present.
    pub fn push_health_condition(&mut self, tag: &str) -> bool {
        push_unique(&mut self.intent.health_conditions, tag)
    }

    /// Set or clear the fitness level.
    pub const fn set_fitness_level(&mut self, level: Option<FitnessLevel>) {
        self.intent.fitness_level = level;
    }

    /// Set or clear the city. Blank names clear it.
    pub fn set_city(&mut self, city: Option<String>) {
        self.intent.city = city.filter(|name| !name.trim().is_empty());
    }

    /// Set or clear the country. Blank names clear it.
    pub fn set_country(&mut self, country: Option<String>) {
        self.intent.country = country.filter(|name| !name.trim().is_empty());
    }

    /// Set or clear the maximum hourly rate.
    pub const fn set_max_rate(&mut self, max_rate: Option<u32>) {
        self.intent.max_rate = max_rate;
    }

    /// Chaining form of [`Self::push_goal`].
    #[must_use]
    pub fn with_goal(mut self, tag: &str) -> Self {
        self.push_goal(tag);
        self
    }

    /// Chaining form of [`Self::push_training_style`].
    #[must_use]
    pub fn with_training_style(mut self, tag: &str) -> Self {
        self.push_training_style(tag);
        self
    }

    /// Chaining form of [`Self::push_health_condition`].
    #[must_use]
    pub fn with_health_condition(mut self, tag: &str) -> Self {
        self.push_health_condition(tag);
        self
    }

    /// Chaining form of [`Self::set_fitness_level`].
    #[must_use]
    pub const fn with_fitness_level(mut self, level: FitnessLevel) -> Self {
        self.intent.fitness_level = Some(level);
        self
    }

    /// Chaining form of [`Self::set_city`].
    #[must_use]
    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.set_city(Some(city.into()));
        self
    }

    /// Chaining form of [`Self::set_country`].
    #[must_use]
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.set_country(Some(country.into()));
        self
    }

    /// Chaining form of [`Self::set_max_rate`].
    #[must_use]
    pub const fn with_max_rate(mut self, max_rate: u32) -> Self {
        self.intent.max_rate = Some(max_rate);
        self
    }

    /// Finish building.
    #[must_use]
    pub fn build(self) -> SearchIntent {
        self.intent
    }
}

fn push_unique(list: &mut Vec<String>, tag: &str) -> bool {
    if list.iter().any(|existing| existing == tag) {
        return false;
    }
    list.push(tag.to_owned());
    true
}

#[cfg(feature = "serde")]
mod wire {
    //! Deserialisation goes through the builder so decoded intents keep the
    //! no-duplicates invariant.

    use serde::Deserialize;

    use super::{SearchIntent, SearchIntentBuilder};
    use crate::FitnessLevel;

    #[derive(Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub(super) struct IntentWire {
        #[serde(default)]
        goals: Vec<String>,
        #[serde(default)]
        training_style: Vec<String>,
        #[serde(default)]
        fitness_level: Option<FitnessLevel>,
        #[serde(default)]
        city: Option<String>,
        #[serde(default)]
        country: Option<String>,
        #[serde(default)]
        max_rate: Option<u32>,
        #[serde(default)]
        health_conditions: Vec<String>,
    }

    impl From<IntentWire> for SearchIntent {
        fn from(wire: IntentWire) -> Self {
            let mut builder = SearchIntentBuilder::default();
            for goal in &wire.goals {
                builder.push_goal(goal);
            }
            for style in &wire.training_style {
                builder.push_training_style(style);
            }
            for condition in &wire.health_conditions {
                builder.push_health_condition(condition);
            }
            builder.set_fitness_level(wire.fitness_level);
            builder.set_city(wire.city);
            builder.set_country(wire.country);
            builder.set_max_rate(wire.max_rate);
            builder.build()
        }
    }
}
