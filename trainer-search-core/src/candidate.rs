//! Trainer records eligible for ranking.

/// A trainer supplied by the external data layer.
///
/// Records are read-only to the engine. Adapters building a `Candidate` from
/// loosely typed storage rows are expected to normalise absent values first
/// (no specialisations, zero years of experience).
///
/// # Examples
/// ```
/// use trainer_search_core::Candidate;
///
/// let trainer = Candidate::new("t-1", "Alex Morgan")
///     .with_specializations(["yoga", "pilates"])
///     .with_experience_years(4)
///     .with_city("London")
///     .with_hourly_rate(45.0);
///
/// assert_eq!(trainer.display_name, "Alex Morgan");
/// assert!(trainer.specializes_in("yoga"));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Candidate {
    /// Stable identifier from storage.
    pub id: String,
    /// Name shown to users; the final ranking tie-break.
    pub display_name: String,
    /// Canonical goal tags the trainer covers.
    pub specializations: Vec<String>,
    /// Years of coaching experience.
    pub experience_years: u32,
    /// City the trainer works in.
    pub city: Option<String>,
    /// Country the trainer works in.
    pub country: Option<String>,
    /// Hourly rate in currency units; `None` when unpublished.
    pub hourly_rate: Option<f64>,
    /// Whether the trainer currently accepts clients.
    pub is_available: bool,
}

impl Candidate {
    /// Construct an available candidate with no other attributes.
    ///
    /// # Examples
    /// ```
    /// use trainer_search_core::Candidate;
    ///
    /// let trainer = Candidate::new("t-1", "Sam");
    /// assert!(trainer.specializations.is_empty());
    /// assert_eq!(trainer.experience_years, 0);
    /// assert!(trainer.is_available);
    /// ```
    #[must_use]
    pub fn new(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            specializations: Vec::new(),
            experience_years: 0,
            city: None,
            country: None,
            hourly_rate: None,
            is_available: true,
        }
    }

    /// Replace the specialisation tags.
    #[must_use]
    pub fn with_specializations<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.specializations = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Set years of experience.
    #[must_use]
    pub const fn with_experience_years(mut self, years: u32) -> Self {
        self.experience_years = years;
        self
    }

    /// Set the city.
    #[must_use]
    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    /// Set the country.
    #[must_use]
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    /// Set the hourly rate.
    #[must_use]
    pub const fn with_hourly_rate(mut self, rate: f64) -> Self {
        self.hourly_rate = Some(rate);
        self
    }

    /// Set availability.
    #[must_use]
    pub const fn with_availability(mut self, available: bool) -> Self {
        self.is_available = available;
        self
    }

    /// Report whether `tag` appears among the specialisations.
    #[must_use]
    pub fn specializes_in(&self, tag: &str) -> bool {
        self.specializations.iter().any(|spec| spec == tag)
    }
}
