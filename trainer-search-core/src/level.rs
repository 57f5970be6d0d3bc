//! Fitness levels a searcher can describe themselves at.
//!
//! The enum offers compile-time safety for level lookups.
//!
//! # Examples
//! ```
//! use trainer_search_core::FitnessLevel;
//!
//! assert_eq!(FitnessLevel::Beginner.as_str(), "beginner");
//! assert_eq!(FitnessLevel::Advanced.to_string(), "advanced");
//! ```

use thiserror::Error;

/// Self-described training experience of the person searching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum FitnessLevel {
    /// New to training.
    Beginner,
    /// Some training history.
    Intermediate,
    /// Experienced or competitive athlete.
    Advanced,
}

/// Error returned when parsing an unknown fitness level name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown fitness level '{0}'")]
pub struct FitnessLevelError(pub String);

impl FitnessLevel {
    /// Return the canonical lowercase name.
    ///
    /// # Examples
    /// ```
    /// use trainer_search_core::FitnessLevel;
    ///
    /// assert_eq!(FitnessLevel::Intermediate.as_str(), "intermediate");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }
}

impl std::fmt::Display for FitnessLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for FitnessLevel {
    type Err = FitnessLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" => Ok(Self::Advanced),
            _ => Err(FitnessLevelError(s.to_owned())),
        }
    }
}
