//! Decode loosely typed trainer rows into [`Candidate`] values.
//!
//! Storage rows may omit or null any attribute. Normalisation rules:
//! - missing `id` or `display_name` becomes an empty string;
//! - missing `specializations` becomes an empty list;
//! - missing, negative or fractional `experience_years` is truncated into
//!   the `u32` range, with missing and negative values becoming zero;
//! - blank `city` or `country` becomes absent;
//! - negative or non-finite `hourly_rate` becomes absent;
//! - missing `is_available` means available.
//!
//! Unknown fields are ignored.

use std::io::BufReader;

use camino::Utf8Path;
use serde::Deserialize;
use trainer_search_core::Candidate;

use crate::{CliError, fs::open_utf8_file};

/// A trainer row as stored, before normalisation.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub(crate) struct TrainerRecord {
    pub(crate) id: Option<String>,
    pub(crate) display_name: Option<String>,
    pub(crate) specializations: Option<Vec<String>>,
    pub(crate) experience_years: Option<f64>,
    pub(crate) city: Option<String>,
    pub(crate) country: Option<String>,
    pub(crate) hourly_rate: Option<f64>,
    pub(crate) is_available: Option<bool>,
}

impl From<TrainerRecord> for Candidate {
    fn from(record: TrainerRecord) -> Self {
        Self {
            id: record.id.unwrap_or_default(),
            display_name: record.display_name.unwrap_or_default(),
            specializations: record.specializations.unwrap_or_default(),
            experience_years: record.experience_years.map_or(0, whole_years),
            city: record.city.filter(|name| !name.trim().is_empty()),
            country: record.country.filter(|name| !name.trim().is_empty()),
            hourly_rate: record
                .hourly_rate
                .filter(|rate| rate.is_finite() && *rate >= 0.0),
            is_available: record.is_available.unwrap_or(true),
        }
    }
}

#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "value is clamped into the u32 range before the cast"
)]
fn whole_years(years: f64) -> u32 {
    if years.is_nan() {
        return 0;
    }
    years.clamp(0.0, f64::from(u32::MAX)) as u32
}

/// Load and normalise a JSON array of trainer rows.
pub(crate) fn load_candidates(path: &Utf8Path) -> Result<Vec<Candidate>, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenCandidates {
        path: path.to_path_buf(),
        source,
    })?;
    let records: Vec<TrainerRecord> = serde_json::from_reader(BufReader::new(file)).map_err(
        |source| CliError::ParseCandidates {
            path: path.to_path_buf(),
            source,
        },
    )?;
    log::debug!("loaded {} trainer records from {path}", records.len());
    Ok(records.into_iter().map(Candidate::from).collect())
}
