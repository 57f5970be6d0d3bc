//! Shared trainer fixtures used by unit, behaviour and property tests across
//! the workspace.

use crate::Candidate;

/// A small roster covering every scoring band.
///
/// | id | name | specialisations | years | city | country | rate |
/// |---|---|---|---|---|---|---|
/// | `t-ava` | Ava Brooks | yoga, flexibility | 3 | London | UK | 45 |
/// | `t-ben` | Ben Carter | weight_loss, nutrition, hiit | 12 | Dubai | UAE | 80 |
/// | `t-cara` | Cara Diaz | strength_training, bodybuilding | 8 | New York | USA | 50 |
/// | `t-dev` | Dev Patel | yoga, meditation | 6 | Manchester | UK | — |
/// | `t-eli` | Eli Novak | boxing, martial_arts | 15 | London | UK | 120 |
#[must_use]
pub fn sample_roster() -> Vec<Candidate> {
    vec![
        Candidate::new("t-ava", "Ava Brooks")
            .with_specializations(["yoga", "flexibility"])
            .with_experience_years(3)
            .with_city("London")
            .with_country("UK")
            .with_hourly_rate(45.0),
        Candidate::new("t-ben", "Ben Carter")
            .with_specializations(["weight_loss", "nutrition", "hiit"])
            .with_experience_years(12)
            .with_city("Dubai")
            .with_country("UAE")
            .with_hourly_rate(80.0),
        Candidate::new("t-cara", "Cara Diaz")
            .with_specializations(["strength_training", "bodybuilding"])
            .with_experience_years(8)
            .with_city("New York")
            .with_country("USA")
            .with_hourly_rate(50.0),
        Candidate::new("t-dev", "Dev Patel")
            .with_specializations(["yoga", "meditation"])
            .with_experience_years(6)
            .with_city("Manchester")
            .with_country("UK"),
        Candidate::new("t-eli", "Eli Novak")
            .with_specializations(["boxing", "martial_arts"])
            .with_experience_years(15)
            .with_city("London")
            .with_country("UK")
            .with_hourly_rate(120.0),
    ]
}

/// A bare trainer with the given name and experience, handy for tie-break
/// checks.
#[must_use]
pub fn plain_candidate(name: &str, experience_years: u32) -> Candidate {
    Candidate::new(format!("t-{}", name.to_lowercase()), name)
        .with_experience_years(experience_years)
}
