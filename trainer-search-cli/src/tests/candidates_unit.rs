//! Unit tests for normalising stored trainer rows.

use super::helpers::RosterDir;
use crate::candidates::{TrainerRecord, load_candidates};
use rstest::rstest;
use serde_json::json;
use trainer_search_core::Candidate;

fn decode(row: serde_json::Value) -> Candidate {
    let record: TrainerRecord = serde_json::from_value(row).expect("decode trainer row");
    Candidate::from(record)
}

#[rstest]
fn sparse_rows_get_neutral_defaults() {
    let trainer = decode(json!({ "id": "t-1" }));

    assert_eq!(trainer.id, "t-1");
    assert_eq!(trainer.display_name, "");
    assert!(trainer.specializations.is_empty());
    assert_eq!(trainer.experience_years, 0);
    assert_eq!(trainer.city, None);
    assert_eq!(trainer.hourly_rate, None);
    assert!(trainer.is_available);
}

#[rstest]
fn nulls_behave_like_missing_fields() {
    let trainer = decode(json!({
        "id": "t-1", "display_name": null, "specializations": null,
        "experience_years": null, "hourly_rate": null, "is_available": null
    }));

    assert_eq!(trainer, decode(json!({ "id": "t-1" })));
}

#[rstest]
#[case(json!(-4), 0)]
#[case(json!(7.9), 7)]
#[case(json!(12), 12)]
#[case(json!(1e12), u32::MAX)]
fn experience_is_truncated_into_range(#[case] years: serde_json::Value, #[case] expected: u32) {
    let trainer = decode(json!({ "experience_years": years }));
    assert_eq!(trainer.experience_years, expected);
}

#[rstest]
#[case(json!(-1), None)]
#[case(json!(0), Some(0.0))]
#[case(json!(42.5), Some(42.5))]
fn negative_rates_are_dropped(#[case] rate: serde_json::Value, #[case] expected: Option<f64>) {
    let trainer = decode(json!({ "hourly_rate": rate }));
    assert_eq!(trainer.hourly_rate, expected);
}

#[rstest]
fn blank_places_are_dropped() {
    let trainer = decode(json!({ "city": " ", "country": "" }));
    assert_eq!(trainer.city, None);
    assert_eq!(trainer.country, None);
}

#[rstest]
fn loads_roster_and_ignores_unknown_fields() {
    let dir = RosterDir::new();
    let path = dir.write_roster(&super::helpers::sample_rows());

    let roster = load_candidates(&path).expect("load roster");

    assert_eq!(roster.len(), 5);
    assert_eq!(roster.first().map(|trainer| trainer.id.as_str()), Some("t-ava"));
}

#[rstest]
fn rejects_non_array_payloads() {
    let dir = RosterDir::new();
    let path = dir.write_roster(&json!({ "id": "t-1" }));

    let err = load_candidates(&path).expect_err("object payload should fail");
    match err {
        crate::CliError::ParseCandidates { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected ParseCandidates, found {other:?}"),
    }
}
