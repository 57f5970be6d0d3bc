//! Shared test harness modules for the trainer search CLI.
#![expect(
    clippy::panic,
    reason = "Tests assert panic branches to surface unexpected CLI outcomes"
)]

use super::*;

mod candidates_unit;
mod helpers;
mod search_steps;
