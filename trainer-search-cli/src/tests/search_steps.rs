//! Behaviour-driven step definitions driving the search CLI scenarios.

use super::helpers::{RosterDir, sample_rows, write_utf8};
use super::*;
use crate::search::run_search_with;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;

struct SearchWorld {
    dir: RosterDir,
    include_candidates: RefCell<bool>,
    stdout: RefCell<Vec<u8>>,
    result: RefCell<Option<Result<(), CliError>>>,
}

impl SearchWorld {
    fn new() -> Self {
        Self {
            dir: RosterDir::new(),
            include_candidates: RefCell::new(true),
            stdout: RefCell::new(Vec::new()),
            result: RefCell::new(None),
        }
    }

    fn build_command_line(&self, query: &str) -> Vec<String> {
        let mut argv = vec![
            "trainer-search".to_owned(),
            "search".to_owned(),
            query.to_owned(),
        ];
        if *self.include_candidates.borrow() {
            argv.extend([
                format!("--{ARG_CANDIDATES}"),
                self.dir.path("trainers.json").into_string(),
            ]);
        }
        argv
    }

    fn error(&self) -> std::cell::Ref<'_, CliError> {
        std::cell::Ref::map(self.result.borrow(), |outcome| {
            outcome
                .as_ref()
                .expect("result recorded")
                .as_ref()
                .expect_err("expected error")
        })
    }

    fn output(&self) -> serde_json::Value {
        serde_json::from_slice(&self.stdout.borrow()).expect("output should be JSON")
    }
}

#[fixture]
fn world() -> SearchWorld {
    SearchWorld::new()
}

#[given("a roster of trainers exists on disk")]
fn roster_exists(#[from(world)] world: &SearchWorld) {
    world.dir.write_roster(&sample_rows());
}

#[given("I omit the candidates path")]
fn omit_candidates_path(#[from(world)] world: &SearchWorld) {
    *world.include_candidates.borrow_mut() = false;
}

#[given("the roster file contains invalid JSON")]
fn roster_contains_invalid_json(#[from(world)] world: &SearchWorld) {
    write_utf8(&world.dir.path("trainers.json"), b"[ not valid json");
}

#[when("I run the search command for {query}")]
fn run_search_command(#[from(world)] world: &SearchWorld, query: String) {
    let invocation = world.build_command_line(query.trim_matches('"'));
    let parsed = Cli::try_parse_from(invocation).map_err(CliError::from);
    let outcome = parsed.and_then(|cli| match cli.command {
        Command::Search(args) => {
            let mut buffer = world.stdout.borrow_mut();
            run_search_with(args, &mut *buffer)
        }
        Command::Parse(_) => panic!("expected search command"),
    });
    world.result.replace(Some(outcome));
}

#[then("the command succeeds")]
fn command_succeeds(#[from(world)] world: &SearchWorld) {
    let borrowed = world.result.borrow();
    let result = borrowed.as_ref().expect("result recorded");
    assert!(result.is_ok(), "expected success, found {result:?}");
}

#[then("the first result is {id}")]
fn first_result_is(#[from(world)] world: &SearchWorld, id: String) {
    assert_eq!(world.output()["data"][0]["id"], id.as_str());
}

#[then("the output reports {count} matches")]
fn output_reports_count(#[from(world)] world: &SearchWorld, count: u64) {
    assert_eq!(world.output()["count"], count);
}

#[then("the command fails because the candidates path is missing")]
fn command_fails_missing_candidates(#[from(world)] world: &SearchWorld) {
    match &*world.error() {
        CliError::MissingArgument { field, .. } => assert_eq!(*field, ARG_CANDIDATES),
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[then("the command fails because the roster JSON is invalid")]
fn command_fails_invalid_json(#[from(world)] world: &SearchWorld) {
    match &*world.error() {
        CliError::ParseCandidates { .. } => {}
        other => panic!("expected ParseCandidates, found {other:?}"),
    }
}

macro_rules! register_search_scenario {
    ($fn_name:ident, $scenario_title:literal) => {
        #[scenario(path = "tests/features/search_command.feature", name = $scenario_title)]
        fn $fn_name(#[from(world)] world: SearchWorld) {
            let _ = world;
        }
    };
}

register_search_scenario!(search_happy_path, "ranking a roster from a JSON file");
register_search_scenario!(search_missing_candidates, "rejecting a missing roster path");
register_search_scenario!(search_invalid_json, "rejecting an invalid roster");
