//! Command-line interface for trainer search.
//!
//! `trainer-search parse <query>` prints the structured intent extracted from
//! a request. `trainer-search search <query> --candidates trainers.json`
//! ranks a JSON roster against it and prints one page of results. Search
//! options can also come from configuration files or `TRAINER_SEARCH_*`
//! environment variables.
#![forbid(unsafe_code)]

use std::io::Write;

use clap::{Parser, Subcommand};
use serde::Serialize;

mod candidates;
mod error;
mod fs;
mod pagination;
mod parse;
mod search;

pub use error::CliError;
pub use pagination::{DEFAULT_PER_PAGE, MAX_PER_PAGE, PageRequest};

use parse::{ParseArgs, run_parse};
use search::{SearchArgs, run_search};

const ARG_CANDIDATES: &str = "candidates";
const ARG_PAGE: &str = "page";
const ARG_PER_PAGE: &str = "per-page";
const ARG_COUNTRY: &str = "country";
const ARG_INCLUDE_UNAVAILABLE: &str = "include-unavailable";
const ENV_CANDIDATES: &str = "TRAINER_SEARCH_CMDS_SEARCH_CANDIDATES";

/// Run the CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments or configuration are invalid, the
/// candidates file cannot be read or decoded, or output cannot be written.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Parse(args) => run_parse(&args),
        Command::Search(args) => run_search(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "trainer-search",
    about = "Parse trainer search requests and rank trainers against them",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show the search intent extracted from a request.
    Parse(ParseArgs),
    /// Rank trainers from a JSON file against a request.
    Search(SearchArgs),
}

fn write_json<T: Serialize>(writer: &mut dyn Write, value: &T) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerialiseOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
mod tests;
