//! Parse command: show the intent extracted from a request.

use std::io::Write;

use clap::Parser;
use trainer_search_intent::parse_intent;

use crate::{CliError, write_json};

/// CLI arguments for the `parse` subcommand.
#[derive(Debug, Clone, Parser, Default)]
#[command(about = "Print the search intent extracted from a free-text request")]
pub(crate) struct ParseArgs {
    /// Free-text request; an absent request parses as empty.
    #[arg(value_name = "query")]
    pub(crate) query: Option<String>,
}

pub(crate) fn run_parse(args: &ParseArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_parse_with(args, &mut stdout)
}

pub(crate) fn run_parse_with(args: &ParseArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let intent = parse_intent(args.query.as_deref().unwrap_or_default());
    write_json(writer, &intent)
}
