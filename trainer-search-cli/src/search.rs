//! Search command implementation for the trainer search CLI.

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use trainer_search_core::{Candidate, ScoreBreakdown, ScoredCandidate, SearchIntent};
use trainer_search_intent::parse_intent;
use trainer_search_scorer::score_and_rank;

use crate::{
    ARG_CANDIDATES, ARG_COUNTRY, ARG_INCLUDE_UNAVAILABLE, ARG_PAGE, ARG_PER_PAGE, CliError,
    ENV_CANDIDATES, PageRequest, candidates::load_candidates, write_json,
};

/// CLI arguments for the `search` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Parse a free-text request into a search intent, then rank \
                 the trainers in a JSON file against it. Trainers that are \
                 not accepting clients are skipped unless \
                 --include-unavailable is given.",
    about = "Rank trainers for a free-text request"
)]
#[ortho_config(prefix = "TRAINER_SEARCH")]
pub(crate) struct SearchArgs {
    /// Free-text request, for example "yoga near London under $50".
    #[arg(value_name = "query")]
    #[serde(default)]
    pub(crate) query: Option<String>,
    /// Path to a JSON array of trainer records.
    #[arg(long = ARG_CANDIDATES, value_name = "path")]
    #[serde(default)]
    pub(crate) candidates: Option<Utf8PathBuf>,
    /// One-based result page.
    #[arg(long = ARG_PAGE, value_name = "n")]
    #[serde(default)]
    pub(crate) page: Option<u32>,
    /// Results per page (1 to 50, default 12).
    #[arg(long = ARG_PER_PAGE, value_name = "n")]
    #[serde(default)]
    pub(crate) per_page: Option<u32>,
    /// Country to score location against, which free text never sets.
    #[arg(long = ARG_COUNTRY, value_name = "name")]
    #[serde(default)]
    pub(crate) country: Option<String>,
    /// Rank trainers that are not accepting clients as well.
    #[arg(long = ARG_INCLUDE_UNAVAILABLE)]
    #[serde(default)]
    pub(crate) include_unavailable: bool,
}

impl SearchArgs {
    pub(crate) fn into_config(self) -> Result<SearchConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        SearchConfig::try_from(merged)
    }
}

/// Resolved `search` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SearchConfig {
    pub(crate) query: String,
    pub(crate) candidates: Utf8PathBuf,
    pub(crate) page: PageRequest,
    pub(crate) country: Option<String>,
    pub(crate) include_unavailable: bool,
}

impl SearchConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.candidates, ARG_CANDIDATES)
    }

    fn intent(&self) -> SearchIntent {
        let parsed = parse_intent(&self.query);
        match &self.country {
            Some(country) => parsed.into_builder().with_country(country.as_str()).build(),
            None => parsed,
        }
    }
}

impl TryFrom<SearchArgs> for SearchConfig {
    type Error = CliError;

    fn try_from(args: SearchArgs) -> Result<Self, Self::Error> {
        let candidates = args.candidates.ok_or(CliError::MissingArgument {
            field: ARG_CANDIDATES,
            env: ENV_CANDIDATES,
        })?;
        Ok(Self {
            query: args.query.unwrap_or_default(),
            candidates,
            page: PageRequest::new(args.page, args.per_page),
            country: args.country,
            include_unavailable: args.include_unavailable,
        })
    }
}

fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match crate::fs::file_is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::SourcePathNotFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// One ranked trainer in the response: its fields plus score details.
#[derive(Debug, Serialize)]
pub(crate) struct SearchHit<'a> {
    #[serde(flatten)]
    trainer: &'a Candidate,
    #[serde(rename = "_score")]
    score: u8,
    #[serde(rename = "_breakdown")]
    breakdown: ScoreBreakdown,
}

impl<'a> From<&ScoredCandidate<'a>> for SearchHit<'a> {
    fn from(scored: &ScoredCandidate<'a>) -> Self {
        Self {
            trainer: scored.candidate(),
            score: scored.score(),
            breakdown: scored.breakdown(),
        }
    }
}

/// The `search` command's JSON output.
#[derive(Debug, Serialize)]
pub(crate) struct SearchResponse<'a> {
    data: Vec<SearchHit<'a>>,
    intent: &'a SearchIntent,
    /// Ranked results across all pages.
    count: usize,
    page: u32,
    per_page: u32,
}

pub(crate) fn run_search(args: SearchArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_search_with(args, &mut stdout)
}

pub(crate) fn run_search_with(args: SearchArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = resolve_search_config(args)?;
    let mut roster = load_candidates(&config.candidates)?;
    if !config.include_unavailable {
        roster.retain(|trainer| trainer.is_available);
    }
    let intent = config.intent();
    let ranked = score_and_rank(&intent, &roster);
    let window = config.page.slice(&ranked);
    log::info!(
        "query {:?} matched {} trainers; returning {} on page {}",
        config.query,
        ranked.len(),
        window.len(),
        config.page.page()
    );
    let response = SearchResponse {
        data: window.iter().map(SearchHit::from).collect(),
        intent: &intent,
        count: ranked.len(),
        page: config.page.page(),
        per_page: config.page.per_page(),
    };
    write_json(writer, &response)
}

fn resolve_search_config(args: SearchArgs) -> Result<SearchConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}
