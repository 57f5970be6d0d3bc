//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use log::LevelFilter;

#[expect(
    clippy::print_stderr,
    reason = "the binary reports fatal errors on stderr"
)]
fn main() {
    env_logger::builder()
        .filter_level(LevelFilter::Warn)
        .parse_default_env()
        .init();
    if let Err(err) = trainer_search_cli::run() {
        eprintln!("trainer-search: {err}");
        std::process::exit(1);
    }
}
