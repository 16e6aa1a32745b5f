//! Command-line interface for querying the mobile food permit dataset.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod dataset;
mod error;
mod geosearch;
mod suggest;

pub use error::CliError;

use geosearch::{GeosearchArgs, run_geosearch};
use suggest::{SuggestArgs, run_suggest};

const ARG_DATA: &str = "data";
const ARG_LAT: &str = "lat";
const ARG_LNG: &str = "lng";
const ARG_RADIUS: &str = "radius";
const ARG_KEY: &str = "key";
const ARG_VALUE: &str = "value";
const ARG_FIELD: &str = "field";
const ENV_GEOSEARCH_LAT: &str = "FOODPERMIT_CMDS_GEOSEARCH_LAT";
const ENV_GEOSEARCH_LNG: &str = "FOODPERMIT_CMDS_GEOSEARCH_LNG";
const ENV_GEOSEARCH_RADIUS: &str = "FOODPERMIT_CMDS_GEOSEARCH_RADIUS";
const ENV_SUGGEST_KEY: &str = "FOODPERMIT_CMDS_SUGGEST_KEY";

/// Log level used when `RUST_LOG` is unset or invalid.
const DEFAULT_LOG_FILTER: &str = "warn";

/// Run the food permit CLI with the current process arguments and
/// environment, writing results to standard output.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    init_logging();
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    match cli.command {
        Command::Geosearch(args) => run_geosearch(args, &mut handle),
        Command::Suggest(args) => run_suggest(args, &mut handle),
    }
}

/// Route `log` records to stderr so stdout stays pure JSON.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    // A subscriber may already be installed when embedded; keep it.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .ok();
}

#[derive(Debug, Parser)]
#[command(
    name = "foodpermit",
    about = "Query mobile food facility permits by location or field prefix",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List permits within a radius of a point.
    Geosearch(GeosearchArgs),
    /// Suggest field values that start with a prefix.
    Suggest(SuggestArgs),
}

#[cfg(test)]
mod tests;
