//! # CLI Interface
//!
//! Command-line argument structure for the `tally` binary, via `clap`
//! derive. Four subcommands: `init`, `show`, `run`, and `version`.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::logging::LogFormat;

/// Tally ledger driver.
///
/// Deploys a token ledger from a genesis file and replays operation
/// scripts against it, printing a JSON report of every outcome. Intended
/// for local inspection and scenario testing — the ledger itself is a
/// library; this binary is just a hand crank for it.
#[derive(Parser, Debug)]
#[command(name = "tally", about = "Tally fungible-token ledger driver", version)]
pub struct TallyCli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands for the `tally` binary.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a sample genesis file to get started.
    Init(InitArgs),
    /// Validate a genesis file and print the deployment summary.
    Show(ShowArgs),
    /// Replay an operation script against a fresh deployment.
    Run(RunArgs),
    /// Print version information and exit.
    Version,
}

/// Arguments for the `init` subcommand.
#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Where to write the sample genesis JSON.
    #[arg(long, short = 'o', default_value = "genesis.json")]
    pub out: PathBuf,
}

/// Arguments for the `show` subcommand.
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Path to the genesis JSON file.
    #[arg(long, short = 'g', env = "TALLY_GENESIS", default_value = "genesis.json")]
    pub genesis: PathBuf,
}

/// Arguments for the `run` subcommand.
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Path to the genesis JSON file.
    #[arg(long, short = 'g', env = "TALLY_GENESIS", default_value = "genesis.json")]
    pub genesis: PathBuf,

    /// Path to the operation script (JSON array of operations).
    #[arg(long, short = 's', env = "TALLY_SCRIPT")]
    pub script: PathBuf,

    /// Log output format.
    #[arg(long, value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli_structure() {
        // Ensures the derive macros produce a valid CLI definition.
        TallyCli::command().debug_assert();
    }

    #[test]
    fn run_parses_paths() {
        let cli = TallyCli::parse_from([
            "tally",
            "run",
            "--genesis",
            "g.json",
            "--script",
            "ops.json",
            "--log-format",
            "json",
        ]);
        match cli.command {
            Commands::Run(args) => {
                assert_eq!(args.genesis, PathBuf::from("g.json"));
                assert_eq!(args.script, PathBuf::from("ops.json"));
                assert_eq!(args.log_format, LogFormat::Json);
            }
            other => panic!("expected run, got {other:?}"),
        }
    }
}
