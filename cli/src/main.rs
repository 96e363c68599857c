// Copyright (c) 2026 Tally Contributors. MIT License.
// See LICENSE for details.

//! # Tally CLI
//!
//! Entry point for the `tally` binary: a thin driver around the
//! `tally-ledger` library for local inspection and scenario testing.
//! It is deliberately not a production host — no signatures, no
//! persistence, no network. It deploys a ledger from a genesis file,
//! replays an operation script, and prints what happened.
//!
//! - `init`    — write a sample genesis file
//! - `show`    — validate a genesis file and print the deployment summary
//! - `run`     — replay an operation script against a fresh deployment
//! - `version` — print build version information

mod cli;
mod logging;
mod script;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;

use tally_ledger::{GenesisConfig, Ledger, Principal};

use cli::{Commands, InitArgs, RunArgs, ShowArgs, TallyCli};
use script::{Operation, StateSummary};

fn main() -> Result<()> {
    let cli = TallyCli::parse();

    match cli.command {
        Commands::Init(args) => init_genesis(&args),
        Commands::Show(args) => show_genesis(&args),
        Commands::Run(args) => run_script(&args),
        Commands::Version => {
            println!("tally {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

/// Writes a starter genesis file the user can edit.
fn init_genesis(args: &InitArgs) -> Result<()> {
    let sample = GenesisConfig {
        name: "Aurum".to_string(),
        symbol: "AUR".to_string(),
        decimals: 6,
        initial_supply: 1_000_000_000_000_000,
        treasury: Principal::new("deployer"),
    };

    let json = serde_json::to_string_pretty(&sample).context("serializing sample genesis")?;
    fs::write(&args.out, json)
        .with_context(|| format!("writing genesis file {}", args.out.display()))?;

    println!("wrote sample genesis to {}", args.out.display());
    Ok(())
}

/// Validates a genesis file and prints the resulting deployment state.
fn show_genesis(args: &ShowArgs) -> Result<()> {
    let genesis = load_genesis(&args.genesis)?;
    let ledger = Ledger::new(genesis).context("genesis rejected")?;

    let summary = StateSummary::capture(&ledger);
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

/// Deploys from genesis, replays the script, prints the report.
fn run_script(args: &RunArgs) -> Result<()> {
    logging::init_logging("tally=info,tally_ledger=info", args.log_format);

    let genesis = load_genesis(&args.genesis)?;
    let mut ledger = Ledger::new(genesis).context("genesis rejected")?;

    let operations = load_script(&args.script)?;
    tracing::info!(
        operations = operations.len(),
        script = %args.script.display(),
        "replaying script"
    );

    let report = script::execute(&mut ledger, &operations)?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

/// Loads and parses a genesis JSON file.
fn load_genesis(path: &Path) -> Result<GenesisConfig> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading genesis file {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing genesis file {}", path.display()))
}

/// Loads and parses an operation script.
fn load_script(path: &Path) -> Result<Vec<Operation>> {
    let raw =
        fs::read_to_string(path).with_context(|| format!("reading script {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing script {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn genesis_file_roundtrip() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "name": "Aurum",
                "symbol": "AUR",
                "decimals": 6,
                "initial_supply": 1000000,
                "treasury": "deployer"
            }}"#
        )
        .unwrap();

        let genesis = load_genesis(file.path()).unwrap();
        assert_eq!(genesis.symbol, "AUR");
        assert_eq!(genesis.initial_supply, 1_000_000);
        assert_eq!(genesis.treasury, Principal::new("deployer"));
    }

    #[test]
    fn missing_genesis_reports_path() {
        let err = load_genesis(Path::new("/no/such/genesis.json")).unwrap_err();
        assert!(err.to_string().contains("/no/such/genesis.json"));
    }

    #[test]
    fn script_file_parses() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{ "op": "mint", "caller": "deployer", "amount": 5, "to": "wallet_1" }}]"#
        )
        .unwrap();

        let ops = load_script(file.path()).unwrap();
        assert_eq!(ops.len(), 1);
        assert_eq!(ops[0].name(), "mint");
    }
}
