//! versync CLI
//!
//! Compares dependency versions across project manifests and optionally
//! propagates the source manifest's versions onto the targets.

mod cli;
mod error;
mod interactive;
mod locate;
mod report;

use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use versync_core::{ManifestDocument, PackageMap, analyze, reconcile};

use cli::Cli;
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    // Locate-time failures abort before any report is produced.
    let source_path = locate::resolve_source(&cli.source)?;
    let mut target_paths: Vec<PathBuf> = Vec::new();
    for target in &cli.targets {
        target_paths.extend(locate::resolve_targets(target)?);
    }

    // So do parse-time failures: an unreadable manifest on either side
    // invalidates the whole comparison.
    let source = ManifestDocument::load(&source_path)?;
    let mut targets = target_paths
        .iter()
        .map(ManifestDocument::load)
        .collect::<versync_core::Result<Vec<_>>>()?;

    let target_maps: Vec<&PackageMap> = targets.iter().map(|d| d.packages()).collect();
    let diff = analyze(source.packages(), &target_maps)?;

    if !cli.json {
        report::print_table(&diff, &source_path, &target_paths);
        println!();
        if !diff.has_differences {
            println!("{} All matching packages are in sync.", "ok".green().bold());
        }
    }

    let confirmed = diff.has_differences
        && (cli.yes
            || (!cli.json && interactive::confirm_apply(&source_path, targets.len())?));

    let outcomes = reconcile(source.packages(), &mut targets, confirmed);

    if cli.json {
        let value = report::json_output(&source_path, &target_paths, &diff, &outcomes);
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else if diff.has_differences {
        report::print_outcomes(&outcomes);
    }

    Ok(())
}
