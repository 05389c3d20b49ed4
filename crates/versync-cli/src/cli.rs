//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::Parser;

/// versync - Compare and reconcile dependency versions across manifests
///
/// Compares the packages declared by a source manifest against one or more
/// targets, then optionally overwrites the targets' versions with the
/// source's. Only version values change; everything else in the target
/// files is preserved byte for byte.
#[derive(Parser, Debug)]
#[command(name = "versync")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Source manifest: a file, or a directory containing exactly one
    /// manifest (packages.config preferred over *.csproj)
    pub source: PathBuf,

    /// Target manifests: files, or directories to search
    #[arg(required = true)]
    pub targets: Vec<PathBuf>,

    /// Apply the source versions without prompting
    #[arg(short, long)]
    pub yes: bool,

    /// Output as JSON for scripting (never prompts; writes only with --yes)
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
