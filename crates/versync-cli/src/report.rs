//! Change report rendering
//!
//! Pure presentation over the core's structured results. Every cell carries
//! a textual status tag alongside its color, so piped output stays
//! unambiguous, and `--json` emits the same data machine-readably.

use std::path::{Path, PathBuf};

use colored::{ColoredString, Colorize};
use serde_json::json;

use versync_core::{DiffReport, DiffStatus, TargetReport, WriteStatus};

/// Column label for a manifest: its parent directory's name, as a project
/// is usually identified by its folder rather than its manifest filename.
pub fn column_label(path: &Path) -> String {
    path.parent()
        .and_then(|p| p.file_name())
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn status_tag(status: DiffStatus) -> &'static str {
    match status {
        DiffStatus::Equal => "equal",
        DiffStatus::Different => "different",
        DiffStatus::MissingFromTarget => "missing_from_target",
    }
}

fn cell_text(version: Option<&str>, status: DiffStatus) -> ColoredString {
    let text = match version {
        Some(v) => format!("{v} ({})", status_tag(status)),
        None => format!("missing ({})", status_tag(status)),
    };
    match status {
        DiffStatus::Equal => text.green(),
        DiffStatus::Different => text.red(),
        DiffStatus::MissingFromTarget => text.normal(),
    }
}

/// Print the comparison table.
pub fn print_table(report: &DiffReport, source: &Path, targets: &[PathBuf]) {
    let mut header = format!("| Package | {} |", column_label(source));
    for target in targets {
        header.push_str(&format!(" {} |", column_label(target)));
    }
    println!("{header}");
    println!("{}", "-".repeat(header.len()));

    for pkg in &report.packages {
        let mut row = format!("| {} | {} |", pkg.id, pkg.source_version);
        for cell in &pkg.targets {
            row.push_str(&format!(" {} |", cell_text(cell.version.as_deref(), cell.status)));
        }
        println!("{row}");
    }

    for (idx, extras) in report.missing_from_source.iter().enumerate() {
        for extra in extras {
            let mut row = format!(
                "| {} | {} |",
                extra.id,
                "missing (missing_from_source)".normal()
            );
            for target_idx in 0..targets.len() {
                if target_idx == idx {
                    row.push_str(&format!(" {} |", extra.version));
                } else {
                    row.push_str(" - |");
                }
            }
            println!("{row}");
        }
    }
}

/// Print per-target reconciliation outcomes.
pub fn print_outcomes(outcomes: &[TargetReport]) {
    for outcome in outcomes {
        match &outcome.status {
            WriteStatus::Planned => {
                println!(
                    "{} {} package(s) would change in {}",
                    "plan".yellow().bold(),
                    outcome.change_count(),
                    outcome.path.display()
                );
            }
            WriteStatus::Written => {
                println!(
                    "{} {} package(s) changed in {}",
                    "ok".green().bold(),
                    outcome.change_count(),
                    outcome.path.display()
                );
            }
            WriteStatus::Failed { message } => {
                println!(
                    "{} {}: {}",
                    "failed".red().bold(),
                    outcome.path.display(),
                    message
                );
            }
        }
        for change in &outcome.changes {
            println!("  {change}");
        }
    }
}

/// Assemble the full machine-readable run result.
pub fn json_output(
    source: &Path,
    targets: &[PathBuf],
    report: &DiffReport,
    outcomes: &[TargetReport],
) -> serde_json::Value {
    json!({
        "source": source.display().to_string(),
        "targets": targets
            .iter()
            .map(|t| t.display().to_string())
            .collect::<Vec<_>>(),
        "has_differences": report.has_differences,
        "report": report,
        "reconcile": outcomes,
    })
}
