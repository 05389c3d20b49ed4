//! Interactive prompts for CLI commands
//!
//! Uses dialoguer for terminal-based confirmation.

use std::path::Path;

use dialoguer::Confirm;

use crate::error::Result;
use crate::report::column_label;

/// Ask whether to overwrite the targets' versions with the source's.
pub fn confirm_apply(source: &Path, target_count: usize) -> Result<bool> {
    let confirmed = Confirm::new()
        .with_prompt(format!(
            "Apply versions from {} to {} target manifest(s)?",
            column_label(source),
            target_count
        ))
        .default(false)
        .interact()?;
    Ok(confirmed)
}
