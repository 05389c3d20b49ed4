//! Manifest file resolution
//!
//! A path argument that is already a file is used as-is. A directory is
//! walked recursively: legacy `packages.config` files are preferred; only
//! when none exist does the search fall back to modern `*.csproj` files.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{CliError, Result};

/// Resolve the source argument to exactly one manifest file.
pub fn resolve_source(path: &Path) -> Result<PathBuf> {
    let mut found = resolve(path)?;
    if found.len() > 1 {
        return Err(CliError::user(format!(
            "source directory {} contains {} manifests; pass a single file",
            path.display(),
            found.len()
        )));
    }
    Ok(found.remove(0))
}

/// Resolve a target argument to one or more manifest files.
pub fn resolve_targets(path: &Path) -> Result<Vec<PathBuf>> {
    resolve(path)
}

fn resolve(path: &Path) -> Result<Vec<PathBuf>> {
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }
    if !path.is_dir() {
        return Err(CliError::user(format!(
            "path does not exist: {}",
            path.display()
        )));
    }

    let mut legacy = Vec::new();
    let mut modern = Vec::new();

    for entry in WalkDir::new(path).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy();
        if name.eq_ignore_ascii_case("packages.config") {
            legacy.push(entry.path().to_path_buf());
        } else if name.to_ascii_lowercase().ends_with(".csproj") {
            modern.push(entry.path().to_path_buf());
        }
    }

    tracing::debug!(
        dir = %path.display(),
        legacy = legacy.len(),
        modern = modern.len(),
        "resolved manifests"
    );

    if !legacy.is_empty() {
        Ok(legacy)
    } else if !modern.is_empty() {
        Ok(modern)
    } else {
        Err(CliError::NotFound {
            dir: path.to_path_buf(),
        })
    }
}
