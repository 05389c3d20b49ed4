//! Difference analysis between one source manifest and N targets
//!
//! Classification is returned as plain data so a boundary renderer can
//! choose colors, tables, or machine-readable output without the core
//! knowing about presentation.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::package::PackageMap;
use crate::version;

/// Classification of one source package against one target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiffStatus {
    Equal,
    Different,
    MissingFromTarget,
}

/// One target's view of a source package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetCell {
    pub status: DiffStatus,
    /// The target's declared version, absent when the package is missing.
    pub version: Option<String>,
}

/// A source package with its per-target classifications, in target order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageDiff {
    pub id: String,
    pub source_version: String,
    pub targets: Vec<TargetCell>,
}

/// A package declared by a target but absent from the source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtraPackage {
    pub id: String,
    pub version: String,
}

/// Result of comparing a source package map against N targets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffReport {
    /// Source packages in source insertion order.
    pub packages: Vec<PackageDiff>,
    /// Per target, packages present there but missing from the source,
    /// in that target's insertion order. Indexes align with the target
    /// order given to `analyze`.
    pub missing_from_source: Vec<Vec<ExtraPackage>>,
    /// True iff at least one cell is `Different`. Missing packages on
    /// either side never set this.
    pub has_differences: bool,
}

/// Classify every package across the source and each target.
///
/// # Errors
///
/// `InvalidVersionFormat` if any pair of versions that are actually
/// compared fails to parse; packages missing from one side are never
/// compared, so they cannot raise it.
pub fn analyze(source: &PackageMap, targets: &[&PackageMap]) -> Result<DiffReport> {
    let mut packages = Vec::with_capacity(source.len());
    let mut has_differences = false;

    for entry in source {
        let mut cells = Vec::with_capacity(targets.len());
        for target in targets {
            let cell = match target.get(&entry.id) {
                None => TargetCell {
                    status: DiffStatus::MissingFromTarget,
                    version: None,
                },
                Some(found) => {
                    let status = if version::compare(&entry.version, &found.version)?
                        == Ordering::Equal
                    {
                        DiffStatus::Equal
                    } else {
                        has_differences = true;
                        DiffStatus::Different
                    };
                    TargetCell {
                        status,
                        version: Some(found.version.clone()),
                    }
                }
            };
            cells.push(cell);
        }
        packages.push(PackageDiff {
            id: entry.id.clone(),
            source_version: entry.version.clone(),
            targets: cells,
        });
    }

    let missing_from_source = targets
        .iter()
        .map(|target| {
            target
                .iter()
                .filter(|e| !source.contains(&e.id))
                .map(|e| ExtraPackage {
                    id: e.id.clone(),
                    version: e.version.clone(),
                })
                .collect()
        })
        .collect();

    tracing::debug!(
        source_packages = source.len(),
        targets = targets.len(),
        has_differences,
        "analyzed manifests"
    );

    Ok(DiffReport {
        packages,
        missing_from_source,
        has_differences,
    })
}
