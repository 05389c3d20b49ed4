//! The reconciliation engine
//!
//! Two-phase: a plan of intended changes is always computed; writes happen
//! only when the caller has confirmed. Each target is processed on its own,
//! so one target's write failure never blocks the rest.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::document::ManifestDocument;
use crate::package::PackageMap;

/// One applied (or planned) version overwrite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionChange {
    pub id: String,
    pub old: String,
    pub new: String,
}

impl std::fmt::Display for VersionChange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {} -> {}", self.id, self.old, self.new)
    }
}

/// Whether a target's changes reached disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum WriteStatus {
    /// Plan only; nothing written (caller did not confirm).
    Planned,
    /// Changes applied and persisted to the target's own path.
    Written,
    /// The write failed; the target file is unchanged on disk.
    Failed { message: String },
}

/// Outcome for a single target manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetReport {
    pub path: PathBuf,
    /// Changes in document-encounter order.
    pub changes: Vec<VersionChange>,
    pub status: WriteStatus,
}

impl TargetReport {
    pub fn change_count(&self) -> usize {
        self.changes.len()
    }
}

/// Reconcile each target against the source map.
///
/// A target entry is overwritten when its id exists in the source with a
/// differing version string; entries on either side without a counterpart
/// are left untouched, and no entry is ever inserted or removed. Running
/// the engine against its own output plans zero changes.
///
/// Outcomes are reported per target, in the caller-supplied order; a
/// failed save is carried in that target's `WriteStatus` and the
/// remaining targets still run.
pub fn reconcile(
    source: &PackageMap,
    targets: &mut [ManifestDocument],
    confirmed: bool,
) -> Vec<TargetReport> {
    targets
        .iter_mut()
        .map(|doc| reconcile_target(source, doc, confirmed))
        .collect()
}

fn reconcile_target(
    source: &PackageMap,
    doc: &mut ManifestDocument,
    confirmed: bool,
) -> TargetReport {
    let path = doc.path().to_path_buf();

    let changes: Vec<VersionChange> = doc
        .packages()
        .iter()
        .filter_map(|entry| {
            source
                .get(&entry.id)
                .filter(|src| src.version != entry.version)
                .map(|src| VersionChange {
                    id: entry.id.clone(),
                    old: entry.version.clone(),
                    new: src.version.clone(),
                })
        })
        .collect();

    if !confirmed {
        tracing::debug!(path = %path.display(), planned = changes.len(), "plan only");
        return TargetReport {
            path,
            changes,
            status: WriteStatus::Planned,
        };
    }

    for change in &changes {
        if let Err(e) = doc.set_version(&change.id, &change.new) {
            // Unreachable through the plan above; surfaced rather than lost.
            return TargetReport {
                path,
                changes,
                status: WriteStatus::Failed {
                    message: e.to_string(),
                },
            };
        }
    }

    let status = match doc.save() {
        Ok(()) => {
            tracing::debug!(path = %path.display(), applied = changes.len(), "saved target");
            WriteStatus::Written
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "failed to save target");
            WriteStatus::Failed {
                message: e.to_string(),
            }
        }
    };

    TargetReport {
        path,
        changes,
        status,
    }
}
