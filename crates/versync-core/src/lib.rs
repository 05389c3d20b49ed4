//! Manifest version reconciliation for versync
//!
//! Parses NuGet-style dependency manifests of two schemas into a uniform
//! package-version model, compares one source manifest against any number of
//! targets, and applies in-place, structure-preserving version updates.

pub mod diff;
pub mod document;
pub mod error;
pub mod io;
pub mod package;
pub mod reconcile;
pub mod schema;
pub mod version;

pub use diff::{DiffReport, DiffStatus, ExtraPackage, PackageDiff, TargetCell, analyze};
pub use document::ManifestDocument;
pub use error::{Error, Result};
pub use package::{PackageEntry, PackageMap};
pub use reconcile::{TargetReport, VersionChange, WriteStatus, reconcile};
pub use schema::Schema;
