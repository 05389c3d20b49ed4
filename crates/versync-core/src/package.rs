//! Package entries and the insertion-ordered package map

use std::ops::Range;
use std::path::Path;

use crate::error::{Error, Result};

/// One declared dependency extracted from a manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageEntry {
    /// Package id, e.g. `Newtonsoft.Json`.
    pub id: String,
    /// Declared version string, verbatim from the document.
    pub version: String,
    /// Byte range of the version value in the owning document's source.
    /// Points at the nested version element's text when one exists,
    /// otherwise at the version attribute's value.
    pub(crate) span: Range<usize>,
}

impl PackageEntry {
    pub(crate) fn new(id: impl Into<String>, version: impl Into<String>, span: Range<usize>) -> Self {
        Self {
            id: id.into(),
            version: version.into(),
            span,
        }
    }
}

/// Insertion-ordered map of package id to entry.
///
/// Iteration order is document-encounter order. Inserting an id that is
/// already present is a hard error rather than a silent overwrite.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageMap {
    entries: Vec<PackageEntry>,
}

impl PackageMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, failing with `DuplicateId` if the id is taken.
    ///
    /// `path` is only used for error context.
    pub fn insert(&mut self, entry: PackageEntry, path: &Path) -> Result<()> {
        if self.contains(&entry.id) {
            return Err(Error::DuplicateId {
                path: path.to_path_buf(),
                id: entry.id,
            });
        }
        self.entries.push(entry);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&PackageEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Entries in document-encounter order.
    pub fn iter(&self) -> impl Iterator<Item = &PackageEntry> {
        self.entries.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut PackageEntry> {
        self.entries.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a PackageMap {
    type Item = &'a PackageEntry;
    type IntoIter = std::slice::Iter<'a, PackageEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
