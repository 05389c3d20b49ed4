//! The parsed, mutable manifest document

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::io;
use crate::package::PackageMap;
use crate::schema::{self, Schema};

/// A parsed dependency manifest.
///
/// Owns the full source text plus the package map extracted from it. Each
/// entry carries the byte span of its version value, so `set_version`
/// rewrites exactly that value and nothing else: unrelated content,
/// ordering, and attributes survive byte for byte.
#[derive(Debug, Clone)]
pub struct ManifestDocument {
    path: PathBuf,
    source: String,
    schema: Schema,
    packages: PackageMap,
    modified: bool,
}

impl ManifestDocument {
    /// Read and parse the manifest at `path`.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let source = fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
        Self::from_source(source, path)
    }

    /// Parse manifest text. `path` is kept for error context and save.
    pub fn from_source(source: String, path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        let doc = roxmltree::Document::parse(&source)
            .map_err(|e| Error::parse(&path, e.to_string()))?;

        let root_name = doc.root_element().tag_name().name();
        let schema = Schema::detect(root_name).ok_or_else(|| {
            Error::schema(&path, format!("unrecognized root element '{root_name}'"))
        })?;

        let mut packages = PackageMap::new();
        for entry in schema::extract(schema, &doc, &source, &path)? {
            packages.insert(entry, &path)?;
        }
        drop(doc);

        tracing::debug!(
            path = %path.display(),
            schema = %schema,
            packages = packages.len(),
            "parsed manifest"
        );

        Ok(Self {
            path,
            source,
            schema,
            packages,
            modified: false,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn schema(&self) -> Schema {
        self.schema
    }

    /// Current source text, including any applied version edits.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn packages(&self) -> &PackageMap {
        &self.packages
    }

    /// Whether any version has been changed since parse.
    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// Overwrite one package's version value in place.
    ///
    /// Splices the new value into the span recorded at parse time and
    /// shifts the spans of entries that follow it. Setting the version a
    /// package already has is a no-op.
    pub fn set_version(&mut self, id: &str, version: &str) -> Result<()> {
        let entry = self.packages.get(id).ok_or_else(|| Error::PackageNotFound {
            path: self.path.clone(),
            id: id.to_string(),
        })?;

        if entry.version == version {
            return Ok(());
        }
        let span = entry.span.clone();

        self.source.replace_range(span.clone(), version);
        let delta = version.len() as isize - span.len() as isize;

        for e in self.packages.iter_mut() {
            if e.span.start == span.start {
                e.version = version.to_string();
                e.span = span.start..span.start + version.len();
            } else if e.span.start >= span.end {
                let start = (e.span.start as isize + delta) as usize;
                let end = (e.span.end as isize + delta) as usize;
                e.span = start..end;
            }
        }

        self.modified = true;
        tracing::debug!(id, version, path = %self.path.display(), "set package version");
        Ok(())
    }

    /// Write the document back to its own path.
    pub fn save(&self) -> Result<()> {
        io::write_atomic(&self.path, self.source.as_bytes())
    }
}
