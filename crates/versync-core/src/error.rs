//! Error types for versync-core

use std::path::PathBuf;

/// Result type for versync-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while parsing, comparing, or reconciling manifests
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to parse {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    #[error("Unrecognized manifest schema in {}: {message}", path.display())]
    Schema { path: PathBuf, message: String },

    #[error("Package '{id}' in {} has no version element or attribute", path.display())]
    MissingVersion { path: PathBuf, id: String },

    #[error("Duplicate package id '{id}' in {}", path.display())]
    DuplicateId { path: PathBuf, id: String },

    #[error("Invalid version format '{version}': {message}")]
    InvalidVersionFormat { version: String, message: String },

    #[error("Package '{id}' not found in {}", path.display())]
    PackageNotFound { path: PathBuf, id: String },

    #[error("Failed to write {}: {message}", path.display())]
    Write { path: PathBuf, message: String },

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub fn parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn schema(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Schema {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn write(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        Self::Write {
            path: path.into(),
            message: message.to_string(),
        }
    }
}
