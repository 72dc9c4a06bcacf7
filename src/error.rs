//! Error types for sembump modules using thiserror.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from version parsing and bump arithmetic.
#[derive(Error, Debug)]
pub enum VersionError {
    #[error("Failed to parse version '{0}': {1}")]
    ParseFailed(String, #[source] semver::Error),

    #[error(
        "Version '{0}' has a pre-release or build suffix; expected a plain major.minor.patch triple"
    )]
    UnsupportedSuffix(String),
}

/// Errors from manifest read/update operations.
#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("Manifest not found at {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to read {}: {source}", path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid TOML in {}: {source}", path.display())]
    ParseFailed {
        path: PathBuf,
        #[source]
        source: toml_edit::TomlError,
    },

    #[error("No [package] section in {}", path.display())]
    MissingPackage { path: PathBuf },

    #[error("No version key in the [package] section of {}", path.display())]
    MissingVersion { path: PathBuf },

    #[error("Invalid version in {}: {source}", path.display())]
    InvalidVersion {
        path: PathBuf,
        #[source]
        source: VersionError,
    },

    #[error("Failed to write {}: {source}", path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
