//! Read-modify-write of `package.version` in Cargo.toml.
//!
//! Edits are format preserving: `toml_edit` keeps every other key, comment,
//! and piece of whitespace in the manifest byte-for-byte.

use std::io::Write;
use std::path::Path;

use semver::Version;
use tempfile::NamedTempFile;
use toml_edit::DocumentMut;
use tracing::debug;

use crate::error::ManifestError;
use crate::version::{BumpKind, apply_bump, parse_version};

/// Conventional manifest location, relative to the working directory.
pub const MANIFEST_PATH: &str = "Cargo.toml";

/// Result of a successful version update.
#[derive(Debug, Clone)]
pub struct UpdateOutcome {
    pub previous: Version,
    pub next: Version,
}

/// Bump `package.version` in the manifest at `path`.
///
/// Reads the manifest, computes the next version, and rewrites the file in
/// place. The write goes through a temp file and atomic rename, so a failed
/// write never leaves a truncated manifest behind.
pub fn update_manifest(path: &Path, kind: BumpKind) -> Result<UpdateOutcome, ManifestError> {
    let content = read_manifest(path)?;
    let mut doc = parse_toml(path, &content)?;

    let previous = package_version(&doc, path)?;
    let next = apply_bump(kind, &previous);

    doc["package"]["version"] = toml_edit::value(next.to_string());

    debug!("writing {}", path.display());
    write_atomic(path, &doc.to_string())?;

    Ok(UpdateOutcome { previous, next })
}

/// Read the current `package.version` without modifying the manifest.
pub fn read_version(path: &Path) -> Result<Version, ManifestError> {
    let content = read_manifest(path)?;
    let doc = parse_toml(path, &content)?;
    package_version(&doc, path)
}

fn read_manifest(path: &Path) -> Result<String, ManifestError> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(content),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(ManifestError::NotFound {
            path: path.to_path_buf(),
        }),
        Err(e) => Err(ManifestError::ReadFailed {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

fn parse_toml(path: &Path, content: &str) -> Result<DocumentMut, ManifestError> {
    content
        .parse::<DocumentMut>()
        .map_err(|source| ManifestError::ParseFailed {
            path: path.to_path_buf(),
            source,
        })
}

fn package_version(doc: &DocumentMut, path: &Path) -> Result<Version, ManifestError> {
    let package = doc.get("package").ok_or_else(|| ManifestError::MissingPackage {
        path: path.to_path_buf(),
    })?;

    // TOML parsing already strips the surrounding quotes.
    let version_str = package
        .get("version")
        .and_then(|v| v.as_str())
        .ok_or_else(|| ManifestError::MissingVersion {
            path: path.to_path_buf(),
        })?;

    let version = parse_version(version_str).map_err(|source| ManifestError::InvalidVersion {
        path: path.to_path_buf(),
        source,
    })?;

    debug!("read version {} from {}", version, path.display());
    Ok(version)
}

/// Write `content` to `path` via a temp file in the same directory and an
/// atomic rename over the target.
fn write_atomic(path: &Path, content: &str) -> Result<(), ManifestError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let write_err = |source: std::io::Error| ManifestError::WriteFailed {
        path: path.to_path_buf(),
        source,
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
    tmp.write_all(content.as_bytes()).map_err(write_err)?;
    tmp.persist(path).map_err(|e| write_err(e.error))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn test_read_version() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Cargo.toml");
        fs::write(&path, "[package]\nname = \"test\"\nversion = \"1.2.3\"\n").unwrap();

        let version = read_version(&path).unwrap();
        assert_eq!(version, Version::new(1, 2, 3));
    }

    #[test]
    fn test_update_rewrites_version_in_place() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Cargo.toml");
        fs::write(&path, "[package]\nname = \"test\"\nversion = \"1.2.3\"\n").unwrap();

        let outcome = update_manifest(&path, BumpKind::Patch).unwrap();
        assert_eq!(outcome.previous, Version::new(1, 2, 3));
        assert_eq!(outcome.next, Version::new(1, 2, 4));

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("version = \"1.2.4\""));
    }

    #[test]
    fn test_update_preserves_formatting() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Cargo.toml");
        fs::write(
            &path,
            "[package]\nname = \"test\"\n# version comment\nversion = \"1.0.0\"\nedition = \"2024\"\n",
        )
        .unwrap();

        update_manifest(&path, BumpKind::Major).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("version = \"2.0.0\""));
        assert!(content.contains("# version comment"));
        assert!(content.contains("edition = \"2024\""));
    }

    #[test]
    fn test_missing_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Cargo.toml");

        let result = update_manifest(&path, BumpKind::Patch);
        assert!(matches!(result, Err(ManifestError::NotFound { .. })));
    }

    #[test]
    fn test_missing_package_section() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Cargo.toml");
        fs::write(&path, "[dependencies]\nserde = \"1\"\n").unwrap();

        let result = update_manifest(&path, BumpKind::Patch);
        assert!(matches!(result, Err(ManifestError::MissingPackage { .. })));
    }

    #[test]
    fn test_missing_version_key() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Cargo.toml");
        fs::write(&path, "[package]\nname = \"test\"\n").unwrap();

        let result = update_manifest(&path, BumpKind::Patch);
        assert!(matches!(result, Err(ManifestError::MissingVersion { .. })));
    }

    #[test]
    fn test_inherited_workspace_version_is_not_a_string() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Cargo.toml");
        fs::write(
            &path,
            "[package]\nname = \"test\"\nversion.workspace = true\n",
        )
        .unwrap();

        let result = update_manifest(&path, BumpKind::Patch);
        assert!(matches!(result, Err(ManifestError::MissingVersion { .. })));
    }

    #[test]
    fn test_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Cargo.toml");
        fs::write(&path, "[package\nversion = \"1.0.0\"\n").unwrap();

        let result = update_manifest(&path, BumpKind::Patch);
        assert!(matches!(result, Err(ManifestError::ParseFailed { .. })));
    }

    #[test]
    fn test_prerelease_version_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Cargo.toml");
        let original = "[package]\nname = \"test\"\nversion = \"1.2.3-alpha.1\"\n";
        fs::write(&path, original).unwrap();

        let result = update_manifest(&path, BumpKind::Patch);
        assert!(matches!(result, Err(ManifestError::InvalidVersion { .. })));

        // Failure leaves the manifest untouched.
        assert_eq!(fs::read_to_string(&path).unwrap(), original);
    }
}
