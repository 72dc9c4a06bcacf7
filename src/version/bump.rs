//! Semver bump arithmetic.

use clap::ValueEnum;
use semver::Version;

use crate::error::VersionError;

/// Which version component to increment.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BumpKind {
    /// x.y.z -> x.y.z+1
    Patch,
    /// x.y.z -> x.y+1.0
    Minor,
    /// x.y.z -> x+1.0.0
    Major,
}

/// Parse a plain `major.minor.patch` version string.
///
/// Pre-release and build-metadata suffixes are rejected: the bump rules are
/// only defined over the three numeric components.
pub fn parse_version(input: &str) -> Result<Version, VersionError> {
    let version =
        Version::parse(input).map_err(|e| VersionError::ParseFailed(input.to_string(), e))?;

    if !version.pre.is_empty() || !version.build.is_empty() {
        return Err(VersionError::UnsupportedSuffix(input.to_string()));
    }

    Ok(version)
}

/// Compute the next version for a bump kind.
///
/// - `patch` increments patch
/// - `minor` increments minor and resets patch
/// - `major` increments major and resets minor and patch
pub fn apply_bump(kind: BumpKind, current: &Version) -> Version {
    match kind {
        BumpKind::Major => Version::new(current.major + 1, 0, 0),
        BumpKind::Minor => Version::new(current.major, current.minor + 1, 0),
        BumpKind::Patch => Version::new(current.major, current.minor, current.patch + 1),
    }
}
