//! sembump - A CLI tool that bumps the semantic version declared in Cargo.toml.
//!
//! # Overview
//!
//! sembump reads `package.version` from the manifest in the current working
//! directory, increments the requested component (major, minor, or patch) per
//! semantic-versioning rules, and rewrites the manifest in place. Every other
//! key, comment, and piece of whitespace is preserved byte-for-byte.

pub mod error;
pub mod manifest;
pub mod version;

// Re-export commonly used types
pub use error::{ManifestError, VersionError};
pub use manifest::{MANIFEST_PATH, UpdateOutcome};
pub use version::BumpKind;
