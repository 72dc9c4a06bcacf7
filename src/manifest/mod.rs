//! Manifest read/update for the package version.

pub mod update;

pub use update::{MANIFEST_PATH, UpdateOutcome, read_version, update_manifest};
