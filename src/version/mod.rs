//! Version parsing and semver bumping.

pub mod bump;

pub use bump::{BumpKind, apply_bump, parse_version};
