//! CLI command implementations.

use rules_index_core::manifest;
use std::path::{Path, PathBuf};

pub mod generate;
pub mod init;
pub mod list_rules;

/// Resolves the manifest path: explicit flag, or the default file name in
/// the current directory.
pub(crate) fn resolve_manifest(path: Option<&Path>) -> PathBuf {
    path.map_or_else(|| PathBuf::from(manifest::DEFAULT_MANIFEST), Path::to_path_buf)
}
