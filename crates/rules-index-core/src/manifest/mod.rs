//! Manifest loading driven by TOML configuration.
//!
//! The manifest declares the plugin name, category definitions, and rule
//! metadata the generator consumes.
//!
//! # Architecture
//!
//! ```text
//! TOML text
//!   ↓ serde (DTO layer)
//! dto types
//!   ↓ validate + convert
//! RuleSet (pure domain model)
//! ```

use std::path::{Path, PathBuf};

use crate::model::RuleSet;

pub mod dto;
pub mod loader;

/// Default manifest file name.
pub const DEFAULT_MANIFEST: &str = "rules-index.toml";

/// Default destination for the generated document.
pub const DEFAULT_OUTPUT: &str = "docs/rules/README.md";

/// A loaded manifest: the validated rule set plus the output destination.
#[derive(Debug)]
pub struct Manifest {
    /// The validated rule set.
    pub rule_set: RuleSet,
    /// Destination path for the generated document.
    pub output: PathBuf,
}

/// Errors from reading, parsing, and loading the manifest.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    /// IO error reading the manifest file.
    #[error("Failed to read manifest {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// TOML deserialization failed.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Domain model validation failed.
    #[error("{0}")]
    Load(#[from] loader::LoadError),
}

/// Loads and validates a manifest from `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be read, the TOML is invalid, or
/// validation fails.
pub fn load_file(path: &Path) -> Result<Manifest, ManifestError> {
    let content = std::fs::read_to_string(path).map_err(|source| ManifestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!("Loaded manifest from {}", path.display());
    parse(&content)
}

/// Parses and validates manifest TOML content.
///
/// # Errors
///
/// Returns an error if the TOML is invalid or validation fails.
pub fn parse(content: &str) -> Result<Manifest, ManifestError> {
    let dto: dto::ManifestDto = toml::from_str(content)?;
    Ok(loader::load(dto)?)
}
