//! Writing the generated document to its destination.

use std::path::{Path, PathBuf};

/// Errors when writing the rules index file.
#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    /// Failed to create the destination directory.
    #[error("Failed to create directory {path}: {source}")]
    CreateDir {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Failed to write the index file.
    #[error("Failed to write rules index {path}: {source}")]
    Io {
        /// Path that failed to write.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },
}

/// Writes the fully rendered document to `path`, replacing any existing
/// content. Missing parent directories are created.
///
/// The document is already buffered in memory and written with a single
/// call, so a failure does not leave partially written output from this
/// process.
///
/// # Errors
///
/// Returns a [`WriteError`] if the directory cannot be created or the file
/// cannot be written.
pub fn write_index(path: &Path, document: &str) -> Result<(), WriteError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|source| WriteError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }

    std::fs::write(path, document).map_err(|source| WriteError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!("Wrote {} bytes to {}", document.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_replaces_existing_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("README.md");

        std::fs::write(&path, "stale content").unwrap();
        write_index(&path, "# Available rules\n").unwrap();

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "# Available rules\n"
        );
    }

    #[test]
    fn write_creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("docs/rules/README.md");

        write_index(&path, "generated").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "generated");
    }

    #[test]
    fn write_failure_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        // A directory at the destination path makes the write fail.
        let path = dir.path().join("README.md");
        std::fs::create_dir(&path).unwrap();

        let err = write_index(&path, "generated").unwrap_err();
        assert!(err.to_string().contains("README.md"));
    }
}
