//! Generate command implementation.

use anyhow::{Context, Result};
use rules_index_core::{generate, write_index};
use std::path::Path;

/// Runs the generate command.
pub fn run(manifest_path: Option<&Path>, output: Option<&Path>) -> Result<()> {
    let path = super::resolve_manifest(manifest_path);
    let loaded = rules_index_core::manifest::load_file(&path)
        .with_context(|| format!("Failed to load manifest: {}", path.display()))?;

    let destination = output.map_or(loaded.output, Path::to_path_buf);

    tracing::info!(
        "Rendering {} rules in {} categories",
        loaded.rule_set.rules.len(),
        loaded.rule_set.categories.len()
    );

    let document = generate(&loaded.rule_set);
    write_index(&destination, &document).context("Failed to write rules index")?;

    tracing::info!("Wrote {}", destination.display());
    Ok(())
}
