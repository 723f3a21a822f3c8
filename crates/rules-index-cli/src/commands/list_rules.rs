//! List rules command implementation.

use anyhow::{Context, Result};
use std::path::Path;

use crate::OutputFormat;

/// Runs the list-rules command.
pub fn run(manifest_path: Option<&Path>, format: OutputFormat) -> Result<()> {
    let path = super::resolve_manifest(manifest_path);
    let loaded = rules_index_core::manifest::load_file(&path)
        .with_context(|| format!("Failed to load manifest: {}", path.display()))?;
    let set = &loaded.rule_set;

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(set)?;
            println!("{json}");
        }
        OutputFormat::Text => {
            println!("Rules for plugin `{}`:\n", set.plugin);
            println!("{:<30} {:<16} {:<18} Description", "Name", "Category", "Marks");
            println!("{}", "-".repeat(90));

            for rule in &set.rules {
                let marks = format!(
                    "{}{}",
                    if rule.fixable { ":wrench:" } else { "" },
                    if rule.deprecated { ":warning:" } else { "" },
                );
                println!(
                    "{:<30} {:<16} {:<18} {}",
                    rule.name,
                    rule.category.as_deref().unwrap_or("-"),
                    marks,
                    rule.description.as_deref().unwrap_or("")
                );
            }

            println!(
                "\n{} rule(s) in {} category(ies)",
                set.rules.len(),
                set.categories.len()
            );
        }
    }

    Ok(())
}
