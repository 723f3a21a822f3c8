//! Init command implementation.

use anyhow::{bail, Result};
use rules_index_core::manifest::DEFAULT_MANIFEST;
use std::path::Path;

const STARTER_MANIFEST: &str = r#"# rules-index manifest
# Declares the plugin name, categories, and rule metadata used to
# regenerate the rules index document.

plugin = "vue"

# Destination of the generated document (default shown)
# output = "docs/rules/README.md"

[[categories]]
id = "essential"
title = "Priority A: Essential"

[[categories]]
id = "recommended"
title = "Priority C: Recommended"

[[rules]]
name = "no-foo"
description = "disallow foo"
category = "essential"
fixable = true

[[rules]]
name = "prefer-bar"
description = "prefer bar over baz"
category = "recommended"

[[rules]]
name = "old-rule"
description = "old rule, superseded"
deprecated = true
replaced-by = ["no-foo"]
"#;

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    let manifest_path = Path::new(DEFAULT_MANIFEST);

    if manifest_path.exists() && !force {
        bail!(
            "Manifest already exists at {}. Use --force to overwrite.",
            manifest_path.display()
        );
    }

    std::fs::write(manifest_path, STARTER_MANIFEST)?;

    println!("Created {}", manifest_path.display());
    println!("\nNext steps:");
    println!("  1. Edit {} to declare your rules", manifest_path.display());
    println!("  2. Run: rules-index");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starter_manifest_loads_and_renders() {
        let loaded = rules_index_core::manifest::parse(STARTER_MANIFEST)
            .expect("starter manifest should load");
        assert_eq!(loaded.rule_set.categories.len(), 2);
        assert_eq!(loaded.rule_set.rules.len(), 3);

        let document = rules_index_core::generate(&loaded.rule_set);
        assert!(document.contains("## Priority A: Essential"));
        assert!(document.contains("| [vue/old-rule](./old-rule.md) | [vue/no-foo](./no-foo.md) |"));
    }
}
