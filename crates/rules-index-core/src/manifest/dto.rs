//! TOML deserialization types (DTO layer).
//!
//! These types exist solely for serde deserialization.
//! They are converted to domain model types via the loader.

use serde::Deserialize;
use std::path::PathBuf;

/// Raw TOML representation of the rules manifest.
#[derive(Debug, Clone, Deserialize)]
pub struct ManifestDto {
    /// Plugin name used as the rule id prefix (e.g., "vue").
    pub plugin: String,

    /// Destination path for the generated document.
    #[serde(default)]
    pub output: Option<PathBuf>,

    /// Category definitions, in presentation order.
    #[serde(default)]
    pub categories: Vec<CategoryDto>,

    /// Rule metadata records, in presentation order.
    #[serde(default)]
    pub rules: Vec<RuleDto>,
}

/// TOML representation of a category definition.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryDto {
    /// Category identifier (e.g., "essential").
    pub id: String,
    /// Human-readable section title.
    pub title: String,
}

/// TOML representation of a rule metadata record.
#[derive(Debug, Clone, Deserialize)]
pub struct RuleDto {
    /// Rule name without the plugin prefix (e.g., "no-foo").
    pub name: String,

    /// One-line description shown in the index tables.
    #[serde(default)]
    pub description: Option<String>,

    /// Category id this rule belongs to.
    #[serde(default)]
    pub category: Option<String>,

    /// Whether the rule supports automatic fixing.
    #[serde(default)]
    pub fixable: bool,

    /// Whether the rule is deprecated.
    #[serde(default)]
    pub deprecated: bool,

    /// Names of the rules that supersede this one.
    #[serde(rename = "replaced-by", default)]
    pub replaced_by: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_minimal() {
        let dto: ManifestDto = toml::from_str("plugin = \"vue\"").unwrap();
        assert_eq!(dto.plugin, "vue");
        assert!(dto.output.is_none());
        assert!(dto.categories.is_empty());
        assert!(dto.rules.is_empty());
    }

    #[test]
    fn deserialize_full_manifest() {
        let toml_str = r#"
plugin = "vue"
output = "docs/rules/README.md"

[[categories]]
id = "essential"
title = "Priority A: Essential"

[[rules]]
name = "no-foo"
description = "disallow foo"
category = "essential"
fixable = true

[[rules]]
name = "old-rule"
deprecated = true
replaced-by = ["new-rule"]
"#;
        let dto: ManifestDto = toml::from_str(toml_str).unwrap();
        assert_eq!(dto.categories.len(), 1);
        assert_eq!(dto.rules.len(), 2);
        assert_eq!(dto.rules[0].category, Some("essential".to_string()));
        assert!(dto.rules[0].fixable);
        assert!(!dto.rules[0].deprecated);
        assert!(dto.rules[1].deprecated);
        assert_eq!(dto.rules[1].replaced_by, vec!["new-rule".to_string()]);
    }

    #[test]
    fn missing_plugin_is_rejected() {
        assert!(toml::from_str::<ManifestDto>("").is_err());
    }
}
