//! DTO → Domain model conversion with validation.

use std::path::PathBuf;

use super::dto::ManifestDto;
use super::{Manifest, DEFAULT_OUTPUT};
use crate::model::{CategoryDef, CategoryId, ModelError, PluginName, Rule, RuleName, RuleSet};

/// Errors during DTO → Domain conversion.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// A field-level validation error.
    #[error("{context}: {source}")]
    Validation {
        /// Where the error occurred (e.g., "rules[3]").
        context: String,
        /// The underlying model error.
        source: ModelError,
    },

    /// A cross-reference or uniqueness error across the manifest.
    #[error("invalid manifest: {0}")]
    Invalid(#[from] ModelError),
}

/// Converts a [`ManifestDto`] to a validated [`Manifest`].
///
/// # Errors
///
/// Returns the first error encountered during conversion.
pub fn load(dto: ManifestDto) -> Result<Manifest, LoadError> {
    let plugin = PluginName::new(&dto.plugin).map_err(|source| LoadError::Validation {
        context: "plugin".to_string(),
        source,
    })?;

    let category_defs = dto
        .categories
        .iter()
        .enumerate()
        .map(|(i, c)| {
            let id = CategoryId::new(&c.id).map_err(|source| LoadError::Validation {
                context: format!("categories[{i}]"),
                source,
            })?;
            Ok(CategoryDef {
                id,
                title: c.title.clone(),
            })
        })
        .collect::<Result<Vec<_>, LoadError>>()?;

    let rules = dto
        .rules
        .iter()
        .enumerate()
        .map(|(i, r)| {
            let name = RuleName::new(&r.name).map_err(|source| LoadError::Validation {
                context: format!("rules[{i}]"),
                source,
            })?;
            let mut rule = Rule::new(&plugin, name)
                .fixable(r.fixable)
                .deprecated(r.deprecated)
                .replaced_by(r.replaced_by.clone());
            if let Some(description) = &r.description {
                rule = rule.description(description.clone());
            }
            if let Some(category) = &r.category {
                rule = rule.category(category.clone());
            }
            Ok(rule)
        })
        .collect::<Result<Vec<_>, LoadError>>()?;

    let rule_set = RuleSet::new(plugin, rules, category_defs)?;

    Ok(Manifest {
        rule_set,
        output: dto
            .output
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest;

    #[test]
    fn load_resolves_membership_and_default_output() {
        let loaded = manifest::parse(
            r#"
plugin = "vue"

[[categories]]
id = "essential"
title = "Priority A: Essential"

[[rules]]
name = "no-foo"
category = "essential"

[[rules]]
name = "loose"
"#,
        )
        .unwrap();

        assert_eq!(loaded.output, PathBuf::from(DEFAULT_OUTPUT));
        let set = &loaded.rule_set;
        assert_eq!(set.rules.len(), 2);
        assert_eq!(set.categories.len(), 1);
        assert_eq!(set.categories[0].rules.len(), 1);
        assert_eq!(set.categories[0].rules[0].rule_id, "vue/no-foo");
    }

    #[test]
    fn load_respects_output_override() {
        let loaded = manifest::parse("plugin = \"vue\"\noutput = \"docs/index.md\"").unwrap();
        assert_eq!(loaded.output, PathBuf::from("docs/index.md"));
    }

    #[test]
    fn invalid_rule_name_reports_context() {
        let err = manifest::parse(
            r#"
plugin = "vue"

[[rules]]
name = "No_Foo"
"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("rules[0]"));
    }

    #[test]
    fn unknown_category_is_rejected() {
        let err = manifest::parse(
            r#"
plugin = "vue"

[[rules]]
name = "no-foo"
category = "missing"
"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("unknown category"));
    }

    #[test]
    fn duplicate_rule_is_rejected() {
        let err = manifest::parse(
            r#"
plugin = "vue"

[[rules]]
name = "no-foo"

[[rules]]
name = "no-foo"
"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("duplicate rule"));
    }
}
