//! Domain model for rule metadata and category definitions.
//!
//! All invariants are enforced at construction time via validated newtypes
//! and [`RuleSet::new`], so the rendering pipeline can assume well-formed
//! input.

use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

fn validate_name(kind: &'static str, name: &str) -> Result<(), ModelError> {
    if name.is_empty() {
        return Err(ModelError::EmptyName { kind });
    }
    if !name
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(ModelError::InvalidName {
            kind,
            name: name.to_string(),
        });
    }
    Ok(())
}

/// A validated plugin name (non-empty, `[a-z0-9-]` only).
///
/// Used as the rule id prefix, e.g. `vue` in `vue/no-foo`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct PluginName(String);

impl PluginName {
    /// Creates a new plugin name.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty or contains invalid characters.
    pub fn new(name: &str) -> Result<Self, ModelError> {
        validate_name("plugin", name)?;
        Ok(Self(name.to_string()))
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PluginName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A validated rule name (non-empty, `[a-z0-9-]` only).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct RuleName(String);

impl RuleName {
    /// Creates a new rule name.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty or contains invalid characters.
    pub fn new(name: &str) -> Result<Self, ModelError> {
        validate_name("rule", name)?;
        Ok(Self(name.to_string()))
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A validated category identifier (non-empty, `[a-z0-9-]` only).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CategoryId(String);

impl CategoryId {
    /// Creates a new category identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the id is empty or contains invalid characters.
    pub fn new(id: &str) -> Result<Self, ModelError> {
        validate_name("category", id)?;
        Ok(Self(id.to_string()))
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single lint-rule metadata record.
///
/// Immutable input to the generator; never mutated during rendering.
#[derive(Debug, Clone, Serialize)]
pub struct Rule {
    /// Fully qualified identifier (e.g., `vue/no-foo`).
    pub rule_id: String,
    /// Short rule name (e.g., `no-foo`), used for doc page links.
    pub name: RuleName,
    /// One-line description shown in the index tables.
    pub description: Option<String>,
    /// Identifier of the category this rule belongs to, if any.
    pub category: Option<String>,
    /// Whether the rule supports automatic fixing.
    pub fixable: bool,
    /// Whether the rule is deprecated.
    pub deprecated: bool,
    /// Names of the rules that supersede this one.
    pub replaced_by: Vec<String>,
}

impl Rule {
    /// Creates a new rule with defaults (no description, no category,
    /// not fixable, not deprecated).
    #[must_use]
    pub fn new(plugin: &PluginName, name: RuleName) -> Self {
        Self {
            rule_id: format!("{plugin}/{name}"),
            name,
            description: None,
            category: None,
            fixable: false,
            deprecated: false,
            replaced_by: Vec::new(),
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the category.
    #[must_use]
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Sets whether the rule supports automatic fixing.
    #[must_use]
    pub fn fixable(mut self, fixable: bool) -> Self {
        self.fixable = fixable;
        self
    }

    /// Sets whether the rule is deprecated.
    #[must_use]
    pub fn deprecated(mut self, deprecated: bool) -> Self {
        self.deprecated = deprecated;
        self
    }

    /// Sets the replacement rule names.
    #[must_use]
    pub fn replaced_by(mut self, replaced_by: Vec<String>) -> Self {
        self.replaced_by = replaced_by;
        self
    }

    /// Returns the markdown link to this rule's doc page.
    #[must_use]
    pub fn doc_link(&self) -> String {
        format!("[{}](./{}.md)", self.rule_id, self.name)
    }

    /// Returns true if the rule has no category assignment.
    ///
    /// An empty category string counts as no assignment.
    #[must_use]
    pub fn is_uncategorized(&self) -> bool {
        self.category.as_deref().map_or(true, str::is_empty)
    }
}

/// A category definition before rule membership is resolved.
#[derive(Debug, Clone)]
pub struct CategoryDef {
    /// Category identifier (e.g., `essential`).
    pub id: CategoryId,
    /// Human-readable section title.
    pub title: String,
}

/// A named group of rules corresponding to a configuration preset.
#[derive(Debug, Clone, Serialize)]
pub struct Category {
    /// Category identifier (e.g., `essential`).
    pub id: CategoryId,
    /// Human-readable section title.
    pub title: String,
    /// Member rules in rule definition order.
    ///
    /// Deprecated rules never appear here; they are listed only in the
    /// deprecated section.
    pub rules: Vec<Rule>,
}

/// The validated aggregate consumed by the generator: plugin name, the
/// full ordered rule list, and categories with membership resolved.
#[derive(Debug, Clone, Serialize)]
pub struct RuleSet {
    /// Plugin name used as the rule id prefix.
    pub plugin: PluginName,
    /// All rules in definition order.
    pub rules: Vec<Rule>,
    /// Categories in definition order.
    pub categories: Vec<Category>,
}

impl RuleSet {
    /// Builds a rule set, resolving category membership.
    ///
    /// A rule belongs to a category when its `category` field matches the
    /// category id and the rule is not deprecated. Rule order within a
    /// category follows the rule definition order.
    ///
    /// # Errors
    ///
    /// Returns an error on duplicate rule names, duplicate category ids,
    /// or a rule referencing a category that is not defined.
    pub fn new(
        plugin: PluginName,
        rules: Vec<Rule>,
        category_defs: Vec<CategoryDef>,
    ) -> Result<Self, ModelError> {
        let mut rule_names: HashSet<String> = HashSet::new();
        for rule in &rules {
            if !rule_names.insert(rule.name.as_str().to_string()) {
                return Err(ModelError::DuplicateRule {
                    name: rule.name.as_str().to_string(),
                });
            }
        }

        let mut category_ids: HashSet<String> = HashSet::new();
        for def in &category_defs {
            if !category_ids.insert(def.id.as_str().to_string()) {
                return Err(ModelError::DuplicateCategory {
                    id: def.id.as_str().to_string(),
                });
            }
        }

        // A dangling category reference would make the rule vanish from
        // every section of the generated document.
        for rule in &rules {
            if let Some(category) = rule.category.as_deref() {
                if !category.is_empty() && !category_ids.contains(category) {
                    return Err(ModelError::UnknownCategory {
                        rule: rule.rule_id.clone(),
                        category: category.to_string(),
                    });
                }
            }
        }

        let categories = category_defs
            .into_iter()
            .map(|def| {
                let members = rules
                    .iter()
                    .filter(|r| !r.deprecated && r.category.as_deref() == Some(def.id.as_str()))
                    .cloned()
                    .collect();
                Category {
                    id: def.id,
                    title: def.title,
                    rules: members,
                }
            })
            .collect();

        Ok(Self {
            plugin,
            rules,
            categories,
        })
    }
}

/// Errors from domain model validation.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ModelError {
    /// A name field was empty.
    #[error("{kind} name must not be empty")]
    EmptyName {
        /// Which kind of name was empty ("plugin", "rule", "category").
        kind: &'static str,
    },

    /// A name field contained invalid characters.
    #[error("invalid {kind} name `{name}`: expected lowercase letters, digits, and `-`")]
    InvalidName {
        /// Which kind of name was invalid.
        kind: &'static str,
        /// The offending value.
        name: String,
    },

    /// Two rules share the same name.
    #[error("duplicate rule `{name}`")]
    DuplicateRule {
        /// The duplicated rule name.
        name: String,
    },

    /// Two categories share the same id.
    #[error("duplicate category `{id}`")]
    DuplicateCategory {
        /// The duplicated category id.
        id: String,
    },

    /// A rule references a category that is not defined.
    #[error("rule `{rule}` references unknown category `{category}`")]
    UnknownCategory {
        /// The rule with the dangling reference.
        rule: String,
        /// The missing category id.
        category: String,
    },
}
