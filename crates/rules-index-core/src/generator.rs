//! Markdown rendering pipeline for the rules index document.
//!
//! The document is assembled from ordered sections: a front-matter header,
//! one section per category, an optional "Uncategorized" section, and an
//! optional "Deprecated" section. Rendering is pure and byte-deterministic
//! for identical inputs.

use crate::model::{Category, PluginName, Rule, RuleSet};
use std::fmt::Write as _;

const HEADER: &str = r"---
sidebarDepth: 0
---

<!-- This file is automatically generated by rules-index, do not edit! -->

# Available rules
";

const RULE_TABLE_HEADER: &str = "| Rule ID | Description |    |\n|:--------|:------------|:---|\n";

const DEPRECATED_TABLE_HEADER: &str = "| Rule ID | Replaced by |\n|:--------|:------------|\n";

/// Rules that belong to no category table.
#[derive(Debug, Default)]
pub struct Partition<'a> {
    /// Rules without a category that are not deprecated, in input order.
    pub uncategorized: Vec<&'a Rule>,
    /// Deprecated rules, in input order, regardless of category.
    pub deprecated: Vec<&'a Rule>,
}

/// Splits the rule list into the uncategorized and deprecated groups.
///
/// Input order is preserved in both groups; empty input yields empty
/// groups.
#[must_use]
pub fn partition(rules: &[Rule]) -> Partition<'_> {
    Partition {
        uncategorized: rules
            .iter()
            .filter(|r| r.is_uncategorized() && !r.deprecated)
            .collect(),
        deprecated: rules.iter().filter(|r| r.deprecated).collect(),
    }
}

fn rule_row(rule: &Rule) -> String {
    let mark = format!(
        "{}{}",
        if rule.fixable { ":wrench:" } else { "" },
        if rule.deprecated { ":warning:" } else { "" },
    );
    let description = rule.description.as_deref().unwrap_or("(no description)");

    format!("| {} | {description} | {mark} |", rule.doc_link())
}

fn deprecated_rule_row(plugin: &PluginName, rule: &Rule) -> String {
    let replaced_by = rule
        .replaced_by
        .iter()
        .map(|name| format!("[{plugin}/{name}](./{name}.md)"))
        .collect::<Vec<_>>()
        .join(", ");
    let replaced_by = if replaced_by.is_empty() {
        "(no replacement)".to_string()
    } else {
        replaced_by
    };

    format!("| {} | {replaced_by} |", rule.doc_link())
}

/// Renders one category section: heading, preset snippet, and rule table.
#[must_use]
pub fn render_category_section(plugin: &PluginName, category: &Category) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n## {}", category.title);
    out.push_str("\nEnforce all the rules in this category, as well as all higher priority rules, with:\n");
    out.push_str("\n```json\n{\n");
    let _ = writeln!(out, "  \"extends\": \"plugin:{plugin}/{}\"", category.id);
    out.push_str("}\n```\n\n");
    out.push_str(RULE_TABLE_HEADER);
    for rule in &category.rules {
        let _ = writeln!(out, "{}", rule_row(rule));
    }
    out
}

/// Renders the "Uncategorized" section.
///
/// The example snippet enables the first rule of the group, so the output
/// depends on the rule input order. Callers skip this section when the
/// group is empty.
#[must_use]
pub fn render_uncategorized_section(rules: &[&Rule]) -> String {
    let mut out = String::new();
    out.push_str("\n## Uncategorized\n\n");
    out.push_str("No preset enables the rules in this category.\nPlease enable each rule if you want.\n");
    out.push_str("\nFor example:\n\n```json\n{\n  \"rules\": {\n");
    if let Some(first) = rules.first() {
        let _ = writeln!(out, "    \"{}\": \"error\"", first.rule_id);
    }
    out.push_str("  }\n}\n```\n\n");
    out.push_str(RULE_TABLE_HEADER);
    for rule in rules {
        let _ = writeln!(out, "{}", rule_row(rule));
    }
    out
}

/// Renders the "Deprecated" section with replacement links.
///
/// Callers skip this section when the group is empty.
#[must_use]
pub fn render_deprecated_section(plugin: &PluginName, rules: &[&Rule]) -> String {
    let mut out = String::new();
    out.push_str("\n## Deprecated\n\n");
    out.push_str("- :warning: We're going to remove deprecated rules in the next major release. Please migrate to successor/new rules.\n");
    out.push_str("- :innocent: We don't fix bugs which are in deprecated rules since we don't have enough resources.\n\n");
    out.push_str(DEPRECATED_TABLE_HEADER);
    for rule in rules {
        let _ = writeln!(out, "{}", deprecated_rule_row(plugin, rule));
    }
    out
}

/// Generates the complete rules index document.
///
/// Section order: header, one section per category in definition order,
/// uncategorized (if any), deprecated (if any).
#[must_use]
pub fn generate(set: &RuleSet) -> String {
    let Partition {
        uncategorized,
        deprecated,
    } = partition(&set.rules);

    tracing::debug!(
        "Rendering {} rules: {} categories, {} uncategorized, {} deprecated",
        set.rules.len(),
        set.categories.len(),
        uncategorized.len(),
        deprecated.len(),
    );

    let mut doc = String::from(HEADER);
    for category in &set.categories {
        doc.push_str(&render_category_section(&set.plugin, category));
    }
    if !uncategorized.is_empty() {
        doc.push_str(&render_uncategorized_section(&uncategorized));
    }
    if !deprecated.is_empty() {
        doc.push_str(&render_deprecated_section(&set.plugin, &deprecated));
    }
    doc
}
