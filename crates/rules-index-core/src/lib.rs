//! # rules-index-core
//!
//! Core model and rendering pipeline for generating a lint plugin's rules
//! index document.
//!
//! This crate provides:
//!
//! - [`Rule`], [`Category`], and [`RuleSet`] for validated rule metadata
//! - [`generate`] for rendering the markdown index document
//! - [`write_index`] for replacing the destination file in one write
//! - [`manifest`] for loading the TOML manifest into a [`RuleSet`]
//!
//! ## Example
//!
//! ```ignore
//! use rules_index_core::{generate, manifest, write_index};
//!
//! let loaded = manifest::load_file(Path::new("rules-index.toml"))?;
//! let document = generate(&loaded.rule_set);
//! write_index(&loaded.output, &document)?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod generator;
mod model;
mod output;

pub mod manifest;

pub use generator::{
    generate, partition, render_category_section, render_deprecated_section,
    render_uncategorized_section, Partition,
};
pub use model::{
    Category, CategoryDef, CategoryId, ModelError, PluginName, Rule, RuleName, RuleSet,
};
pub use output::{write_index, WriteError};
