//! Integration test: manifest TOML → rule set → rendered document.
//!
//! Uses the fixture manifest under `tests/fixtures/` to verify the full
//! load → generate → write pipeline, including the exact document layout.

use rules_index_core::{generate, manifest, write_index};
use std::path::PathBuf;

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/rules-index.toml")
}

fn load_fixture() -> manifest::Manifest {
    let content = std::fs::read_to_string(fixture_path()).expect("fixture manifest should exist");
    manifest::parse(&content).expect("fixture manifest should load")
}

#[test]
fn renders_complete_document() {
    let loaded = load_fixture();
    let document = generate(&loaded.rule_set);

    insta::assert_snapshot!(document, @r#"
---
sidebarDepth: 0
---

<!-- This file is automatically generated by rules-index, do not edit! -->

# Available rules

## Priority A: Essential

Enforce all the rules in this category, as well as all higher priority rules, with:

```json
{
  "extends": "plugin:vue/essential"
}
```

| Rule ID | Description |    |
|:--------|:------------|:---|
| [vue/no-async-in-computed](./no-async-in-computed.md) | disallow asynchronous actions in computed properties |  |

## Priority C: Recommended

Enforce all the rules in this category, as well as all higher priority rules, with:

```json
{
  "extends": "plugin:vue/recommended"
}
```

| Rule ID | Description |    |
|:--------|:------------|:---|
| [vue/html-indent](./html-indent.md) | enforce consistent indentation | :wrench: |

## Uncategorized

No preset enables the rules in this category.
Please enable each rule if you want.

For example:

```json
{
  "rules": {
    "vue/experimental-widget": "error"
  }
}
```

| Rule ID | Description |    |
|:--------|:------------|:---|
| [vue/experimental-widget](./experimental-widget.md) | flag experimental widget usage |  |

## Deprecated

- :warning: We're going to remove deprecated rules in the next major release. Please migrate to successor/new rules.
- :innocent: We don't fix bugs which are in deprecated rules since we don't have enough resources.

| Rule ID | Replaced by |
|:--------|:------------|
| [vue/old-rule](./old-rule.md) | [vue/new-rule](./new-rule.md), [vue/newer-rule](./newer-rule.md) |
"#);
}

#[test]
fn generation_is_idempotent_across_loads() {
    let first = generate(&load_fixture().rule_set);
    let second = generate(&load_fixture().rule_set);
    assert_eq!(first, second);
}

#[test]
fn written_file_matches_generated_document() {
    let loaded = load_fixture();
    let document = generate(&loaded.rule_set);

    let dir = tempfile::tempdir().expect("tempdir should be created");
    let destination = dir.path().join(&loaded.output);

    write_index(&destination, &document).expect("write should succeed");
    let on_disk = std::fs::read_to_string(&destination).expect("output should be readable");
    assert_eq!(on_disk, document);

    // A second run fully replaces the file with identical bytes.
    write_index(&destination, &document).expect("rewrite should succeed");
    assert_eq!(
        std::fs::read_to_string(&destination).expect("output should be readable"),
        document
    );
}
