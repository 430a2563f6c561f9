//! `eslint-plugin-jsdoc` rules and settings.

use flatlint_core::RuleLevel::{Error, Warn};
use flatlint_core::{RuleEntry, RuleTable};
use serde_json::{json, Value};

use crate::presets::Plugin;
use crate::{rule_name, table};

/// Tag groups in the order `jsdoc/sort-tags` enforces.
const TAG_SEQUENCE: &[&[&str]] = &[
    &["summary", "description"],
    &["experimental", "since", "deprecated", "module", "category"],
    &["typeparam"],
    &["param", "prop"],
    &["emits", "throws", "yields", "returns"],
    &["see"],
    &["example"],
];

/// Formatting and validity checks for doc comments.
#[must_use]
pub fn jsdoc_rules() -> RuleTable {
    let mut rules = table(
        Plugin::Jsdoc,
        &[
            ("check-alignment", Warn),
            ("check-indentation", Warn),
            ("check-param-names", Error),
            ("empty-tags", Error),
            ("multiline-blocks", Error),
            ("no-blank-blocks", Warn),
            ("no-defaults", Error),
            ("no-multi-asterisks", Error),
            ("no-types", Error),
            ("require-asterisk-prefix", Error),
            ("require-returns-check", Error),
            ("require-yields-check", Error),
            ("valid-types", Error),
        ],
    );

    rules.insert(
        rule_name(Plugin::Jsdoc, "check-tag-names"),
        RuleEntry::new(Error).with_option(json!({ "typed": true })),
    );

    let tag_sequence: Vec<Value> = TAG_SEQUENCE
        .iter()
        .map(|tags| json!({ "tags": tags }))
        .collect();
    rules.insert(
        rule_name(Plugin::Jsdoc, "sort-tags"),
        RuleEntry::new(Warn).with_option(json!({
            "tagSequence": tag_sequence,
            "linesBetween": 1,
            "reportIntraTagGroupSpacing": true,
        })),
    );

    rules.insert(
        rule_name(Plugin::Jsdoc, "tag-lines"),
        RuleEntry::new(Warn)
            .with_option(json!("any"))
            .with_option(json!({ "startLines": 1 })),
    );

    rules
}

/// Requires docs on exported declarations. Applied to the docs directories only.
#[must_use]
pub fn docs_rules() -> RuleTable {
    let mut rules = RuleTable::new();
    rules.insert(
        rule_name(Plugin::Jsdoc, "require-jsdoc"),
        RuleEntry::new(Warn).with_option(json!({
            "publicOnly": true,
            "enableFixer": false,
            "contexts": [
                "ExportNamedDeclaration[declaration]",
                "ExportDefaultDeclaration",
            ],
        })),
    );
    rules
}

/// Shared `jsdoc` plugin settings: TypeScript mode and preferred tag names.
#[must_use]
pub fn jsdoc_settings() -> Value {
    json!({
        "jsdoc": {
            "mode": "typescript",
            "tagNamePreference": {
                "fires": "emits",
                "property": "prop",
                "template": "typeparam",
            },
        },
    })
}
