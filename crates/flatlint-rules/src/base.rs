//! Rules shared by every JavaScript and TypeScript file.

use flatlint_core::RuleLevel::{Error, Off, Warn};
use flatlint_core::{RuleEntry, RuleTable};
use serde_json::json;

use crate::jsdoc::jsdoc_rules;
use crate::presets::Plugin;
use crate::unicorn::unicorn_rules;
use crate::{rule_name, table};

/// The baseline rule table: imports, deprecation, TypeScript adjustments,
/// jsdoc and unicorn.
#[must_use]
pub fn base_rules() -> RuleTable {
    let mut rules = table(Plugin::Imports, &[("imports", Warn), ("exports", Warn)]);
    rules.insert(
        rule_name(Plugin::Deprecation, "deprecation"),
        RuleEntry::new(Error),
    );
    rules.extend(typescript_adjustments());
    rules.extend(jsdoc_rules());
    rules.extend(unicorn_rules());
    rules
}

/// Overrides of the `typescript-eslint` presets.
///
/// Underscore-prefixed names are exempt from unused checks.
#[must_use]
pub fn typescript_adjustments() -> RuleTable {
    let mut rules = RuleTable::new();
    rules.insert(
        "@typescript-eslint/no-non-null-assertion".to_string(),
        RuleEntry::new(Off),
    );
    rules.insert(
        "@typescript-eslint/no-unused-vars".to_string(),
        RuleEntry::new(Warn).with_option(json!({
            "vars": "all",
            "args": "all",
            "caughtErrors": "all",
            "varsIgnorePattern": "^_",
            "argsIgnorePattern": "^_",
            "destructuredArrayIgnorePattern": "^_",
        })),
    );
    rules
}

/// Rules for `.ts`/`.tsx` files that need type information.
#[must_use]
pub fn typescript_rules() -> RuleTable {
    let mut rules = RuleTable::new();
    rules.insert(
        "@typescript-eslint/consistent-type-imports".to_string(),
        RuleEntry::new(Error).with_option(json!({
            "prefer": "type-imports",
            "fixStyle": "separate-type-imports",
        })),
    );
    rules.insert(
        "@typescript-eslint/restrict-template-expressions".to_string(),
        RuleEntry::new(Error).with_option(json!({ "allowNumber": true })),
    );
    rules
}
