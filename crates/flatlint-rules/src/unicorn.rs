//! `eslint-plugin-unicorn` rules.
//!
//! The plugin's own recommended preset is not used; rules are opted into
//! one by one.

use flatlint_core::RuleLevel::{Error, Warn};
use flatlint_core::RuleTable;

use crate::presets::Plugin;
use crate::table;

/// Selected unicorn rules.
#[must_use]
pub fn unicorn_rules() -> RuleTable {
    table(
        Plugin::Unicorn,
        &[
            ("better-regex", Warn),
            ("consistent-empty-array-spread", Error),
            ("consistent-function-scoping", Warn),
            ("custom-error-definition", Error),
            ("explicit-length-check", Error),
            ("filename-case", Warn),
            ("new-for-builtins", Error),
            ("no-array-for-each", Warn),
            ("no-array-method-this-argument", Error),
            ("no-array-push-push", Warn),
            ("no-await-expression-member", Error),
            ("no-await-in-promise-methods", Error),
            ("no-console-spaces", Error),
            ("no-for-loop", Warn),
            ("no-instanceof-array", Error),
            ("no-length-as-slice-end", Error),
            ("no-lonely-if", Warn),
            ("no-negation-in-equality-check", Error),
            ("no-new-array", Warn),
            ("no-object-as-default-parameter", Error),
            ("no-single-promise-in-promise-methods", Error),
            ("no-static-only-class", Error),
            ("no-typeof-undefined", Error),
            ("no-unnecessary-polyfills", Error),
            ("no-unreadable-array-destructuring", Warn),
            ("no-unreadable-iife", Error),
            ("no-useless-fallback-in-spread", Error),
            ("no-useless-length-check", Error),
            ("no-useless-promise-resolve-reject", Error),
            ("no-useless-spread", Error),
            ("no-useless-switch-case", Error),
            ("numeric-separators-style", Error),
            ("prefer-add-event-listener", Warn),
            ("prefer-array-find", Error),
            ("prefer-array-flat", Error),
            ("prefer-array-flat-map", Warn),
            ("prefer-array-index-of", Error),
            ("prefer-array-some", Error),
            ("prefer-at", Error),
            ("prefer-blob-reading-methods", Error),
            ("prefer-code-point", Warn),
            ("prefer-date-now", Error),
            ("prefer-default-parameters", Error),
            ("prefer-dom-node-append", Error),
            ("prefer-dom-node-dataset", Error),
            ("prefer-dom-node-remove", Warn),
            ("prefer-event-target", Error),
            ("prefer-export-from", Error),
            ("prefer-includes", Error),
            ("prefer-keyboard-event-key", Error),
            ("prefer-logical-operator-over-ternary", Warn),
            ("prefer-modern-dom-apis", Error),
            ("prefer-modern-math-apis", Error),
            ("prefer-native-coercion-functions", Error),
            ("prefer-negative-index", Error),
            ("prefer-node-protocol", Error),
            ("prefer-number-properties", Error),
            ("prefer-object-from-entries", Error),
            ("prefer-optional-catch-binding", Error),
            ("prefer-prototype-methods", Error),
            ("prefer-query-selector", Error),
            ("prefer-regexp-test", Error),
            ("prefer-set-has", Warn),
            ("prefer-set-size", Error),
            ("prefer-string-raw", Warn),
            ("prefer-string-replace-all", Warn),
            ("prefer-string-slice", Error),
            ("prefer-string-starts-ends-with", Error),
            ("prefer-string-trim-start-end", Error),
            ("prefer-structured-clone", Error),
            ("prefer-switch", Error),
            ("prefer-type-error", Error),
            ("require-array-join-separator", Error),
            ("require-number-to-fixed-digits-argument", Error),
            ("switch-case-braces", Error),
            ("throw-new-error", Error),
        ],
    )
}
