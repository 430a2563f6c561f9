//! Core types for flat config layers and rule settings.

use serde::de::Error as _;
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::collections::BTreeMap;

/// Severity level for a lint rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleLevel {
    /// Rule is disabled.
    Off,
    /// Rule reports warnings.
    Warn,
    /// Rule reports errors.
    Error,
}

impl RuleLevel {
    /// Parses a level from its name or numeric alias (`0`, `1`, `2`).
    #[must_use]
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => match s.as_str() {
                "off" => Some(Self::Off),
                "warn" => Some(Self::Warn),
                "error" => Some(Self::Error),
                _ => None,
            },
            Value::Number(n) => match n.as_u64() {
                Some(0) => Some(Self::Off),
                Some(1) => Some(Self::Warn),
                Some(2) => Some(Self::Error),
                _ => None,
            },
            _ => None,
        }
    }
}

impl std::fmt::Display for RuleLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Off => write!(f, "off"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

impl<'de> Deserialize<'de> for RuleLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(&value).ok_or_else(|| {
            D::Error::custom(format!(
                "invalid rule level {value}, expected \"off\", \"warn\", \"error\" or 0-2"
            ))
        })
    }
}

/// A rule setting: a level plus optional rule-specific options.
///
/// Serializes as `"warn"` when there are no options and as
/// `["warn", {...}]` otherwise, matching ESLint's rule config shape.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleEntry {
    /// Severity for this rule.
    pub level: RuleLevel,
    /// Rule-specific options following the level.
    pub options: Vec<Value>,
}

impl RuleEntry {
    /// Creates an entry without options.
    #[must_use]
    pub fn new(level: RuleLevel) -> Self {
        Self {
            level,
            options: Vec::new(),
        }
    }

    /// Appends an option value.
    #[must_use]
    pub fn with_option(mut self, option: Value) -> Self {
        self.options.push(option);
        self
    }
}

impl From<RuleLevel> for RuleEntry {
    fn from(level: RuleLevel) -> Self {
        Self::new(level)
    }
}

impl Serialize for RuleEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.options.is_empty() {
            return self.level.serialize(serializer);
        }
        let mut seq = serializer.serialize_seq(Some(self.options.len() + 1))?;
        seq.serialize_element(&self.level)?;
        for option in &self.options {
            seq.serialize_element(option)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for RuleEntry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        match value {
            Value::Array(mut items) => {
                if items.is_empty() {
                    return Err(D::Error::custom("rule entry array must start with a level"));
                }
                let head = items.remove(0);
                let level = RuleLevel::from_value(&head)
                    .ok_or_else(|| D::Error::custom(format!("invalid rule level {head}")))?;
                Ok(Self {
                    level,
                    options: items,
                })
            }
            other => RuleLevel::from_value(&other)
                .map(Self::new)
                .ok_or_else(|| D::Error::custom(format!("invalid rule level {other}"))),
        }
    }
}

/// Rule name to setting, ordered by name.
pub type RuleTable = BTreeMap<String, RuleEntry>;

/// One entry of a flat config array.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigLayer {
    /// Label shown by config inspectors.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// File globs this layer applies to.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<String>,

    /// Globs excluded by this layer.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ignores: Vec<String>,

    /// External presets this layer extends, by name.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extends: Vec<String>,

    /// Plugin alias to package name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub plugins: BTreeMap<String, String>,

    /// Parser and language options, passed through as-is.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_options: Option<Value>,

    /// Shared plugin settings, passed through as-is.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<Value>,

    /// Rule settings.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub rules: RuleTable,
}

impl ConfigLayer {
    /// Creates an empty, named layer.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Creates a layer that only carries ignore globs.
    #[must_use]
    pub fn ignores_only(ignores: Vec<String>) -> Self {
        Self {
            ignores,
            ..Self::default()
        }
    }

    /// Sets the file globs.
    #[must_use]
    pub fn files<I, S>(mut self, files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.files = files.into_iter().map(Into::into).collect();
        self
    }

    /// Adds an external preset.
    #[must_use]
    pub fn extend(mut self, preset: impl Into<String>) -> Self {
        self.extends.push(preset.into());
        self
    }

    /// Registers a plugin under an alias.
    #[must_use]
    pub fn plugin(mut self, alias: impl Into<String>, package: impl Into<String>) -> Self {
        self.plugins.insert(alias.into(), package.into());
        self
    }

    /// Merges a rule table into this layer, later entries winning.
    #[must_use]
    pub fn rules(mut self, rules: RuleTable) -> Self {
        self.rules.extend(rules);
        self
    }

    /// Returns `true` if this layer only excludes files.
    ///
    /// Flat config treats such a layer as a global ignore.
    #[must_use]
    pub fn is_global_ignore(&self) -> bool {
        !self.ignores.is_empty()
            && self.files.is_empty()
            && self.extends.is_empty()
            && self.plugins.is_empty()
            && self.language_options.is_none()
            && self.settings.is_none()
            && self.rules.is_empty()
    }
}

/// An ordered flat config array.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FlatConfig(Vec<ConfigLayer>);

impl FlatConfig {
    /// Creates an empty config.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a layer.
    pub fn push(&mut self, layer: ConfigLayer) {
        self.0.push(layer);
    }

    /// Returns the layers in order.
    #[must_use]
    pub fn layers(&self) -> &[ConfigLayer] {
        &self.0
    }

    /// Number of layers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no layers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the layers.
    pub fn iter(&self) -> std::slice::Iter<'_, ConfigLayer> {
        self.0.iter()
    }

    /// Finds a layer by name.
    #[must_use]
    pub fn layer(&self, name: &str) -> Option<&ConfigLayer> {
        self.0.iter().find(|l| l.name.as_deref() == Some(name))
    }

    /// Renders the config as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if a passthrough value cannot be serialized.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl Extend<ConfigLayer> for FlatConfig {
    fn extend<T: IntoIterator<Item = ConfigLayer>>(&mut self, iter: T) {
        self.0.extend(iter);
    }
}

impl IntoIterator for FlatConfig {
    type Item = ConfigLayer;
    type IntoIter = std::vec::IntoIter<ConfigLayer>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a FlatConfig {
    type Item = &'a ConfigLayer;
    type IntoIter = std::slice::Iter<'a, ConfigLayer>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn rule_entry_without_options_is_bare_level() {
        let entry = RuleEntry::new(RuleLevel::Warn);
        assert_eq!(serde_json::to_value(&entry).unwrap(), json!("warn"));
    }

    #[test]
    fn rule_entry_with_options_is_array() {
        let entry = RuleEntry::new(RuleLevel::Warn)
            .with_option(json!("any"))
            .with_option(json!({ "startLines": 1 }));
        assert_eq!(
            serde_json::to_value(&entry).unwrap(),
            json!(["warn", "any", { "startLines": 1 }])
        );
    }

    #[test]
    fn rule_entry_accepts_numeric_levels() {
        let entry: RuleEntry = serde_json::from_value(json!(2)).unwrap();
        assert_eq!(entry.level, RuleLevel::Error);

        let entry: RuleEntry = serde_json::from_value(json!([0, { "a": 1 }])).unwrap();
        assert_eq!(entry.level, RuleLevel::Off);
        assert_eq!(entry.options, vec![json!({ "a": 1 })]);
    }

    #[test]
    fn rule_entry_rejects_unknown_level() {
        assert!(serde_json::from_value::<RuleEntry>(json!("loud")).is_err());
        assert!(serde_json::from_value::<RuleEntry>(json!([])).is_err());
        assert!(serde_json::from_value::<RuleEntry>(json!([{ "a": 1 }])).is_err());
    }

    #[test]
    fn empty_fields_are_omitted() {
        let layer = ConfigLayer::ignores_only(vec!["**/dist".into()]);
        assert_eq!(
            serde_json::to_value(&layer).unwrap(),
            json!({ "ignores": ["**/dist"] })
        );
        assert!(layer.is_global_ignore());
    }

    #[test]
    fn layer_fields_are_camel_case() {
        let mut layer = ConfigLayer::named("x");
        layer.language_options = Some(json!({ "ecmaVersion": 2022 }));
        let value = serde_json::to_value(&layer).unwrap();
        assert!(value.get("languageOptions").is_some());
        assert!(!layer.is_global_ignore());
    }

    #[test]
    fn find_layer_by_name() {
        let mut config = FlatConfig::new();
        config.push(ConfigLayer::named("a"));
        config.push(ConfigLayer::named("b").files(["**/*.ts"]));
        assert_eq!(config.len(), 2);
        assert_eq!(config.layer("b").unwrap().files, vec!["**/*.ts"]);
        assert!(config.layer("c").is_none());
    }
}
