//! External presets and plugins referenced by the flat config.
//!
//! These are opaque to flatlint: the config only names them, and the
//! consuming tool resolves each name to the preset shipped by its package.

/// A preset config provided by an external package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    /// `@eslint/js` recommended rules.
    JsRecommended,
    /// `typescript-eslint` stylistic rules.
    TsStylistic,
    /// `typescript-eslint` strict rules.
    TsStrict,
    /// `typescript-eslint` stylistic rules that need type information.
    TsStylisticTypeCheckedOnly,
    /// `typescript-eslint` strict rules that need type information.
    TsStrictTypeCheckedOnly,
    /// `eslint-plugin-jsx-a11y` strict flat config.
    JsxA11yStrict,
    /// `eslint-plugin-react-hooks` recommended rules.
    ReactHooksRecommended,
    /// `eslint-config-prettier`, turning off rules that fight the formatter.
    Prettier,
}

impl Preset {
    /// Every preset, in the order the config uses them.
    pub const ALL: [Self; 8] = [
        Self::JsRecommended,
        Self::TsStylistic,
        Self::TsStrict,
        Self::TsStylisticTypeCheckedOnly,
        Self::TsStrictTypeCheckedOnly,
        Self::JsxA11yStrict,
        Self::ReactHooksRecommended,
        Self::Prettier,
    ];

    /// The package providing this preset.
    #[must_use]
    pub fn package(self) -> &'static str {
        match self {
            Self::JsRecommended => "@eslint/js",
            Self::TsStylistic
            | Self::TsStrict
            | Self::TsStylisticTypeCheckedOnly
            | Self::TsStrictTypeCheckedOnly => "typescript-eslint",
            Self::JsxA11yStrict => "eslint-plugin-jsx-a11y",
            Self::ReactHooksRecommended => "eslint-plugin-react-hooks",
            Self::Prettier => "eslint-config-prettier",
        }
    }

    /// The preset's name within its package, if the package has several.
    #[must_use]
    pub fn config_name(self) -> Option<&'static str> {
        match self {
            Self::JsRecommended | Self::ReactHooksRecommended => Some("recommended"),
            Self::TsStylistic => Some("stylistic"),
            Self::TsStrict | Self::JsxA11yStrict => Some("strict"),
            Self::TsStylisticTypeCheckedOnly => Some("stylisticTypeCheckedOnly"),
            Self::TsStrictTypeCheckedOnly => Some("strictTypeCheckedOnly"),
            Self::Prettier => None,
        }
    }

    /// Reference written into a layer's `extends`, e.g. `typescript-eslint:strict`.
    #[must_use]
    pub fn reference(self) -> String {
        match self.config_name() {
            Some(name) => format!("{}:{name}", self.package()),
            None => self.package().to_string(),
        }
    }
}

impl std::fmt::Display for Preset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.reference())
    }
}

/// A plugin registered under a short alias.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Plugin {
    /// Import/export sorting.
    Imports,
    /// Deprecated API usage.
    Deprecation,
    /// JSDoc checks.
    Jsdoc,
    /// Assorted modern-JS rules.
    Unicorn,
    /// React hooks rules.
    ReactHooks,
}

impl Plugin {
    /// Alias used as the rule prefix, e.g. `imports` in `imports/imports`.
    #[must_use]
    pub fn alias(self) -> &'static str {
        match self {
            Self::Imports => "imports",
            Self::Deprecation => "deprecation",
            Self::Jsdoc => "jsdoc",
            Self::Unicorn => "unicorn",
            Self::ReactHooks => "react-hooks",
        }
    }

    /// The npm package providing the plugin.
    #[must_use]
    pub fn package(self) -> &'static str {
        match self {
            Self::Imports => "eslint-plugin-simple-import-sort",
            Self::Deprecation => "eslint-plugin-deprecation",
            Self::Jsdoc => "eslint-plugin-jsdoc",
            Self::Unicorn => "eslint-plugin-unicorn",
            Self::ReactHooks => "eslint-plugin-react-hooks",
        }
    }
}

/// Plugins registered by the base layer.
pub const BASE_PLUGINS: [Plugin; 4] = [
    Plugin::Imports,
    Plugin::Deprecation,
    Plugin::Jsdoc,
    Plugin::Unicorn,
];
