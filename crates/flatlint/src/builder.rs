//! Assembly of the complete flat config array.

use flatlint_core::{ConfigLayer, FlatConfig, Filesystem, IgnoreResolver, Options, OsFilesystem};
use flatlint_rules::{
    base_rules, docs_rules, jsdoc_settings, typescript_rules, Plugin, Preset, BASE_PLUGINS,
};
use serde_json::{json, Value};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Name of the layer applying to every source file.
pub const BASE_LAYER: &str = "flatlint/base";
/// Name of the type-aware TypeScript layer.
pub const TYPESCRIPT_LAYER: &str = "flatlint/typescript";
/// Name of the JSX/React layer.
pub const JSX_LAYER: &str = "flatlint/jsx";
/// Name of the documentation layer.
pub const DOCS_LAYER: &str = "flatlint/docs";
/// Name of the final formatter-compatibility layer.
pub const PRETTIER_LAYER: &str = "flatlint/prettier";

const SOURCE_EXTENSIONS: [&str; 4] = ["ts", "js", "tsx", "jsx"];

/// Builder for the flat config array.
///
/// Layers come out in a fixed order: ignores, base, typescript, jsx, docs,
/// caller layers, prettier.
#[derive(Debug, Clone)]
pub struct FlatConfigBuilder<F = OsFilesystem> {
    fs: F,
    root: Option<PathBuf>,
    ignores: Vec<String>,
    ignore_file: String,
    max_ignore_depth: Option<usize>,
    docs: Vec<String>,
    layers: Vec<ConfigLayer>,
}

impl Default for FlatConfigBuilder<OsFilesystem> {
    fn default() -> Self {
        Self::new()
    }
}

impl FlatConfigBuilder<OsFilesystem> {
    /// Creates a builder with default options.
    #[must_use]
    pub fn new() -> Self {
        Self::from_options(Options::default())
    }

    /// Creates a builder from loaded options.
    #[must_use]
    pub fn from_options(options: Options) -> Self {
        Self {
            fs: OsFilesystem,
            root: options.root,
            ignores: options.ignores,
            ignore_file: options.ignore_file,
            max_ignore_depth: options.max_ignore_depth,
            docs: options.docs,
            layers: options.layers,
        }
    }
}

impl<F: Filesystem> FlatConfigBuilder<F> {
    /// Reads ignore files through another filesystem.
    #[must_use]
    pub fn filesystem<G: Filesystem>(self, fs: G) -> FlatConfigBuilder<G> {
        FlatConfigBuilder {
            fs,
            root: self.root,
            ignores: self.ignores,
            ignore_file: self.ignore_file,
            max_ignore_depth: self.max_ignore_depth,
            docs: self.docs,
            layers: self.layers,
        }
    }

    /// Sets the project root.
    #[must_use]
    pub fn root(mut self, path: impl Into<PathBuf>) -> Self {
        self.root = Some(path.into());
        self
    }

    /// Adds an explicit ignore glob, disabling `.gitignore` scanning.
    #[must_use]
    pub fn ignore(mut self, pattern: impl Into<String>) -> Self {
        self.ignores.push(pattern.into());
        self
    }

    /// Sets the ignore file name scanned when no explicit ignores are given.
    #[must_use]
    pub fn ignore_file(mut self, name: impl Into<String>) -> Self {
        self.ignore_file = name.into();
        self
    }

    /// Limits how many ancestors of the root are scanned for ignore files.
    #[must_use]
    pub fn max_ignore_depth(mut self, depth: usize) -> Self {
        self.max_ignore_depth = Some(depth);
        self
    }

    /// Replaces the directories whose exports must be documented.
    #[must_use]
    pub fn docs<I, S>(mut self, dirs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.docs = dirs.into_iter().map(Into::into).collect();
        self
    }

    /// Appends a caller layer.
    #[must_use]
    pub fn layer(mut self, layer: ConfigLayer) -> Self {
        self.layers.push(layer);
        self
    }

    /// Resolves only the ignores layer.
    #[must_use]
    pub fn ignores_layer(&self) -> Option<ConfigLayer> {
        let root = self.root.as_deref().unwrap_or_else(|| Path::new("."));
        let explicit = (!self.ignores.is_empty()).then_some(self.ignores.as_slice());

        let mut resolver = IgnoreResolver::with_filesystem(&self.fs).file_name(&self.ignore_file);
        if let Some(depth) = self.max_ignore_depth {
            resolver = resolver.max_depth(depth);
        }
        resolver.resolve(root, explicit)
    }

    /// Builds the flat config.
    #[must_use]
    pub fn build(&self) -> FlatConfig {
        let mut config = FlatConfig::new();

        if let Some(layer) = self.ignores_layer() {
            debug!("Ignoring {} globs", layer.ignores.len());
            config.push(layer);
        }
        config.push(base_layer(self.root.as_deref()));
        config.push(typescript_layer());
        config.push(jsx_layer());
        if let Some(layer) = docs_layer(&self.docs) {
            config.push(layer);
        }
        config.extend(self.layers.iter().cloned());
        config.push(ConfigLayer::named(PRETTIER_LAYER).extend(Preset::Prettier.reference()));

        debug!(
            "Built flat config with {} layers ({} from caller)",
            config.len(),
            self.layers.len()
        );
        config
    }
}

/// Builds the flat config from options plus extra caller layers.
#[must_use]
pub fn config(options: Options, layers: impl IntoIterator<Item = ConfigLayer>) -> FlatConfig {
    let mut builder = FlatConfigBuilder::from_options(options);
    builder.layers.extend(layers);
    builder.build()
}

fn source_globs(dir: &str) -> Vec<String> {
    SOURCE_EXTENSIONS
        .iter()
        .map(|ext| format!("{dir}/**/*.{ext}"))
        .collect()
}

fn base_layer(root: Option<&Path>) -> ConfigLayer {
    let mut parser_options = json!({
        "projectService": {
            "defaultProject": "./tsconfig.json",
            "allowDefaultProjectForFiles": ["./*.js"],
        },
    });
    if let Some(root) = root {
        parser_options["tsconfigRootDir"] = Value::String(root.to_string_lossy().into_owned());
    }

    let mut layer = ConfigLayer::named(BASE_LAYER)
        .files(SOURCE_EXTENSIONS.iter().map(|ext| format!("**/*.{ext}")))
        .extend(Preset::JsRecommended.reference())
        .extend(Preset::TsStylistic.reference())
        .extend(Preset::TsStrict.reference())
        .rules(base_rules());
    for plugin in BASE_PLUGINS {
        layer = layer.plugin(plugin.alias(), plugin.package());
    }
    layer.language_options = Some(json!({ "parserOptions": parser_options }));
    layer.settings = Some(jsdoc_settings());
    layer
}

fn typescript_layer() -> ConfigLayer {
    ConfigLayer::named(TYPESCRIPT_LAYER)
        .files(["**/*.ts", "**/*.tsx"])
        .extend(Preset::TsStylisticTypeCheckedOnly.reference())
        .extend(Preset::TsStrictTypeCheckedOnly.reference())
        .rules(typescript_rules())
}

fn jsx_layer() -> ConfigLayer {
    ConfigLayer::named(JSX_LAYER)
        .files(["**/*.tsx", "**/*.jsx"])
        .extend(Preset::JsxA11yStrict.reference())
        .extend(Preset::ReactHooksRecommended.reference())
        .plugin(Plugin::ReactHooks.alias(), Plugin::ReactHooks.package())
}

/// Layer requiring docs on exports under the given directories.
///
/// Returns `None` when `dirs` is empty.
#[must_use]
pub fn docs_layer(dirs: &[String]) -> Option<ConfigLayer> {
    if dirs.is_empty() {
        return None;
    }
    let files: Vec<String> = dirs
        .iter()
        .flat_map(|dir| source_globs(dir.trim_end_matches('/')))
        .collect();
    Some(ConfigLayer::named(DOCS_LAYER).files(files).rules(docs_rules()))
}
