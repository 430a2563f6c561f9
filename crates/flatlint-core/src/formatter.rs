//! Prettier options shared by every project.

use serde::{Deserialize, Serialize};

/// Quoting of object property names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuoteProps {
    /// Quote only where required.
    AsNeeded,
    /// Quote all if any requires it.
    Consistent,
    /// Keep input quoting.
    Preserve,
}

/// Where trailing commas are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrailingComma {
    /// Wherever valid.
    All,
    /// Where valid in ES5.
    Es5,
    /// Never.
    None,
}

/// Parentheses around a sole arrow function parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArrowParens {
    /// Always add them.
    Always,
    /// Omit when possible.
    Avoid,
}

/// Line endings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EndOfLine {
    /// `\n`
    Lf,
    /// `\r\n`
    Crlf,
    /// `\r`
    Cr,
    /// Keep existing.
    Auto,
}

/// Prose wrapping in Markdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProseWrap {
    /// Wrap at print width.
    Always,
    /// Unwrap into one line per paragraph.
    Never,
    /// Keep as-is.
    Preserve,
}

/// Prettier configuration, serialized with Prettier's option names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(clippy::struct_excessive_bools)]
pub struct FormatterConfig {
    /// Line length the printer wraps at.
    pub print_width: u32,
    /// Spaces per indentation level.
    pub tab_width: u32,
    /// Indent with tabs.
    pub use_tabs: bool,
    /// Print semicolons at statement ends.
    pub semi: bool,
    /// Prefer single quotes.
    pub single_quote: bool,
    /// Object property quoting.
    pub quote_props: QuoteProps,
    /// Trailing comma placement.
    pub trailing_comma: TrailingComma,
    /// Spaces inside object literal braces.
    pub bracket_spacing: bool,
    /// Arrow function parameter parentheses.
    pub arrow_parens: ArrowParens,
    /// Line ending style.
    pub end_of_line: EndOfLine,
    /// Prefer single quotes in JSX.
    pub jsx_single_quote: bool,
    /// Put the `>` of multi-line JSX elements on the last line.
    pub bracket_same_line: bool,
    /// Markdown prose wrapping.
    pub prose_wrap: ProseWrap,
    /// Use the experimental ternary formatting.
    pub experimental_ternaries: bool,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            print_width: 80,
            tab_width: 2,
            use_tabs: true,
            semi: false,
            single_quote: false,
            quote_props: QuoteProps::AsNeeded,
            trailing_comma: TrailingComma::All,
            bracket_spacing: true,
            arrow_parens: ArrowParens::Always,
            end_of_line: EndOfLine::Lf,
            jsx_single_quote: false,
            bracket_same_line: false,
            prose_wrap: ProseWrap::Never,
            experimental_ternaries: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_prettier_option_names() {
        let value = serde_json::to_value(FormatterConfig::default()).unwrap();
        assert_eq!(value["printWidth"], json!(80));
        assert_eq!(value["useTabs"], json!(true));
        assert_eq!(value["semi"], json!(false));
        assert_eq!(value["quoteProps"], json!("as-needed"));
        assert_eq!(value["trailingComma"], json!("all"));
        assert_eq!(value["endOfLine"], json!("lf"));
        assert_eq!(value["proseWrap"], json!("never"));
        assert_eq!(value["experimentalTernaries"], json!(true));
        assert_eq!(value.as_object().unwrap().len(), 14);
    }
}
