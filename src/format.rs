//! Stylesheet formats for a compiled token set.

use convert_case::{Case, Casing};
use figma_tokens_core::{slugify, DesignTokens, Token, TokenOrGroup};
use indexmap::IndexMap;
use itertools::Itertools;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Format {
    /// Flat `!default` variables plus a nested map referencing them.
    ScssMapDeep { map_name: String },
    /// Custom properties on `:root`.
    CssVariables,
}
impl Format {
    pub fn scss_map_deep() -> Self {
        Format::ScssMapDeep {
            map_name: "tokens".to_string(),
        }
    }
    pub fn render(&self, tokens: &DesignTokens) -> String {
        match self {
            Format::ScssMapDeep { map_name } => scss_map_deep(tokens, map_name),
            Format::CssVariables => css_variables(tokens),
        }
    }
}

/// Kebab case of the whole token path: `Brand/Primary` becomes `brand-primary`.
pub fn token_name(path: &[String]) -> String {
    slugify(&path.join(" "), " ").to_case(Case::Kebab)
}

fn scss_map_deep(tokens: &DesignTokens, map_name: &str) -> String {
    let variables = tokens
        .leaves()
        .into_iter()
        .map(|(path, token)| format!("${}: {} !default;", token_name(&path), token.value.to_css()))
        .join("\n");
    let map = scss_map(&tokens.0, &mut Vec::new(), 1);
    format!("{variables}\n\n${map_name}: {map};\n")
}

fn scss_map(group: &IndexMap<String, TokenOrGroup>, path: &mut Vec<String>, depth: usize) -> String {
    let indent = "  ".repeat(depth);
    let entries = group
        .iter()
        .map(|(key, value)| {
            path.push(key.clone());
            let entry = match value {
                TokenOrGroup::Token(_) => format!("{indent}'{}': ${}", scss_key(key), token_name(path)),
                TokenOrGroup::Group(inner) => {
                    format!("{indent}'{}': {}", scss_key(key), scss_map(inner, path, depth + 1))
                }
            };
            path.pop();
            entry
        })
        .join(",\n");
    format!("(\n{entries}\n{})", "  ".repeat(depth - 1))
}

fn scss_key(key: &str) -> String {
    key.replace('\'', "\\'")
}

fn css_variables(tokens: &DesignTokens) -> String {
    let inner = tokens
        .leaves()
        .into_iter()
        .map(|(path, token)| css_entry(&path, token))
        .join("\n");
    format!(":root {{\n{inner}\n}}\n")
}

fn css_entry(path: &[String], token: &Token) -> String {
    format!("  --{}: {};", token_name(path), token.value.to_css())
}
