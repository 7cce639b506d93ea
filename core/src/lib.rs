use std::fmt;

use indexmap::IndexMap;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

pub mod document;
mod error;
pub mod extractors;

pub use document::FileResponse;
pub use error::{Error, Result};
pub use extractors::{extract_all, Category};

/// An ordered token set in the Style Dictionary source shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DesignTokens(pub IndexMap<String, TokenOrGroup>);
impl DesignTokens {
    pub fn new() -> Self {
        Self::default()
    }
    /// Last write wins; the name keeps its first position.
    pub fn insert(&mut self, name: impl Into<String>, entry: impl Into<TokenOrGroup>) {
        self.0.insert(name.into(), entry.into());
    }
    /// Shallow union, `other` wins on collision.
    pub fn merge(mut self, other: DesignTokens) -> Self {
        self.0.extend(other.0);
        self
    }
    pub fn get(&self, name: &str) -> Option<&TokenOrGroup> {
        self.0.get(name)
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    /// Every token with its path from the root, depth first.
    pub fn leaves(&self) -> Vec<(Vec<String>, &Token)> {
        let mut out = Vec::new();
        for (key, value) in &self.0 {
            value.collect_leaves(&mut vec![key.clone()], &mut out);
        }
        out
    }
    /// Keeps only the tokens matching `keep`, dropping groups left empty.
    pub fn filter(&self, keep: impl Fn(&Token) -> bool + Copy) -> DesignTokens {
        DesignTokens(
            self.0
                .iter()
                .filter_map(|(key, value)| Some((key.clone(), value.filter(keep)?)))
                .collect(),
        )
    }
}
impl FromIterator<(String, TokenOrGroup)> for DesignTokens {
    fn from_iter<T: IntoIterator<Item = (String, TokenOrGroup)>>(iter: T) -> Self {
        DesignTokens(iter.into_iter().collect())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    Color,
    Typography,
    Shadows,
    Spacing,
}
impl TokenType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenType::Color => "color",
            TokenType::Typography => "typography",
            TokenType::Shadows => "shadows",
            TokenType::Spacing => "spacing",
        }
    }
}
impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub value: TokenValue,
    #[serde(rename = "type")]
    pub type_: TokenType,
}
impl Token {
    pub fn new(value: impl Into<TokenValue>, type_: TokenType) -> Self {
        Self {
            value: value.into(),
            type_,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TokenOrGroup {
    Token(Token),
    Group(IndexMap<String, TokenOrGroup>),
}
impl TokenOrGroup {
    pub fn as_token(&self) -> Option<&Token> {
        match self {
            TokenOrGroup::Token(token) => Some(token),
            TokenOrGroup::Group(_) => None,
        }
    }
    pub fn get(&self, key: &str) -> Option<&TokenOrGroup> {
        match self {
            TokenOrGroup::Token(_) => None,
            TokenOrGroup::Group(group) => group.get(key),
        }
    }
    fn collect_leaves<'a>(&'a self, path: &mut Vec<String>, out: &mut Vec<(Vec<String>, &'a Token)>) {
        match self {
            TokenOrGroup::Token(token) => out.push((path.clone(), token)),
            TokenOrGroup::Group(group) => {
                for (key, value) in group {
                    path.push(key.clone());
                    value.collect_leaves(path, out);
                    path.pop();
                }
            }
        }
    }
    fn filter(&self, keep: impl Fn(&Token) -> bool + Copy) -> Option<TokenOrGroup> {
        match self {
            TokenOrGroup::Token(token) => keep(token).then(|| self.clone()),
            TokenOrGroup::Group(group) => {
                let group: IndexMap<_, _> = group
                    .iter()
                    .filter_map(|(key, value)| Some((key.clone(), value.filter(keep)?)))
                    .collect();
                (!group.is_empty()).then_some(TokenOrGroup::Group(group))
            }
        }
    }
}
impl From<Token> for TokenOrGroup {
    fn from(token: Token) -> Self {
        TokenOrGroup::Token(token)
    }
}
impl From<IndexMap<String, TokenOrGroup>> for TokenOrGroup {
    fn from(group: IndexMap<String, TokenOrGroup>) -> Self {
        TokenOrGroup::Group(group)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TokenValue {
    Integer(i64),
    Number(f64),
    Text(String),
}
impl TokenValue {
    pub fn to_css(&self) -> String {
        match self {
            TokenValue::Integer(value) => value.to_string(),
            TokenValue::Number(value) => value.to_string(),
            TokenValue::Text(value) => value.clone(),
        }
    }
}
/// Whole numbers are kept integral so they serialize as `400`, not `400.0`.
impl From<f64> for TokenValue {
    fn from(value: f64) -> Self {
        if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
            TokenValue::Integer(value as i64)
        } else {
            TokenValue::Number(value)
        }
    }
}
impl From<String> for TokenValue {
    fn from(value: String) -> Self {
        TokenValue::Text(value)
    }
}
impl From<&str> for TokenValue {
    fn from(value: &str) -> Self {
        TokenValue::Text(value.to_string())
    }
}

/// Style names look like `Heading / H1 (Bold)`; transliterate them and join
/// the alphanumeric runs with `sep`. Punctuation only ever separates.
pub fn slugify(s: &str, sep: &str) -> String {
    deunicode::deunicode(s)
        .to_ascii_lowercase()
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .join(sep)
}
