use std::path::{Path, PathBuf};

use figma_tokens_core::Category;
use serde::Deserialize;
use tracing::debug;

use crate::{Error, Result};

pub const DEFAULT_CONFIG_FILE: &str = "figma-tokens.toml";
pub const TOKEN_ENV: &str = "FIGMA_TOKEN";
pub const FILE_KEY_ENV: &str = "FIGMA_FILE_KEY";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub output_folder: PathBuf,
    pub categories: Vec<Category>,
    pub figma: FigmaConfig,
    pub colors: ColorsConfig,
}
impl Default for Config {
    fn default() -> Self {
        Self {
            output_folder: PathBuf::from("design-tokens"),
            categories: Category::ALL.to_vec(),
            figma: FigmaConfig::default(),
            colors: ColorsConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FigmaConfig {
    pub file_key: Option<String>,
    pub api_base: String,
    /// Only ever read from the environment.
    #[serde(skip)]
    pub access_token: Option<String>,
}
impl Default for FigmaConfig {
    fn default() -> Self {
        Self {
            file_key: None,
            api_base: "https://api.figma.com".to_string(),
            access_token: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorsConfig {
    pub include_css_variables: bool,
}

impl Config {
    /// Loads `path`, or `figma-tokens.toml` in the working directory when no
    /// path is given. Only the implicit default file may be absent.
    pub fn load(path: Option<&Path>) -> Result<Config> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if path.exists() {
                    Self::from_file(path)?
                } else {
                    debug!("no {DEFAULT_CONFIG_FILE} found, using defaults");
                    Config::default()
                }
            }
        };
        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Config> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(e, path))?;
        let config = Self::from_toml(&content).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn from_toml(content: &str) -> std::result::Result<Config, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(token) = lookup(TOKEN_ENV).filter(|token| !token.is_empty()) {
            self.figma.access_token = Some(token);
        }
        if let Some(key) = lookup(FILE_KEY_ENV).filter(|key| !key.is_empty()) {
            self.figma.file_key = Some(key);
        }
    }

    pub fn scss_folder(&self) -> PathBuf {
        self.output_folder.join("scss")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_all_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.categories, Category::ALL.to_vec());
        assert!(!config.colors.include_css_variables);
        assert_eq!(config.scss_folder(), PathBuf::from("design-tokens/scss"));
    }

    #[test]
    fn parses_all_sections() {
        let config = Config::from_toml(
            r#"
            output_folder = "out"
            categories = ["colors", "fonts"]

            [figma]
            file_key = "abc123"
            api_base = "http://localhost:9000"

            [colors]
            include_css_variables = true
            "#,
        )
        .unwrap();
        assert_eq!(config.output_folder, PathBuf::from("out"));
        assert_eq!(config.categories, vec![Category::Colors, Category::Fonts]);
        assert_eq!(config.figma.file_key.as_deref(), Some("abc123"));
        assert_eq!(config.figma.api_base, "http://localhost:9000");
        assert!(config.colors.include_css_variables);
    }

    #[test]
    fn unknown_keys_and_categories_are_rejected() {
        assert!(Config::from_toml("outputFolder = \"x\"").is_err());
        assert!(Config::from_toml("categories = [\"icons\"]").is_err());
    }

    #[test]
    fn environment_overrides_file_key_and_supplies_token() {
        let mut config = Config::from_toml("[figma]\nfile_key = \"from-file\"").unwrap();
        config.apply_env(|key| match key {
            TOKEN_ENV => Some("secret".to_string()),
            FILE_KEY_ENV => Some("from-env".to_string()),
            _ => None,
        });
        assert_eq!(config.figma.access_token.as_deref(), Some("secret"));
        assert_eq!(config.figma.file_key.as_deref(), Some("from-env"));

        let mut config = Config::default();
        config.apply_env(|_| Some(String::new()));
        assert_eq!(config.figma.access_token, None);
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(Some(dir.path().join("nope.toml").as_path())).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
