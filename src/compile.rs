//! Hands an extracted token set to the stylesheet build.
//!
//! The tokens are written as `token.json` into a temporary source directory,
//! read back from there, and rendered into one file per filtered output.

use std::path::{Path, PathBuf};

use figma_tokens_core::{DesignTokens, TokenType};
use tracing::{debug, info, warn};

use crate::{config::Config, format::Format, Error, Result};

pub const SOURCE_FILE_NAME: &str = "token.json";

#[derive(Debug, Clone, PartialEq)]
pub struct Platform {
    pub build_path: PathBuf,
    pub files: Vec<FileConfig>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FileConfig {
    pub destination: String,
    pub format: Format,
    pub filter: TokenType,
}

/// The `scss` platform: color and typography maps, plus CSS color variables
/// when enabled.
pub fn scss_platform(config: &Config) -> Platform {
    let mut files = vec![
        FileConfig {
            destination: "_colors.scss".to_string(),
            format: Format::scss_map_deep(),
            filter: TokenType::Color,
        },
        FileConfig {
            destination: "_typography.scss".to_string(),
            format: Format::scss_map_deep(),
            filter: TokenType::Typography,
        },
    ];
    if config.colors.include_css_variables {
        files.push(FileConfig {
            destination: "_colors.variables.css".to_string(),
            format: Format::CssVariables,
            filter: TokenType::Color,
        });
    }
    Platform {
        build_path: config.scss_folder(),
        files,
    }
}

/// Returns the paths of the files written.
pub fn compile_tokens(tokens: &DesignTokens, config: &Config) -> Result<Vec<PathBuf>> {
    let source_dir = tempfile::Builder::new()
        .prefix("style-dictionary")
        .tempdir()
        .map_err(|e| Error::io(e, std::env::temp_dir()))?;
    let token_file = source_dir.path().join(SOURCE_FILE_NAME);
    let json = serde_json::to_string(tokens).map_err(|e| Error::json(e, SOURCE_FILE_NAME))?;
    std::fs::write(&token_file, json).map_err(|e| Error::io(e, &token_file))?;
    debug!(path = %token_file.display(), "wrote token source");

    let source = load_sources(source_dir.path())?;
    let written = build_platform(&source, &scss_platform(config))?;

    source_dir
        .close()
        .map_err(|e| Error::io(e, std::env::temp_dir()))?;
    Ok(written)
}

/// Merges every `*.json` below `dir`, in path order.
pub fn load_sources(dir: &Path) -> Result<DesignTokens> {
    let pattern = dir.join("**").join("*.json");
    let mut paths = glob::glob(&pattern.to_string_lossy())?
        .map(|entry| {
            entry.map_err(|e| {
                let path = e.path().to_path_buf();
                Error::io(e.into_error(), path)
            })
        })
        .collect::<Result<Vec<PathBuf>>>()?;
    paths.sort();

    paths.into_iter().try_fold(DesignTokens::new(), |tokens, path| {
        let content = std::fs::read_to_string(&path).map_err(|e| Error::io(e, &path))?;
        let source: DesignTokens = serde_json::from_str(&content)
            .map_err(|e| Error::json(e, path.display().to_string()))?;
        Ok(tokens.merge(source))
    })
}

pub fn build_platform(tokens: &DesignTokens, platform: &Platform) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(&platform.build_path)
        .map_err(|e| Error::io(e, &platform.build_path))?;

    let mut written = Vec::new();
    for file in &platform.files {
        let selected = tokens.filter(|token| token.type_ == file.filter);
        if selected.is_empty() {
            warn!(destination = %file.destination, filter = %file.filter, "no tokens matched, skipping");
            continue;
        }
        let path = platform.build_path.join(&file.destination);
        std::fs::write(&path, file.format.render(&selected)).map_err(|e| Error::io(e, &path))?;
        info!(path = %path.display(), "wrote {}", file.destination);
        written.push(path);
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_variables_are_opt_in() {
        let mut config = Config::default();
        let destinations = |platform: Platform| {
            platform
                .files
                .into_iter()
                .map(|file| file.destination)
                .collect::<Vec<_>>()
        };
        assert_eq!(
            destinations(scss_platform(&config)),
            vec!["_colors.scss", "_typography.scss"]
        );

        config.colors.include_css_variables = true;
        let platform = scss_platform(&config);
        assert_eq!(platform.build_path, PathBuf::from("design-tokens/scss"));
        assert_eq!(
            destinations(platform),
            vec!["_colors.scss", "_typography.scss", "_colors.variables.css"]
        );
    }

    #[test]
    fn load_sources_merges_nested_json_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("nested")).unwrap();
        std::fs::write(
            dir.path().join("a.json"),
            r##"{ "Red": { "value": "#ff0000", "type": "color" } }"##,
        )
        .unwrap();
        std::fs::write(
            dir.path().join("nested").join("b.json"),
            r##"{ "Red": { "value": "#ee0000", "type": "color" }, "Gap": { "value": "4px", "type": "spacing" } }"##,
        )
        .unwrap();
        std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let tokens = load_sources(dir.path()).unwrap();
        assert_eq!(tokens.len(), 2);
        assert_eq!(
            tokens.get("Red").and_then(|t| t.as_token()).unwrap().value.to_css(),
            "#ee0000"
        );
    }

    #[cfg(unix)]
    #[test]
    fn unreadable_source_fails_the_load() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("a.json"),
            r##"{ "Red": { "value": "#ff0000", "type": "color" } }"##,
        )
        .unwrap();
        std::os::unix::fs::symlink(dir.path().join("missing"), dir.path().join("b.json")).unwrap();

        let err = load_sources(dir.path()).unwrap_err();
        assert!(matches!(err, Error::Io { path, .. } if path.ends_with("b.json")));
    }
}
