use std::path::{Path, PathBuf};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Extract(#[from] figma_tokens_core::Error),

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error in {context}: {source}")]
    Json {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to parse config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Figma request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Figma API returned {status}: {body}")]
    FigmaApi { status: u16, body: String },

    #[error("Invalid token source pattern: {0}")]
    Pattern(#[from] glob::PatternError),
}

impl Error {
    pub fn io(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Error::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
    pub fn json(source: serde_json::Error, context: impl Into<String>) -> Self {
        Error::Json {
            context: context.into(),
            source,
        }
    }
    pub fn config(message: impl Into<String>) -> Self {
        Error::Config(message.into())
    }
}
