use std::path::PathBuf;

use figma_tokens_core::{extract_all, Category, DesignTokens};
use tracing::info;

pub mod compile;
pub mod config;
mod error;
pub mod format;
pub mod source;

pub use config::Config;
pub use error::{Error, Result};
pub use source::{DocumentSource, FigmaApiSource, FileSource};

/// Fetches the document and extracts the selected categories.
pub fn extract_tokens(
    source: &dyn DocumentSource,
    categories: &[Category],
) -> Result<DesignTokens> {
    let file = source.fetch()?;
    let tokens = extract_all(&file, categories)?;
    info!(tokens = tokens.len(), "Extraction complete");
    Ok(tokens)
}

/// Extracts and compiles; returns the stylesheet files written.
pub fn build(source: &dyn DocumentSource, config: &Config) -> Result<Vec<PathBuf>> {
    let tokens = extract_tokens(source, &config.categories)?;
    compile::compile_tokens(&tokens, config)
}
