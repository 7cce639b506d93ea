//! Where the Figma document comes from.

use std::path::{Path, PathBuf};

use figma_tokens_core::FileResponse;
use tracing::info;

use crate::{config::FigmaConfig, Error, Result};

pub trait DocumentSource {
    fn fetch(&self) -> Result<FileResponse>;
}

/// A saved `GET /v1/files/:key` response.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}
impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}
impl DocumentSource for FileSource {
    fn fetch(&self) -> Result<FileResponse> {
        info!(path = %self.path.display(), "Loading figma document...");
        let content = std::fs::read_to_string(&self.path).map_err(|e| Error::io(e, &self.path))?;
        parse_document(&content, &self.path.display().to_string())
    }
}

#[derive(Debug, Clone)]
pub struct FigmaApiSource {
    api_base: String,
    file_key: String,
    access_token: String,
}
impl FigmaApiSource {
    pub fn new(
        api_base: impl Into<String>,
        file_key: impl Into<String>,
        access_token: impl Into<String>,
    ) -> Self {
        Self {
            api_base: api_base.into(),
            file_key: file_key.into(),
            access_token: access_token.into(),
        }
    }
    pub fn from_config(config: &FigmaConfig) -> Result<Self> {
        let file_key = config
            .file_key
            .as_deref()
            .ok_or_else(|| Error::config("no figma file key, set figma.file_key or FIGMA_FILE_KEY"))?;
        let access_token = config
            .access_token
            .as_deref()
            .ok_or_else(|| Error::config("no figma access token, set FIGMA_TOKEN"))?;
        Ok(Self::new(&config.api_base, file_key, access_token))
    }
    pub fn url(&self) -> String {
        format!(
            "{}/v1/files/{}",
            self.api_base.trim_end_matches('/'),
            self.file_key
        )
    }
}
impl DocumentSource for FigmaApiSource {
    fn fetch(&self) -> Result<FileResponse> {
        info!(file_key = %self.file_key, "Fetching figma document...");
        let response = reqwest::blocking::Client::new()
            .get(self.url())
            .header("X-Figma-Token", &self.access_token)
            .send()?;

        let status = response.status();
        let body = response.text()?;
        if !status.is_success() {
            return Err(Error::FigmaApi {
                status: status.as_u16(),
                body,
            });
        }
        parse_document(&body, &self.url())
    }
}

fn parse_document(content: &str, context: &str) -> Result<FileResponse> {
    let file: FileResponse =
        serde_json::from_str(content).map_err(|e| Error::json(e, context))?;
    info!(name = %file.name, "Figma document loaded");
    Ok(file)
}

/// A local document wins over the Figma API.
pub fn resolve(document: Option<&Path>, figma: &FigmaConfig) -> Result<Box<dyn DocumentSource>> {
    match document {
        Some(path) => Ok(Box::new(FileSource::new(path))),
        None => Ok(Box::new(FigmaApiSource::from_config(figma)?)),
    }
}
