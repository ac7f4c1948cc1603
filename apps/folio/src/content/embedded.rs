use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde_json::Value;

use super::{ContentSource, FetchError};

/// Serves documents from an in-memory bundle keyed by section name.
///
/// A request for `data/about.json` looks up the key `about` (the file stem).
#[derive(Debug, Clone)]
pub struct EmbeddedSource {
    documents: HashMap<String, Value>,
    origin: Option<PathBuf>,
}

impl EmbeddedSource {
    pub fn new(documents: HashMap<String, Value>) -> Self {
        Self {
            documents,
            origin: None,
        }
    }

    /// Loads a bundle written by `folio bundle`.
    pub async fn from_file(path: &Path) -> Result<Self> {
        let raw = tokio::fs::read(path)
            .await
            .with_context(|| format!("Failed to read content bundle {}", path.display()))?;
        let documents: HashMap<String, Value> = serde_json::from_slice(&raw)
            .with_context(|| format!("Content bundle {} is not a JSON object", path.display()))?;
        Ok(Self {
            documents,
            origin: Some(path.to_path_buf()),
        })
    }
}

fn bundle_key(path: &str) -> Option<&str> {
    Path::new(path).file_stem().and_then(|s| s.to_str())
}

#[async_trait]
impl ContentSource for EmbeddedSource {
    async fn fetch(&self, path: &str) -> Result<Value, FetchError> {
        let key = bundle_key(path).ok_or_else(|| FetchError::InvalidPath {
            path: path.to_string(),
            reason: "no file name".to_string(),
        })?;
        self.documents
            .get(key)
            .cloned()
            .ok_or_else(|| FetchError::NotFound(key.to_string()))
    }

    fn describe(&self) -> String {
        match &self.origin {
            Some(path) => format!("bundle:{}", path.display()),
            None => "bundle:<memory>".to_string(),
        }
    }
}
