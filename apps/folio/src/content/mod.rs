//! Content fetching: retrieves the JSON document behind each section.
//!
//! Backends implement `ContentSource`. Callers go through [`load`], which
//! folds every failure into `None` plus one diagnostic so a failed document
//! only ever degrades its own section.

pub mod embedded;
pub mod fs;
pub mod http;

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;
use tracing::error;

pub use embedded::EmbeddedSource;
pub use fs::FsSource;
pub use http::HttpSource;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP status {status}")]
    Status { status: u16 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid path '{path}': {reason}")]
    InvalidPath { path: String, reason: String },

    #[error("no document for key '{0}'")]
    NotFound(String),
}

/// A place content documents can be fetched from.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Fetches and parses the document at `path`. The value is not checked
    /// against any section shape.
    async fn fetch(&self, path: &str) -> Result<Value, FetchError>;

    /// Human-readable origin, for logs.
    fn describe(&self) -> String;
}

/// Loads one document, returning `None` on any failure.
///
/// Each failure emits exactly one error record carrying the requested path.
/// There is no retry.
pub async fn load(source: &dyn ContentSource, path: &str) -> Option<Value> {
    match source.fetch(path).await {
        Ok(value) => Some(value),
        Err(e) => {
            error!(path, source = %source.describe(), "Error loading content: {e}");
            None
        }
    }
}

/// Picks a backend for a content location.
///
/// `http://` / `https://` URLs are fetched over the network, a path ending in
/// `.json` is read as a bundle, anything else is a directory root.
pub async fn source_from_location(
    location: &str,
    timeout: Duration,
) -> Result<Arc<dyn ContentSource>> {
    if location.starts_with("http://") || location.starts_with("https://") {
        return Ok(Arc::new(HttpSource::new(location, timeout)?));
    }
    let path = Path::new(location);
    if path.extension().is_some_and(|ext| ext == "json") {
        return Ok(Arc::new(EmbeddedSource::from_file(path).await?));
    }
    Ok(Arc::new(FsSource::new(path)))
}
