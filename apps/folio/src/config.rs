use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed numbers fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the page template and its static assets.
    pub site_root: PathBuf,
    /// Where content documents come from: a URL, a bundle file, or a directory.
    pub content_base: String,
    pub template_path: PathBuf,
    pub port: u16,
    pub fetch_timeout: Duration,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let site_root = PathBuf::from(lookup("SITE_ROOT").unwrap_or_else(|| ".".to_string()));
        let content_base = lookup("CONTENT_BASE")
            .unwrap_or_else(|| site_root.to_string_lossy().into_owned());
        let template_path = lookup("TEMPLATE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| site_root.join("index.html"));

        Ok(Config {
            port: lookup("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            fetch_timeout: Duration::from_secs(
                lookup("FETCH_TIMEOUT_SECS")
                    .unwrap_or_else(|| "10".to_string())
                    .parse::<u64>()
                    .context("FETCH_TIMEOUT_SECS must be a whole number of seconds")?,
            ),
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            site_root,
            content_base,
            template_path,
        })
    }
}
