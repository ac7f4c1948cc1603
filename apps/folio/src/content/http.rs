use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde_json::Value;
use tracing::debug;

use super::{ContentSource, FetchError};

/// Fetches documents relative to a base URL.
#[derive(Clone)]
pub struct HttpSource {
    client: Client,
    base: Url,
}

impl HttpSource {
    pub fn new(base: &str, timeout: Duration) -> Result<Self, FetchError> {
        // Without a trailing slash `Url::join` would replace the last segment.
        let base = if base.ends_with('/') {
            base.to_string()
        } else {
            format!("{base}/")
        };
        let base = Url::parse(&base).map_err(|e| FetchError::InvalidPath {
            path: base.clone(),
            reason: e.to_string(),
        })?;
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base })
    }
}

#[async_trait]
impl ContentSource for HttpSource {
    async fn fetch(&self, path: &str) -> Result<Value, FetchError> {
        let url = self.base.join(path).map_err(|e| FetchError::InvalidPath {
            path: path.to_string(),
            reason: e.to_string(),
        })?;

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        debug!("Fetched {} ({} bytes)", url, body.len());
        Ok(serde_json::from_slice(&body)?)
    }

    fn describe(&self) -> String {
        self.base.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{routing::get, Router};
    use serde_json::json;

    async fn spawn_server() -> String {
        let app = Router::new()
            .route(
                "/site/data/about.json",
                get(|| async { r#"{"summary":{"title":"T"}}"# }),
            )
            .route("/site/data/broken.json", get(|| async { "{not json" }));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}/site")
    }

    #[tokio::test]
    async fn test_fetch_success_joins_relative_path() {
        let base = spawn_server().await;
        let source = HttpSource::new(&base, Duration::from_secs(5)).unwrap();
        let value = source.fetch("data/about.json").await.unwrap();
        assert_eq!(value, json!({ "summary": { "title": "T" } }));
    }

    #[tokio::test]
    async fn test_non_success_status_is_failure() {
        let base = spawn_server().await;
        let source = HttpSource::new(&base, Duration::from_secs(5)).unwrap();
        let err = source.fetch("data/missing.json").await.unwrap_err();
        assert!(matches!(err, FetchError::Status { status: 404 }));
    }

    #[tokio::test]
    async fn test_malformed_body_is_failure() {
        let base = spawn_server().await;
        let source = HttpSource::new(&base, Duration::from_secs(5)).unwrap();
        let err = source.fetch("data/broken.json").await.unwrap_err();
        assert!(matches!(err, FetchError::Parse(_)));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_failure() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let source = HttpSource::new(&format!("http://{addr}"), Duration::from_secs(5)).unwrap();
        let err = source.fetch("data/about.json").await.unwrap_err();
        assert!(matches!(err, FetchError::Http(_)));
    }

    #[test]
    fn test_invalid_base_url() {
        let err = HttpSource::new("http://", Duration::from_secs(1)).err().unwrap();
        assert!(matches!(err, FetchError::InvalidPath { .. }));
    }
}
