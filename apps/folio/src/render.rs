use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::debug;

use crate::orchestrator::{Orchestrator, RenderReport};
use crate::page::Page;

/// One page load: parse the template, render every section into it and
/// serialize the result.
pub async fn render_page(
    orchestrator: &Orchestrator,
    template: &str,
) -> Result<(String, RenderReport)> {
    let page = Arc::new(
        Page::parse(template, &orchestrator.mount_keys())
            .context("Failed to parse page template")?,
    );
    debug!(
        "Template has {} of {} mount points",
        page.mount_keys().count(),
        orchestrator.mount_keys().len()
    );
    let report = orchestrator.render_all(Arc::clone(&page)).await;
    Ok((page.to_html(), report))
}

pub async fn read_template(path: &Path) -> Result<String> {
    tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read page template {}", path.display()))
}
