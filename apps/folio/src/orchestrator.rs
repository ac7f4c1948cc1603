//! Orchestrator: runs every section's load+render concurrently behind a
//! join-all barrier, then fires the post-render event exactly once.
//!
//! Tasks are independent: one failing fetch, malformed document, or even a
//! panicking task never cancels or blocks its siblings.

use std::sync::Arc;

use serde::Serialize;
use tokio::task::JoinSet;
use tracing::{error, info};

use crate::content::{self, ContentSource};
use crate::events::EventSource;
use crate::page::Page;
use crate::sections::{RenderOutcome, SectionKind};

pub const RENDERED_EVENT: &str = "sections-rendered";

/// Which document feeds which mount point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionBinding {
    pub kind: SectionKind,
    pub path: String,
    pub mount_key: String,
}

impl SectionBinding {
    pub fn new(kind: SectionKind, path: impl Into<String>, mount_key: impl Into<String>) -> Self {
        Self {
            kind,
            path: path.into(),
            mount_key: mount_key.into(),
        }
    }

    /// The five sections at their standard paths and mount keys.
    pub fn defaults() -> Vec<Self> {
        SectionKind::ALL
            .iter()
            .map(|&kind| Self::new(kind, kind.default_path(), kind.default_mount_key()))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SectionStatus {
    Rendered,
    NoDocument,
    NoMount,
    Failed { error: String },
}

impl From<RenderOutcome> for SectionStatus {
    fn from(outcome: RenderOutcome) -> Self {
        match outcome {
            RenderOutcome::Rendered => SectionStatus::Rendered,
            RenderOutcome::NoDocument => SectionStatus::NoDocument,
            RenderOutcome::NoMount => SectionStatus::NoMount,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SectionResult {
    pub kind: SectionKind,
    pub mount_key: String,
    #[serde(flatten)]
    pub status: SectionStatus,
}

/// Per-section results of one `render_all`, in binding order.
#[derive(Debug, Clone, Serialize)]
pub struct RenderReport {
    pub sections: Vec<SectionResult>,
}

impl RenderReport {
    pub fn rendered(&self) -> usize {
        self.count(|s| matches!(s, SectionStatus::Rendered))
    }

    pub fn failed(&self) -> usize {
        self.count(|s| matches!(s, SectionStatus::Failed { .. }))
    }

    fn count(&self, pred: impl Fn(&SectionStatus) -> bool) -> usize {
        self.sections.iter().filter(|r| pred(&r.status)).count()
    }
}

pub struct Orchestrator {
    source: Arc<dyn ContentSource>,
    bindings: Vec<SectionBinding>,
    rendered: EventSource,
}

impl Orchestrator {
    pub fn new(source: Arc<dyn ContentSource>) -> Self {
        Self {
            source,
            bindings: SectionBinding::defaults(),
            rendered: EventSource::new(RENDERED_EVENT),
        }
    }

    pub fn mount_keys(&self) -> Vec<&str> {
        self.bindings.iter().map(|b| b.mount_key.as_str()).collect()
    }

    /// Registers a post-render handler. Handlers run once per `render_all`,
    /// after every section has settled.
    pub fn on_rendered<F>(&mut self, handler: F)
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.rendered.subscribe(handler);
    }

    /// Loads and renders every bound section into `page` concurrently, waits
    /// for all of them to settle, then triggers the post-render event.
    pub async fn render_all(&self, page: Arc<Page>) -> RenderReport {
        let mut tasks = JoinSet::new();
        for (index, binding) in self.bindings.iter().cloned().enumerate() {
            let source = Arc::clone(&self.source);
            let page = Arc::clone(&page);
            tasks.spawn(async move {
                let document = content::load(source.as_ref(), &binding.path).await;
                let result = binding
                    .kind
                    .render(document.as_ref(), &page, &binding.mount_key);
                (index, result)
            });
        }

        let mut statuses: Vec<Option<SectionStatus>> = vec![None; self.bindings.len()];
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((index, Ok(outcome))) => statuses[index] = Some(outcome.into()),
                Ok((index, Err(e))) => {
                    error!(mount = %self.bindings[index].mount_key, "Section render failed: {e}");
                    statuses[index] = Some(SectionStatus::Failed {
                        error: e.to_string(),
                    });
                }
                // The slot stays empty and is reported as failed below.
                Err(e) => error!("Section task aborted: {e}"),
            }
        }

        let sections: Vec<SectionResult> = self
            .bindings
            .iter()
            .zip(statuses)
            .map(|(binding, status)| SectionResult {
                kind: binding.kind,
                mount_key: binding.mount_key.clone(),
                status: status.unwrap_or_else(|| SectionStatus::Failed {
                    error: "render task panicked".to_string(),
                }),
            })
            .collect();
        let report = RenderReport { sections };

        info!(
            "All sections settled: {}/{} rendered, {} failed",
            report.rendered(),
            report.sections.len(),
            report.failed()
        );
        self.rendered.trigger();

        report
    }
}
