use axum::{extract::State, response::Html};
use tracing::info;

use crate::errors::AppError;
use crate::render::{read_template, render_page};
use crate::state::AppState;

/// GET / and GET /index.html
/// Every request is a fresh page load: documents are fetched and rendered anew.
pub async fn index_handler(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let template = read_template(&state.config.template_path)
        .await
        .map_err(|e| AppError::Template(format!("{e:#}")))?;

    let (html, report) = render_page(&state.orchestrator, &template)
        .await
        .map_err(|e| AppError::Template(format!("{e:#}")))?;
    info!(
        "Served page: {} rendered, {} failed",
        report.rendered(),
        report.failed()
    );
    Ok(Html(html))
}
