use std::sync::Arc;

use crate::config::Config;
use crate::orchestrator::Orchestrator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Renders the data-driven sections; one `render_all` per page load.
    pub orchestrator: Arc<Orchestrator>,
}
