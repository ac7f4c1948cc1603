pub mod health;
pub mod page;

use axum::{routing::get, Router};
use tower_http::services::ServeDir;

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let assets = ServeDir::new(&state.config.site_root);
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/", get(page::index_handler))
        .route("/index.html", get(page::index_handler))
        // Stylesheets, scripts, images and the raw data/*.json documents.
        .fallback_service(assets)
        .with_state(state)
}
