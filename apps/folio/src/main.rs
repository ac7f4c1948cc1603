mod bundle;
mod cli;
mod config;
mod content;
mod errors;
mod events;
#[cfg(test)]
mod fixtures;
mod models;
mod orchestrator;
mod page;
mod render;
mod routes;
mod sections;
mod state;

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tower_http::trace::TraceLayer;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::cli::{BuildArgs, Cli, Commands};
use crate::config::Config;
use crate::content::source_from_location;
use crate::orchestrator::Orchestrator;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Folio v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::Serve(args) => {
            let port = args.port.unwrap_or(config.port);
            let orchestrator = build_orchestrator(&config).await?;
            serve(config, orchestrator, port).await
        }
        Commands::Build(args) => {
            let orchestrator = build_orchestrator(&config).await?;
            build(&config, &orchestrator, &args).await
        }
        Commands::Bundle(args) => {
            let data_dir = args
                .data_dir
                .unwrap_or_else(|| config.site_root.join("data"));
            bundle::write_bundle(&data_dir, &args.output).await?;
            Ok(())
        }
    }
}

async fn build_orchestrator(config: &Config) -> Result<Orchestrator> {
    let source = source_from_location(&config.content_base, config.fetch_timeout).await?;
    info!("Content source: {}", source.describe());

    let mut orchestrator = Orchestrator::new(source);
    orchestrator.on_rendered(|| debug!("Sections ready; post-render setup may proceed"));
    Ok(orchestrator)
}

async fn serve(config: Config, orchestrator: Orchestrator, port: u16) -> Result<()> {
    info!("Serving {} from {}", config.template_path.display(), config.site_root.display());

    let state = AppState {
        config,
        orchestrator: Arc::new(orchestrator),
    };
    let app = build_router(state).layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("0.0.0.0:{port}").parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn build(config: &Config, orchestrator: &Orchestrator, args: &BuildArgs) -> Result<()> {
    let template = render::read_template(&config.template_path).await?;
    let (html, report) = render::render_page(orchestrator, &template).await?;

    write_output(&args.output, html).await?;
    info!(
        "Wrote {} ({}/{} sections rendered)",
        args.output.display(),
        report.rendered(),
        report.sections.len()
    );

    if let Some(path) = &args.report {
        let json = serde_json::to_string_pretty(&report).context("Failed to encode render report")?;
        write_output(path, json).await?;
        info!("Wrote render report to {}", path.display());
    }
    Ok(())
}

async fn write_output(path: &Path, contents: String) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    tokio::fs::write(path, contents)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))
}
