//! CLI definitions using clap derive API

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Folio - portfolio page renderer
///
/// Loads the section documents (about, experience, projects, skills,
/// education) and renders them into the page template's mount points.
#[derive(Parser, Debug)]
#[command(
    name = "folio",
    author,
    version,
    about = "Render a data-driven portfolio page",
    after_help = "Configuration is read from the environment (or a .env file): \
                  SITE_ROOT, CONTENT_BASE, TEMPLATE_PATH, PORT, FETCH_TIMEOUT_SECS, RUST_LOG."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serve the site, rendering every section on each page load
    Serve(ServeArgs),

    /// Render the page once and write it to a file
    Build(BuildArgs),

    /// Collect the section documents into a single JSON bundle
    Bundle(BundleArgs),
}

#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Port to listen on (overrides PORT)
    #[arg(long, short = 'p')]
    pub port: Option<u16>,
}

#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Where to write the rendered page
    #[arg(long, short = 'o', default_value = "dist/index.html")]
    pub output: PathBuf,

    /// Also write the per-section render report as JSON
    #[arg(long, short = 'r')]
    pub report: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct BundleArgs {
    /// Directory holding about.json, experience.json, ... (defaults to <SITE_ROOT>/data)
    #[arg(long, short = 'd')]
    pub data_dir: Option<PathBuf>,

    /// Where to write the bundle
    #[arg(long, short = 'o', default_value = "bundle.json")]
    pub output: PathBuf,
}
