//! CLI entrypoint for ragview
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::Result;
use clap::Parser;
use ragview_application::{CatalogApi, HistoryApi, QueryApi};
use ragview_infrastructure::{ConfigLoader, HttpBackend};
use ragview_presentation::{Cli, ConsoleRunner, TuiApp};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level. In TUI mode anything
    // below warn would scribble over the alternate screen.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    // === Configuration ===
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!("Failed to load configuration: {e}"))?
    };

    let base_url = cli
        .base_url
        .clone()
        .unwrap_or_else(|| config.backend.base_url.clone());

    info!("Using backend at {}", base_url);

    // === Dependency Injection ===
    let backend = Arc::new(
        HttpBackend::new(&base_url, config.backend.timeout_secs)
            .map_err(|e| anyhow::anyhow!("Failed to create HTTP client: {e}"))?,
    );

    // One-shot mode when a question was given
    if let Some(question) = &cli.question {
        let runner = ConsoleRunner::new(backend as Arc<dyn QueryApi>).with_quiet(cli.quiet);
        let code = runner.run(question).await;
        return Ok(ExitCode::from(code as u8));
    }

    // Interactive TUI
    let mut app = TuiApp::new(
        backend.clone() as Arc<dyn QueryApi>,
        backend.clone() as Arc<dyn CatalogApi>,
        backend as Arc<dyn HistoryApi>,
        base_url,
        config.tui.max_input_height,
    );
    app.run().await?;

    Ok(ExitCode::SUCCESS)
}
