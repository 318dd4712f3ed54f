//! fnplot server entry point

use anyhow::Context;
use clap::Parser;
use fnplot_common::logging::init_logging;
use fnplot_config::{Config, ConfigLoader};
use fnplot_graphs::ensure_output_dir;
use fnplot_web::{create_router, AppState};
use std::path::Path;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "fnplot", about = "Web service that plots math functions as PNG images")]
struct Args {
    /// Path to the configuration file
    #[arg(short, long)]
    config: Option<String>,

    /// Override the configured log level
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config: Config = match &args.config {
        Some(path) => ConfigLoader::load_from_file(path)
            .with_context(|| format!("failed to load configuration from {path}"))?,
        None => ConfigLoader::load().context("failed to load configuration")?,
    };

    let mut logging = config.logging.to_logging_config();
    if let Some(level) = args.log_level {
        logging.level = level;
    }
    init_logging(logging).map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))?;

    ensure_output_dir(Path::new(&config.output.directory))
        .context("failed to prepare output directory")?;

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState::new(config);
    let router = create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to install ctrl-c handler: {}", e);
        return;
    }
    info!("received shutdown signal");
}
