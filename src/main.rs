//! plotmon — a terminal dashboard charting host CPU and memory usage.
//!
//! Run with:  `RUST_LOG=info plotmon`

use anyhow::Result;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Structured logging — RUST_LOG controls verbosity (default: warn).
    // Logs go to stderr so they never corrupt the alternate screen.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("plotmon v{} starting", env!("CARGO_PKG_VERSION"));

    let config = plotmon_config::load(plotmon_config::default_path())?;
    plotmon_tui::run(config).await.map_err(Into::into)
}
