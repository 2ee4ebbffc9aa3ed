use anyhow::Result;
use bom_cost::{config, server};
use colored::Colorize;
use std::path::Path;
use tracing::info;

/// Execute the start command
///
/// Loads configuration and serves HTTP until SIGINT/SIGTERM.
pub async fn execute(config_path: &Path) -> Result<()> {
    println!("{}", "Starting BOM cost service...".green());

    let cfg = config::load_config(config_path)?;
    info!(
        host = %cfg.server.host,
        port = cfg.server.port,
        database = %cfg.database.url,
        "Configuration loaded"
    );

    server::start_server(cfg).await
}
