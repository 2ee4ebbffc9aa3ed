use anyhow::Result;
use bom_cost::config;
use colored::Colorize;
use std::path::Path;
use tracing::info;

/// Execute the test command
///
/// This validates the configuration file without starting the server
pub fn execute(config_path: &Path) -> Result<()> {
    println!("{}", "Testing configuration...".yellow());
    info!("Loading and validating configuration");

    let cfg = config::load_config(config_path)?;

    println!("{}", "✓ Configuration test successful".green());
    println!();

    println!("{}", "Configuration Summary:".bold());
    println!("  {}: {}:{}", "Server".cyan(), cfg.server.host, cfg.server.port);
    println!("  {}: {}", "Log Level".cyan(), cfg.server.log_level);
    println!("  {}: {}", "Log Format".cyan(), cfg.server.log_format);
    println!();

    println!("  {}: {}", "Database".cyan(), cfg.database.url);
    println!("    Max connections: {}", cfg.database.max_connections);
    println!();

    println!("  {}: {}", "Metrics".cyan(), if cfg.metrics.enabled {
        "enabled".green()
    } else {
        "disabled".red()
    });
    if cfg.metrics.enabled {
        println!("    Endpoint: {}", cfg.metrics.endpoint);
    }
    println!();

    println!(
        "  {}: {}",
        "Preferred fabric".cyan(),
        cfg.estimator
            .preferred_fabric
            .as_deref()
            .unwrap_or("(first listed)")
    );

    info!("Configuration validation completed successfully");
    Ok(())
}
