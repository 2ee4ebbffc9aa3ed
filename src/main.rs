use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use bom_cost::{config, init_tracing};

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Cli::parse();

    // Logging settings come from the config file when it loads; the commands
    // themselves report config errors.
    let (log_level, log_format) = match config::load_config(&args.config) {
        Ok(cfg) => (cfg.server.log_level, cfg.server.log_format),
        Err(_) => ("info".to_string(), "text".to_string()),
    };
    init_tracing(&log_level, &log_format);

    match args.get_command() {
        cli::Commands::Start => {
            commands::start::execute(&args.config).await?;
        }
        cli::Commands::Test => {
            commands::test::execute(&args.config)?;
        }
        cli::Commands::Config { action } => match action {
            cli::ConfigCommands::Show => commands::config::show(&args.config)?,
            cli::ConfigCommands::Validate => commands::config::validate(&args.config)?,
        },
        cli::Commands::Materials { action } => match action {
            cli::MaterialCommands::List => commands::materials::list(&args.config).await?,
            cli::MaterialCommands::Set {
                fabric_type,
                unit_price,
                overhead_rate,
            } => {
                commands::materials::set(&args.config, fabric_type, unit_price, overhead_rate)
                    .await?
            }
        },
        cli::Commands::Estimate {
            style_type,
            fit,
            width,
            fabric,
            name,
            json,
        } => {
            let request = bom_cost::models::StyleRequest {
                style_name: name,
                style_type: Some(style_type),
                fit: Some(fit),
                fabric_width_cm: Some(width),
                fabric_type: fabric,
            };
            commands::estimate::execute(&args.config, request, json).await?;
        }
        cli::Commands::Version => {
            println!("BOM Cost v{}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
