use clap::{Parser, Subcommand};
use std::path::PathBuf;

use bom_cost::models::{Fit, StyleType};

#[derive(Parser, Debug)]
#[command(name = "bom-cost", version, about = "Garment BOM cost estimator")]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config.toml", global = true)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Start the HTTP server (default)
    Start,

    /// Test configuration file validity
    Test,

    /// Configuration management commands
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },

    /// Manage reference material prices
    Materials {
        #[command(subcommand)]
        action: MaterialCommands,
    },

    /// Estimate BOM cost for a style
    Estimate {
        /// Style type: T-shirt or Jeans
        #[arg(short = 't', long)]
        style_type: StyleType,

        /// Fit: Slim, Regular or Loose
        #[arg(short, long, default_value = "Regular")]
        fit: Fit,

        /// Fabric width in centimeters
        #[arg(short, long, default_value = "150")]
        width: f64,

        /// Fabric type (defaults to the configured preferred fabric)
        #[arg(long)]
        fabric: Option<String>,

        /// Style name, for display only
        #[arg(short, long, default_value = "")]
        name: String,

        /// Print the raw JSON result instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show version information
    Version,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Display current configuration
    Show,

    /// Validate configuration file
    Validate,
}

#[derive(Subcommand, Debug, Clone)]
pub enum MaterialCommands {
    /// List all material prices
    List,

    /// Insert or update a material price
    Set {
        /// Fabric type, e.g. "Cotton Knit"
        fabric_type: String,

        /// Price in USD per meter
        #[arg(short, long)]
        unit_price: f64,

        /// Fractional overhead rate, e.g. 0.15 for 15%
        #[arg(short, long, default_value = "0")]
        overhead_rate: f64,
    },
}

impl Cli {
    /// Get the command to execute, defaulting to Start if none provided
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Start)
    }
}
