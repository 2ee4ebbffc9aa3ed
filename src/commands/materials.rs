use anyhow::Result;
use bom_cost::{
    config,
    models::{MaterialPrice, MaterialPriceInput},
    store::MaterialStore,
};
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};
use std::path::Path;
use tracing::info;

use super::estimate::{format_percentage, format_usd};

/// Execute the materials list command
pub async fn list(config_path: &Path) -> Result<()> {
    let cfg = config::load_config(config_path)?;
    let store = super::open_store(&cfg).await?;

    let rows = store.list().await?;
    if rows.is_empty() {
        println!("{}", "No material prices configured.".yellow());
        println!("Add one with: bom-cost materials set \"Cotton Knit\" --unit-price 5.0 --overhead-rate 0.15");
        return Ok(());
    }

    println!("{}", render_table(&rows));
    Ok(())
}

/// Execute the materials set command
pub async fn set(
    config_path: &Path,
    fabric_type: String,
    unit_price: f64,
    overhead_rate: f64,
) -> Result<()> {
    let cfg = config::load_config(config_path)?;
    let store = super::open_store(&cfg).await?;

    let saved = store
        .upsert(MaterialPriceInput::new(fabric_type, unit_price, overhead_rate))
        .await?;
    info!(fabric_type = %saved.fabric_type, "Material price saved from CLI");

    println!("{}", "✓ Material price saved".green());
    println!("{}", render_table(std::slice::from_ref(&saved)));
    Ok(())
}

fn render_table(rows: &[MaterialPrice]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("FABRIC TYPE").fg(Color::Cyan),
        Cell::new("UNIT PRICE (USD/m)").fg(Color::Cyan),
        Cell::new("OVERHEAD").fg(Color::Cyan),
    ]);

    for row in rows {
        table.add_row(vec![
            Cell::new(&row.fabric_type),
            Cell::new(format_usd(row.unit_price_usd_per_meter)),
            Cell::new(format_percentage(row.overhead_rate_pct)),
        ]);
    }

    table
}
