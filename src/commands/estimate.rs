use anyhow::{anyhow, Result};
use bom_cost::{
    config,
    models::{CostResult, StyleInput, StyleRequest},
    pricing::{select_default_material, CostCalculator},
    store::MaterialStore,
};
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};
use num_format::{Locale, ToFormattedString};
use std::path::Path;
use std::sync::Arc;

/// Execute the estimate command
///
/// Prices the style against the configured store. Without `--fabric` the
/// preferred fabric from config is used if priced, else the first material.
pub async fn execute(config_path: &Path, mut request: StyleRequest, json: bool) -> Result<()> {
    let cfg = config::load_config(config_path)?;
    let store = Arc::new(super::open_store(&cfg).await?);

    if request.fabric_type.is_none() {
        let materials = store.list().await?;
        let chosen = select_default_material(&materials, cfg.estimator.preferred_fabric.as_deref())
            .ok_or_else(|| anyhow!("No material prices configured; add one with `bom-cost materials set`"))?;
        request.fabric_type = Some(chosen.fabric_type.clone());
    }

    let style = request.validate()?;
    let calculator = CostCalculator::new(store);
    let result = calculator.calculate(&style).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", "Cost Summary".green().bold());
        println!("{}", render_summary(&style, &result));
    }

    Ok(())
}

fn render_summary(style: &StyleInput, result: &CostResult) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let title = if style.style_name.is_empty() {
        format!("{} / {} / {}", style.style_type, style.fit, style.fabric_type)
    } else {
        format!(
            "{} ({} / {} / {})",
            style.style_name, style.style_type, style.fit, style.fabric_type
        )
    };
    table.set_header(vec![Cell::new(title).fg(Color::Cyan), Cell::new("")]);

    table.add_row(vec![
        Cell::new("Material Consumption (m/unit)"),
        Cell::new(format!("{:.3} m", result.material_consu_mock)),
    ]);
    table.add_row(vec![
        Cell::new("Labor Cost (USD/unit)"),
        Cell::new(format_usd(result.labor_cost_mock)),
    ]);
    table.add_row(vec![
        Cell::new("Trim Cost (USD/unit)"),
        Cell::new(format_usd(result.trim_cost_mock)),
    ]);
    table.add_row(vec![
        Cell::new("Unit Price (USD/m)"),
        Cell::new(format_usd(result.unit_price_usd_per_meter)),
    ]);
    table.add_row(vec![
        Cell::new("TOTAL MATERIAL COST"),
        Cell::new(format_usd(result.total_material_cost_usd)),
    ]);
    table.add_row(vec![
        Cell::new("Overhead Rate"),
        Cell::new(format_percentage(result.overhead_rate_pct)),
    ]);
    table.add_row(vec![
        Cell::new("TOTAL FOB COST (Est.)").fg(Color::Green),
        Cell::new(format_usd(result.total_fob_cost_usd)).fg(Color::Green),
    ]);

    table
}

/// "$1,234.50" style dollar amount
pub(crate) fn format_usd(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let cents = (amount.abs() * 100.0).round() as u64;
    format!(
        "{}${}.{:02}",
        sign,
        (cents / 100).to_formatted_string(&Locale::en),
        cents % 100
    )
}

/// Fractional rate as a percentage with one decimal, 0.15 -> "15.0%"
pub(crate) fn format_percentage(rate: f64) -> String {
    format!("{:.1}%", rate * 100.0)
}
