use crate::models::{CostResult, MaterialPrice, StyleInput, UsageEstimate};
use crate::pricing::rates::{base_rates, fit_multiplier, labor_multiplier, width_factor};

/// Round half away from zero to `decimals` places
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

pub fn round2(value: f64) -> f64 {
    round_to(value, 2)
}

pub fn round3(value: f64) -> f64 {
    round_to(value, 3)
}

/// Consumption, labor and trim for a style, independent of fabric price
///
/// Each figure is rounded where it is computed; later steps use the rounded
/// values.
pub fn estimate_usage(style: &StyleInput) -> UsageEstimate {
    let base = base_rates(style.style_type);
    let consumption =
        base.consumption_m * fit_multiplier(style.fit) * width_factor(style.fabric_width_cm);

    UsageEstimate {
        material_consu_mock: round3(consumption),
        labor_cost_mock: round2(base.labor_usd * labor_multiplier(style.fit)),
        trim_cost_mock: round2(base.trim_usd),
    }
}

/// Computation produced a figure that cannot be reported
#[derive(Debug, thiserror::Error)]
pub enum EstimateError {
    #[error("{field} is not a finite number for fabric '{fabric_type}'")]
    NonFinite {
        field: &'static str,
        fabric_type: String,
    },
}

/// Full cost breakdown for a style priced against one material row
///
/// Overhead is charged on the material total only, never on labor. Inputs
/// that are individually valid can still overflow (a huge unit price, a
/// near-zero width); those fail rather than serializing as `null`.
pub fn estimate(style: &StyleInput, price: &MaterialPrice) -> Result<CostResult, EstimateError> {
    let usage = estimate_usage(style);
    let unit_price = price.unit_price_usd_per_meter;
    let overhead_rate = price.overhead_rate_pct;

    let total_material =
        round2(usage.material_consu_mock * unit_price + usage.trim_cost_mock);
    let total_fob =
        round2(total_material + usage.labor_cost_mock + total_material * overhead_rate);

    let result = CostResult {
        material_consu_mock: usage.material_consu_mock,
        labor_cost_mock: usage.labor_cost_mock,
        trim_cost_mock: usage.trim_cost_mock,
        unit_price_usd_per_meter: unit_price,
        overhead_rate_pct: overhead_rate,
        total_material_cost_usd: total_material,
        total_fob_cost_usd: total_fob,
    };

    let fields = [
        ("material_consu_mock", result.material_consu_mock),
        ("labor_cost_mock", result.labor_cost_mock),
        ("trim_cost_mock", result.trim_cost_mock),
        ("unit_price_usd_per_meter", result.unit_price_usd_per_meter),
        ("overhead_rate_pct", result.overhead_rate_pct),
        ("total_material_cost_usd", result.total_material_cost_usd),
        ("total_fob_cost_usd", result.total_fob_cost_usd),
    ];
    if let Some(&(field, _)) = fields.iter().find(|(_, value)| !value.is_finite()) {
        return Err(EstimateError::NonFinite {
            field,
            fabric_type: price.fabric_type.clone(),
        });
    }

    Ok(result)
}
