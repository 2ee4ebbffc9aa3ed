pub mod calculator;
pub mod estimator;
pub mod rates;

pub use calculator::CostCalculator;
pub use estimator::{estimate, estimate_usage, round2, round3, EstimateError};
pub use rates::{base_rates, fit_multiplier, width_factor, BaseRates, REFERENCE_WIDTH_CM};

use crate::models::MaterialPrice;

/// Pick the material a caller gets when they did not name one
///
/// Prefers `preferred` when it is priced, otherwise the first row of the
/// (already sorted) material list. `None` only for an empty list.
pub fn select_default_material<'a>(
    materials: &'a [MaterialPrice],
    preferred: Option<&str>,
) -> Option<&'a MaterialPrice> {
    preferred
        .and_then(|name| materials.iter().find(|m| m.fabric_type == name))
        .or_else(|| materials.first())
}
