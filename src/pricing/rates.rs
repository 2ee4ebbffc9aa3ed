//! Lookup tables behind the BOM estimator
//!
//! Rows are indexed by the enum discriminant, so adding a style or fit means
//! adding an enum variant and a table row; the estimator itself does not change.

use crate::models::{Fit, StyleType};

/// Fabric width the base consumption figures assume, in centimeters
pub const REFERENCE_WIDTH_CM: f64 = 150.0;

/// Labor multiplier for slim-fit garments
pub const SLIM_LABOR_FACTOR: f64 = 1.10;

/// Starting figures for one style type
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaseRates {
    /// Meters of fabric per unit at the reference width
    pub consumption_m: f64,
    pub labor_usd: f64,
    pub trim_usd: f64,
}

const STYLE_BASE_RATES: [(StyleType, BaseRates); StyleType::COUNT] = [
    (
        StyleType::TShirt,
        BaseRates {
            consumption_m: 1.20,
            labor_usd: 3.50,
            trim_usd: 0.50,
        },
    ),
    (
        StyleType::Jeans,
        BaseRates {
            consumption_m: 1.80,
            labor_usd: 8.00,
            trim_usd: 2.50,
        },
    ),
];

const FIT_MULTIPLIERS: [(Fit, f64); Fit::COUNT] = [
    (Fit::Slim, 0.95),
    (Fit::Regular, 1.00),
    (Fit::Loose, 1.15),
];

pub fn base_rates(style_type: StyleType) -> BaseRates {
    STYLE_BASE_RATES[style_type.index()].1
}

/// Consumption multiplier for a fit
pub fn fit_multiplier(fit: Fit) -> f64 {
    FIT_MULTIPLIERS[fit.index()].1
}

/// Labor multiplier for a fit; only slim cuts cost extra
pub fn labor_multiplier(fit: Fit) -> f64 {
    if fit == Fit::Slim {
        SLIM_LABOR_FACTOR
    } else {
        1.0
    }
}

/// Narrower fabric needs more length per garment. Caller guarantees `width_cm > 0`.
pub fn width_factor(width_cm: f64) -> f64 {
    REFERENCE_WIDTH_CM / width_cm
}
