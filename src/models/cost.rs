use serde::Serialize;

/// Per-unit figures derived from the style alone, before any pricing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UsageEstimate {
    pub material_consu_mock: f64,
    pub labor_cost_mock: f64,
    pub trim_cost_mock: f64,
}

/// Cost breakdown returned by the calculate endpoint
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CostResult {
    /// Meters of fabric per garment unit
    pub material_consu_mock: f64,
    pub labor_cost_mock: f64,
    pub trim_cost_mock: f64,

    pub unit_price_usd_per_meter: f64,
    pub overhead_rate_pct: f64,

    pub total_material_cost_usd: f64,
    pub total_fob_cost_usd: f64,
}
