use serde::{Deserialize, Serialize};

/// Reference price for one fabric type, as stored in `material_prices`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct MaterialPrice {
    pub fabric_type: String,
    /// USD per meter
    pub unit_price_usd_per_meter: f64,
    /// Fractional overhead, 0.15 means 15%
    pub overhead_rate_pct: f64,
}

/// Admin write request body
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialPriceInput {
    pub fabric_type: String,
    pub unit_price: f64,
    pub overhead_rate: f64,
}

impl MaterialPriceInput {
    pub fn new(fabric_type: impl Into<String>, unit_price: f64, overhead_rate: f64) -> Self {
        Self {
            fabric_type: fabric_type.into(),
            unit_price,
            overhead_rate,
        }
    }

    /// Check write preconditions. The error string names the offending field.
    pub fn validate(&self) -> Result<(), String> {
        if self.fabric_type.trim().is_empty() {
            return Err("fabricType must not be empty".to_string());
        }
        if !self.unit_price.is_finite() || self.unit_price <= 0.0 {
            return Err(format!(
                "unitPrice must be greater than 0 (got {})",
                self.unit_price
            ));
        }
        if !self.overhead_rate.is_finite() || self.overhead_rate < 0.0 {
            return Err(format!(
                "overheadRate must not be negative (got {})",
                self.overhead_rate
            ));
        }
        Ok(())
    }

    pub fn into_price(self) -> MaterialPrice {
        MaterialPrice {
            fabric_type: self.fabric_type,
            unit_price_usd_per_meter: self.unit_price,
            overhead_rate_pct: self.overhead_rate,
        }
    }
}
