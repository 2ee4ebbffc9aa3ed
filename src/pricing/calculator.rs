use std::sync::Arc;
use tracing::{debug, error, warn};

use crate::error::AppError;
use crate::models::{CostResult, StyleInput};
use crate::pricing::estimator::estimate;
use crate::store::{MaterialStore, StoreError};

/// Prices a style against the material table
///
/// There is no fallback price: a missing material is an error, never a
/// zero-cost result.
pub struct CostCalculator {
    store: Arc<dyn MaterialStore>,
}

impl CostCalculator {
    pub fn new(store: Arc<dyn MaterialStore>) -> Self {
        Self { store }
    }

    pub async fn calculate(&self, style: &StyleInput) -> Result<CostResult, AppError> {
        let price = match self.store.get(&style.fabric_type).await {
            Ok(price) => price,
            Err(StoreError::NotFound(fabric)) => {
                warn!(fabric_type = %fabric, "No price row for requested fabric");
                return Err(StoreError::NotFound(fabric).into());
            }
            Err(e) => return Err(e.into()),
        };

        let result = estimate(style, &price).map_err(|e| {
            error!(
                style_type = %style.style_type,
                fabric_width_cm = style.fabric_width_cm,
                unit_price_usd_per_meter = price.unit_price_usd_per_meter,
                error = %e,
                "BOM estimate overflowed"
            );
            AppError::from(e)
        })?;
        debug!(
            style_type = %style.style_type,
            fit = %style.fit,
            fabric_type = %style.fabric_type,
            fob = result.total_fob_cost_usd,
            "Estimated BOM cost"
        );

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Fit, MaterialPriceInput, StyleType};
    use crate::store::SqliteMaterialStore;

    fn tee(fabric_type: &str) -> StyleInput {
        StyleInput {
            style_name: "Crew Tee".to_string(),
            style_type: StyleType::TShirt,
            fit: Fit::Regular,
            fabric_width_cm: 150.0,
            fabric_type: fabric_type.to_string(),
        }
    }

    #[tokio::test]
    async fn test_calculate_uses_stored_price() {
        let store = Arc::new(SqliteMaterialStore::in_memory().await.unwrap());
        store
            .upsert(MaterialPriceInput::new("Cotton Knit", 5.0, 0.15))
            .await
            .unwrap();

        let calculator = CostCalculator::new(store);
        let result = calculator.calculate(&tee("Cotton Knit")).await.unwrap();

        assert_eq!(result.unit_price_usd_per_meter, 5.0);
        assert_eq!(result.total_material_cost_usd, 6.5);
        assert_eq!(result.total_fob_cost_usd, 10.98);
    }

    #[tokio::test]
    async fn test_calculate_reflects_price_updates() {
        let store = Arc::new(SqliteMaterialStore::in_memory().await.unwrap());
        let calculator = CostCalculator::new(store.clone());

        store
            .upsert(MaterialPriceInput::new("Cotton Knit", 5.0, 0.15))
            .await
            .unwrap();
        let before = calculator.calculate(&tee("Cotton Knit")).await.unwrap();

        store
            .upsert(MaterialPriceInput::new("Cotton Knit", 6.0, 0.15))
            .await
            .unwrap();
        let after = calculator.calculate(&tee("Cotton Knit")).await.unwrap();

        assert_eq!(after.unit_price_usd_per_meter, 6.0);
        assert!(after.total_fob_cost_usd > before.total_fob_cost_usd);
    }

    #[tokio::test]
    async fn test_missing_material_is_not_found() {
        let store = Arc::new(SqliteMaterialStore::in_memory().await.unwrap());
        let calculator = CostCalculator::new(store);

        let err = calculator.calculate(&tee("Bamboo Jersey")).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(ref msg) if msg.contains("Bamboo Jersey")));
    }

    #[tokio::test]
    async fn test_overflowing_estimate_is_internal_error() {
        let store = Arc::new(SqliteMaterialStore::in_memory().await.unwrap());
        store
            .upsert(MaterialPriceInput::new("Gold Lame", 1e307, 0.0))
            .await
            .unwrap();

        let calculator = CostCalculator::new(store);
        let err = calculator.calculate(&tee("Gold Lame")).await.unwrap_err();
        assert!(matches!(err, AppError::InternalError(ref msg) if msg.contains("Gold Lame")));
    }
}
