use axum::{extract::rejection::JsonRejection, extract::State, Json};
use tracing::{error, info, warn};

use super::AppState;
use crate::error::AppError;
use crate::metrics;
use crate::models::{CostResult, StyleRequest};

/// POST /api/bom/calculate
///
/// Validates the style, looks up the fabric price and returns the cost
/// breakdown. Missing materials are reported as 404, never priced at zero.
pub async fn calculate_bom(
    State(state): State<AppState>,
    payload: Result<Json<StyleRequest>, JsonRejection>,
) -> Result<Json<CostResult>, AppError> {
    let style = match payload.map_err(AppError::from).and_then(|Json(req)| req.validate()) {
        Ok(style) => style,
        Err(e) => {
            metrics::record_estimate("invalid");
            warn!(error = %e, "Rejected BOM calculate request");
            return Err(e);
        }
    };

    match state.calculator.calculate(&style).await {
        Ok(result) => {
            metrics::record_estimate("ok");
            metrics::record_fob(result.total_fob_cost_usd);
            info!(
                style_name = %style.style_name,
                style_type = %style.style_type,
                fit = %style.fit,
                fabric_type = %style.fabric_type,
                total_fob_cost_usd = result.total_fob_cost_usd,
                "BOM cost calculated"
            );
            Ok(Json(result))
        }
        Err(e) => {
            match e {
                AppError::NotFound(_) => metrics::record_estimate("not_found"),
                _ => {
                    metrics::record_estimate("error");
                    error!(fabric_type = %style.fabric_type, error = %e, "BOM cost calculation failed");
                }
            }
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Fit, MaterialPriceInput, StyleType};
    use crate::store::{MaterialStore, SqliteMaterialStore};
    use std::sync::Arc;

    fn request(fabric_type: &str) -> StyleRequest {
        StyleRequest {
            style_name: "Five Pocket".to_string(),
            style_type: Some(StyleType::Jeans),
            fit: Some(Fit::Slim),
            fabric_width_cm: Some(140.0),
            fabric_type: Some(fabric_type.to_string()),
        }
    }

    #[tokio::test]
    async fn test_calculate_bom() {
        let store = Arc::new(SqliteMaterialStore::in_memory().await.unwrap());
        store
            .upsert(MaterialPriceInput::new("Denim Woven", 6.0, 0.1))
            .await
            .unwrap();

        let Json(result) = calculate_bom(State(AppState::new(store)), Ok(Json(request("Denim Woven"))))
            .await
            .unwrap();

        assert_eq!(result.material_consu_mock, 1.832);
        assert_eq!(result.labor_cost_mock, 8.8);
        assert_eq!(result.trim_cost_mock, 2.5);
        // 1.832 * 6 + 2.5 = 13.492
        assert_eq!(result.total_material_cost_usd, 13.49);
        assert_eq!(result.unit_price_usd_per_meter, 6.0);
    }

    #[tokio::test]
    async fn test_calculate_bom_unknown_fabric() {
        let store = Arc::new(SqliteMaterialStore::in_memory().await.unwrap());
        let err = calculate_bom(State(AppState::new(store)), Ok(Json(request("Denim Woven"))))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_calculate_bom_invalid_width_skips_lookup() {
        let store = Arc::new(SqliteMaterialStore::in_memory().await.unwrap());
        // A closed pool would turn any lookup into a storage error
        store.pool().close().await;

        let mut req = request("Denim Woven");
        req.fabric_width_cm = Some(0.0);
        let err = calculate_bom(State(AppState::new(store)), Ok(Json(req)))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_calculate_bom_vanishing_width_is_internal_error() {
        let store = Arc::new(SqliteMaterialStore::in_memory().await.unwrap());
        store
            .upsert(MaterialPriceInput::new("Denim Woven", 6.0, 0.1))
            .await
            .unwrap();

        let mut req = request("Denim Woven");
        req.fabric_width_cm = Some(1e-308);
        let err = calculate_bom(State(AppState::new(store)), Ok(Json(req)))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::InternalError(_)));
    }
}
