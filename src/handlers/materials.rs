//! Admin endpoints for the material price table
//!
//! - `GET  /admin/materials/api`: list all prices
//! - `POST /admin/materials/api`: insert or update one price

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::Serialize;
use tracing::{error, info, warn};

use super::AppState;
use crate::error::AppError;
use crate::metrics;
use crate::models::{MaterialPrice, MaterialPriceInput};
use crate::store::StoreError;

#[derive(Debug, Serialize)]
pub struct SaveMaterialResponse {
    pub message: String,
    pub data: MaterialPrice,
}

/// GET /admin/materials/api
pub async fn list_materials(
    State(state): State<AppState>,
) -> Result<Json<Vec<MaterialPrice>>, AppError> {
    let rows = state.store.list().await.map_err(|e| {
        error!(error = %e, "Failed to list material prices");
        AppError::from(e)
    })?;

    Ok(Json(rows))
}

/// POST /admin/materials/api
pub async fn save_material(
    State(state): State<AppState>,
    payload: Result<Json<MaterialPriceInput>, JsonRejection>,
) -> Result<Json<SaveMaterialResponse>, AppError> {
    let Json(input) = payload.map_err(|rejection| {
        metrics::record_material_write("invalid");
        AppError::from(rejection)
    })?;

    match state.store.upsert(input).await {
        Ok(saved) => {
            metrics::record_material_write("ok");
            info!(
                fabric_type = %saved.fabric_type,
                unit_price = saved.unit_price_usd_per_meter,
                overhead_rate = saved.overhead_rate_pct,
                "Material price saved"
            );
            Ok(Json(SaveMaterialResponse {
                message: "Material price successfully saved/updated.".to_string(),
                data: saved,
            }))
        }
        Err(StoreError::InvalidInput(msg)) => {
            metrics::record_material_write("invalid");
            warn!(reason = %msg, "Rejected material price write");
            Err(AppError::InvalidInput(msg))
        }
        Err(e) => {
            metrics::record_material_write("error");
            error!(error = %e, "Failed to save material price");
            Err(e.into())
        }
    }
}
