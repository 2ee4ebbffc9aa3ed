pub mod bom;
pub mod health;
pub mod materials;
pub mod metrics_handler;

use std::sync::Arc;

use crate::pricing::CostCalculator;
use crate::store::MaterialStore;

/// Shared state for the material and BOM handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn MaterialStore>,
    pub calculator: Arc<CostCalculator>,
}

impl AppState {
    pub fn new(store: Arc<dyn MaterialStore>) -> Self {
        let calculator = Arc::new(CostCalculator::new(store.clone()));
        Self { store, calculator }
    }
}
