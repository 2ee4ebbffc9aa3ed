//! Wire and storage types shared by the store, the estimator and the handlers

pub mod cost;
pub mod material;
pub mod style;

pub use cost::{CostResult, UsageEstimate};
pub use material::{MaterialPrice, MaterialPriceInput};
pub use style::{Fit, StyleInput, StyleRequest, StyleType};
