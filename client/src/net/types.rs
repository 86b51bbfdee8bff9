//! Wire DTOs for the prediction service.
//!
//! DESIGN
//! ======
//! These types mirror the service's JSON so serde does the shape checking.
//! The service's own column name for the price, `predicted_house_value`, is
//! accepted as an alias on both the list and the predict response.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Form fields posted to `/predict`, name -> raw string value.
pub type FormPayload = BTreeMap<String, String>;

/// One flat object from `/visualizations/{case}`.
pub type InsightRecord = serde_json::Map<String, serde_json::Value>;

/// A stored prediction as returned by `GET /predictions`.
///
/// Any other columns the service echoes back (the submitted features) are
/// ignored. Coordinates may be `null` or absent; the price may not.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub id: i64,
    pub longitude: Option<f64>,
    pub latitude: Option<f64>,
    #[serde(alias = "predicted_house_value")]
    pub predicted_price: f64,
    /// Date-like string exactly as the service serialized it.
    pub timestamp: String,
}

/// Body of a successful `POST /predict`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PredictResponse {
    #[serde(alias = "predicted_house_value")]
    pub predicted_value: f64,
}
