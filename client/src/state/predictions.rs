//! Predictions table state.
//!
//! DESIGN
//! ======
//! Rows are stored already formatted so the table component is a plain
//! projection. Every load replaces the whole row set; nothing is merged.

#[cfg(test)]
#[path = "predictions_test.rs"]
mod predictions_test;

use crate::net::types::Prediction;
use crate::util::format::{js_number, local_timestamp, price_cell};

/// Display form of one prediction record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PredictionRow {
    pub id: String,
    pub longitude: String,
    pub latitude: String,
    pub price: String,
    pub timestamp: String,
}

impl PredictionRow {
    pub fn from_record(record: &Prediction) -> Self {
        Self {
            id: record.id.to_string(),
            longitude: coordinate_cell(record.longitude),
            latitude: coordinate_cell(record.latitude),
            price: price_cell(record.predicted_price),
            timestamp: local_timestamp(&record.timestamp),
        }
    }
}

/// Missing coordinates render as `null`, the text a template literal gives.
fn coordinate_cell(value: Option<f64>) -> String {
    value.map_or_else(|| "null".to_owned(), js_number)
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PredictionsState {
    pub rows: Vec<PredictionRow>,
}

impl PredictionsState {
    /// Clear prior rows, then insert one row per record in service order.
    pub fn replace_rows(&mut self, records: &[Prediction]) {
        self.rows.clear();
        self.rows.extend(records.iter().map(PredictionRow::from_record));
    }
}
