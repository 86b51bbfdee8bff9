//! Page controller: submit a prediction, then reload the table.
//!
//! SYSTEM CONTEXT
//! ==============
//! The predict page wires form submission and initial mount to this
//! controller. It talks to the service through [`PredictionApi`] and writes
//! results through [`PageView`], so the sequencing runs the same against the
//! browser or a test double.
//!
//! ERROR HANDLING
//! ==============
//! Any failure stops the flow where it happened and is returned to the
//! caller. Nothing is written to the view for a failed step, so the display
//! and table keep what they showed before.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use leptos::prelude::*;

use crate::net::api::{ApiError, PredictionApi};
use crate::net::types::{FormPayload, Prediction};
use crate::state::predictions::PredictionsState;
use crate::util::format::predicted_price_message;

/// Sink for the controller's output.
pub trait PageView {
    /// Replace the result display text.
    fn show_result(&self, text: String);
    /// Replace every table row with rows built from `records`.
    fn replace_rows(&self, records: &[Prediction]);
}

pub struct PageController<A, V> {
    api: A,
    view: V,
}

impl<A: PredictionApi, V: PageView> PageController<A, V> {
    pub fn new(api: A, view: V) -> Self {
        Self { api, view }
    }

    /// Handle one form submission.
    ///
    /// Posts `payload`, shows the predicted value, then reloads the table.
    /// The reload starts only after the prediction has been displayed.
    ///
    /// # Errors
    ///
    /// Returns the first failing call's [`ApiError`]. A failed prediction
    /// skips the reload.
    pub async fn submit(&self, payload: FormPayload) -> Result<(), ApiError> {
        let response = self.api.predict(&payload).await?;
        self.view.show_result(predicted_price_message(response.predicted_value));
        self.load_predictions().await
    }

    /// Fetch all predictions and re-render the table from scratch.
    ///
    /// # Errors
    ///
    /// Returns the fetch's [`ApiError`]; the table is left untouched.
    pub async fn load_predictions(&self) -> Result<(), ApiError> {
        let records = self.api.predictions().await?;
        log::debug!("loaded {} predictions", records.len());
        self.view.replace_rows(&records);
        Ok(())
    }
}

/// Reactive view backed by the page's signals.
#[derive(Clone, Copy)]
pub struct SignalView {
    pub result: RwSignal<Option<String>>,
    pub table: RwSignal<PredictionsState>,
}

impl PageView for SignalView {
    fn show_result(&self, text: String) {
        self.result.set(Some(text));
    }

    fn replace_rows(&self, records: &[Prediction]) {
        self.table.update(|t| t.replace_rows(records));
    }
}
