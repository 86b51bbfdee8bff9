//! Table of past predictions.

use leptos::prelude::*;

use crate::state::predictions::{PredictionRow, PredictionsState};

#[component]
pub fn PredictionsTable(table: RwSignal<PredictionsState>) -> impl IntoView {
    view! {
        <table id="predictions-table" class="predictions-table">
            <thead>
                <tr>
                    <th>"ID"</th>
                    <th>"Longitude"</th>
                    <th>"Latitude"</th>
                    <th>"Predicted Price"</th>
                    <th>"Timestamp"</th>
                </tr>
            </thead>
            <tbody>
                {move || table.with(|t| t.rows.iter().cloned().map(row_view).collect::<Vec<_>>())}
            </tbody>
        </table>
    }
}

fn row_view(row: PredictionRow) -> impl IntoView {
    view! {
        <tr>
            <td>{row.id}</td>
            <td>{row.longitude}</td>
            <td>{row.latitude}</td>
            <td>{row.price}</td>
            <td>{row.timestamp}</td>
        </tr>
    }
}
