//! Prediction page: form, result display, and predictions table.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only route. On mount it loads the predictions table once; on
//! each form submission it runs the controller's predict-then-reload flow.
//! Failures are logged to the console and otherwise leave the page as it was.

use leptos::prelude::*;

use crate::components::insights_panel::InsightsPanel;
use crate::components::prediction_form::PredictionForm;
use crate::components::predictions_table::PredictionsTable;
use crate::state::predictions::PredictionsState;

#[component]
pub fn PredictPage() -> impl IntoView {
    let result = RwSignal::new(None::<String>);
    let table = RwSignal::new(PredictionsState::default());
    let form_ref = NodeRef::<leptos::html::Form>::new();

    // Initial table load, once per mount.
    #[cfg(feature = "hydrate")]
    {
        let controller = page_controller(result, table);
        leptos::task::spawn_local(async move {
            if let Err(e) = controller.load_predictions().await {
                log::error!("loading predictions failed: {e}");
            }
        });
    }

    let on_submit = Callback::new(move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        #[cfg(feature = "hydrate")]
        {
            let Some(form) = form_ref.get_untracked() else {
                return;
            };
            let payload = match crate::util::form_data::form_entries(&form) {
                Ok(entries) => crate::state::form::collect_payload(entries),
                Err(e) => {
                    log::error!("reading form failed: {e}");
                    return;
                }
            };
            let controller = page_controller(result, table);
            leptos::task::spawn_local(async move {
                if let Err(e) = controller.submit(payload).await {
                    log::error!("prediction failed: {e}");
                }
            });
        }
    });

    view! {
        <main class="predict-page">
            <h1>"House Price Predictor"</h1>
            <PredictionForm form_ref=form_ref on_submit=on_submit/>
            <p id="result" class="predict-page__result">{move || result.get().unwrap_or_default()}</p>
            <h2>"Previous Predictions"</h2>
            <PredictionsTable table=table/>
            <InsightsPanel/>
        </main>
    }
}

#[cfg(feature = "hydrate")]
fn page_controller(
    result: RwSignal<Option<String>>,
    table: RwSignal<PredictionsState>,
) -> crate::controller::PageController<crate::net::api::HttpApi, crate::controller::SignalView> {
    crate::controller::PageController::new(crate::net::api::HttpApi, crate::controller::SignalView { result, table })
}
