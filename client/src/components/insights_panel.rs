//! On-demand aggregate views over stored predictions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Independent of the predict/reload flow: nothing here runs until the user
//! asks for an insight, and it never touches the predictions table.

use leptos::prelude::*;

use crate::state::insights::{InsightCase, InsightTable, InsightsState};

#[component]
pub fn InsightsPanel() -> impl IntoView {
    let insights = RwSignal::new(InsightsState::default());

    let on_case_change = move |ev: leptos::ev::Event| {
        if let Some(case) = InsightCase::from_slug(&event_target_value(&ev)) {
            insights.update(|s| s.case = case);
        }
    };

    let on_show = move |_| {
        if insights.get_untracked().loading {
            return;
        }
        insights.update(|s| {
            s.loading = true;
            s.error = None;
        });

        #[cfg(feature = "hydrate")]
        {
            let case = insights.get_untracked().case;
            leptos::task::spawn_local(async move {
                let result = crate::net::api::HttpApi.insight(case).await;
                insights.update(|s| {
                    s.loading = false;
                    match result {
                        Ok(records) => s.table = Some(InsightTable::from_records(&records)),
                        Err(e) => {
                            log::warn!("insight {} failed: {e}", case.slug());
                            s.error = Some("Could not load this insight.".to_owned());
                        }
                    }
                });
            });
        }
    };

    view! {
        <section class="insights-panel">
            <h2>"Insights"</h2>
            <div class="insights-panel__controls">
                <select class="insights-panel__select" on:change=on_case_change>
                    {InsightCase::ALL
                        .into_iter()
                        .map(|case| view! { <option value=case.slug()>{case.label()}</option> })
                        .collect::<Vec<_>>()}
                </select>
                <button class="btn" on:click=on_show disabled=move || insights.get().loading>
                    "Show"
                </button>
            </div>
            <Show when=move || insights.get().error.is_some()>
                <p class="insights-panel__error">{move || insights.get().error.unwrap_or_default()}</p>
            </Show>
            {move || insights.get().table.map(insight_table_view)}
        </section>
    }
}

fn insight_table_view(table: InsightTable) -> impl IntoView {
    if table.rows.is_empty() {
        return view! { <p class="insights-panel__empty">"No predictions yet."</p> }.into_any();
    }
    view! {
        <table class="insights-panel__table">
            <thead>
                <tr>{table.columns.into_iter().map(|c| view! { <th>{c}</th> }).collect::<Vec<_>>()}</tr>
            </thead>
            <tbody>
                {table
                    .rows
                    .into_iter()
                    .map(|row| {
                        view! { <tr>{row.into_iter().map(|cell| view! { <td>{cell}</td> }).collect::<Vec<_>>()}</tr> }
                    })
                    .collect::<Vec<_>>()}
            </tbody>
        </table>
    }
    .into_any()
}
