//! Housing feature form.

use leptos::prelude::*;

use crate::state::form::{FORM_FIELDS, FieldKind, FormField};

/// The prediction form. Submission is handled by the owning page.
#[component]
pub fn PredictionForm(
    form_ref: NodeRef<leptos::html::Form>,
    on_submit: Callback<leptos::ev::SubmitEvent>,
) -> impl IntoView {
    view! {
        <form id="prediction-form" class="prediction-form" node_ref=form_ref on:submit=move |ev| on_submit.run(ev)>
            {FORM_FIELDS.iter().copied().map(field_view).collect::<Vec<_>>()}
            <button class="btn btn--primary" type="submit">"Predict"</button>
        </form>
    }
}

fn field_view(field: FormField) -> impl IntoView {
    let control = match field.kind {
        FieldKind::Number { step } => view! {
            <input class="prediction-form__input" type="number" id=field.name name=field.name step=step/>
        }
        .into_any(),
        FieldKind::Select { options } => view! {
            <select class="prediction-form__input" id=field.name name=field.name>
                {options.iter().map(|opt| view! { <option value=*opt>{*opt}</option> }).collect::<Vec<_>>()}
            </select>
        }
        .into_any(),
    };

    view! {
        <label class="prediction-form__label" for=field.name>
            {field.label}
            {control}
        </label>
    }
}
