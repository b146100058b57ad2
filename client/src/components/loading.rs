//! Loading placeholder shown while dashboard data is in flight.

use leptos::prelude::*;

#[component]
pub fn Loading(#[prop(into, optional)] label: Option<String>) -> impl IntoView {
    let label = label.unwrap_or_else(|| "Loading...".to_owned());
    view! {
        <div class="loading" role="status" aria-live="polite">
            <span class="loading__spinner" aria-hidden="true"></span>
            <span class="loading__label">{label}</span>
        </div>
    }
}
