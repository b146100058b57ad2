//! Event overview: chart grouping, location selector and headline totals.

use leptos::prelude::*;

use checkins::ChartKind;

use crate::state::dashboard::DashboardState;

#[component]
pub fn EventOverview() -> impl IntoView {
    let dashboard = expect_context::<RwSignal<DashboardState>>();

    let on_location_change = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        dashboard.update(|s| s.select_location(&value));
    };

    let volunteer_count = move || dashboard.get().registered_volunteers_label();

    view! {
        <section class="event-overview">
            <div class="event-overview__kinds" role="tablist">
                {ChartKind::ALL
                    .into_iter()
                    .map(|kind| {
                        view! {
                            <button
                                class="event-overview__kind"
                                class:event-overview__kind--active=move || dashboard.get().chart_kind == kind
                                role="tab"
                                on:click=move |_| dashboard.update(|s| s.select_chart_kind(kind))
                            >
                                {kind.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <label class="event-overview__location">
                "Location"
                <select
                    class="event-overview__select"
                    prop:value=move || dashboard.get().location.value().to_owned()
                    on:change=on_location_change
                >
                    {move || {
                        dashboard
                            .get()
                            .location_options()
                            .into_iter()
                            .map(|option| {
                                let value = option.clone();
                                view! { <option value=value>{option}</option> }
                            })
                            .collect_view()
                    }}
                </select>
            </label>
            <dl class="event-overview__totals">
                <div class="event-overview__total">
                    <dt>"Check-ins"</dt>
                    <dd>{move || dashboard.get().total_check_ins()}</dd>
                </div>
                <div class="event-overview__total">
                    <dt>"Volunteers checked in"</dt>
                    <dd>{move || dashboard.get().distinct_volunteers()}</dd>
                </div>
                <div class="event-overview__total">
                    <dt>"Registered volunteers"</dt>
                    <dd>{volunteer_count}</dd>
                </div>
            </dl>
        </section>
    }
}
