//! Upcoming event card with the check-in readiness toggle.
//!
//! SYSTEM CONTEXT
//! ==============
//! Volunteers can only check in once an admin opens check-in for the next
//! event. The toggle issues `PATCH /api/events/{id}` and flips the local
//! flag only after the server accepts it.

use leptos::prelude::*;

use crate::state::dashboard::DashboardState;

#[component]
pub fn UpcomingEvent() -> impl IntoView {
    let dashboard = expect_context::<RwSignal<DashboardState>>();

    let on_toggle = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        #[cfg(feature = "hydrate")]
        {
            let mut event_id = None;
            dashboard.update(|s| event_id = s.begin_check_in_toggle());
            let Some(event_id) = event_id else {
                return;
            };
            leptos::task::spawn_local(async move {
                let accepted = match crate::net::api::set_check_in_ready(&event_id).await {
                    Ok(()) => true,
                    Err(e) => {
                        log::warn!("check-in toggle failed for {event_id}: {e}");
                        false
                    }
                };
                dashboard.update(|s| s.finish_check_in_toggle(accepted));
            });
        }
    };

    let button_label = move || {
        if dashboard.get().check_in_ready { "CLOSE CHECK-IN" } else { "OPEN CHECK-IN" }
    };

    view! {
        <Show
            when=move || dashboard.get().next_event.is_some()
            fallback=|| view! { <p class="upcoming-event upcoming-event--empty">"No upcoming events."</p> }
        >
            <div class="upcoming-event">
                {move || {
                    dashboard
                        .get()
                        .next_event
                        .map(|event| {
                            view! {
                                <div class="upcoming-event__details">
                                    <p class="upcoming-event__name">{event.name}</p>
                                    <p class="upcoming-event__when">{event.when}</p>
                                    <p class="upcoming-event__meta">
                                        {event.kind}
                                        {event.location.map(|location| format!(" · {location}"))}
                                    </p>
                                </div>
                            }
                        })
                }}
                <button
                    class="upcoming-event__toggle"
                    class:upcoming-event__toggle--open=move || dashboard.get().check_in_ready
                    disabled=move || dashboard.get().toggle_pending
                    on:click=on_toggle
                >
                    {button_label}
                </button>
            </div>
        </Show>
    }
}
