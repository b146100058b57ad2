//! Admin dashboard: upcoming event, overview and volunteer charts.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. On mount it fetches check-ins and
//! events (one flow) and users (another flow); whichever resolves first
//! updates its own slice of `DashboardState`.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::donut_chart::DonutChart;
use crate::components::event_overview::EventOverview;
use crate::components::loading::Loading;
use crate::components::upcoming_event::UpcomingEvent;
use crate::state::auth::AuthState;
use crate::state::dashboard::DashboardState;
use crate::util::auth::install_unauth_redirect;

/// Dashboard page. Redirects to `/login` if the user is not authenticated.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let dashboard = expect_context::<RwSignal<DashboardState>>();
    install_unauth_redirect(auth, use_navigate());

    #[cfg(feature = "hydrate")]
    {
        dashboard.update(|s| s.loading = true);
        leptos::task::spawn_local(load_records(dashboard));
        leptos::task::spawn_local(load_users(dashboard));
    }

    let volunteers = Signal::derive(move || dashboard.get().charts().volunteers);
    let hours = Signal::derive(move || dashboard.get().charts().hours);
    let average_hours = Signal::derive(move || dashboard.get().charts().average_hours);
    let volunteers_center = Signal::derive(move || dashboard.get().chart_centers().volunteers);
    let hours_center = Signal::derive(move || dashboard.get().chart_centers().hours);
    let average_center = Signal::derive(move || dashboard.get().chart_centers().average_hours);
    let is_loading = move || dashboard.get().loading;

    view! {
        <Show
            when=move || !auth.get().loading && auth.get().user.is_some()
            fallback=move || {
                view! {
                    <div class="flex-container">
                        <p>{move || if auth.get().loading { "Loading..." } else { "Redirecting to login..." }}</p>
                    </div>
                }
            }
        >
            <div class="flex-container">
                <div class="dashboard">
                    <div class="dashboard-header">
                        <p class="dashboard-header-text-small">"You have an event coming up:"</p>
                        <span class="dashboard-header__self">
                            {move || auth.get().display_name().unwrap_or_default()}
                        </span>
                    </div>

                    <Show when=move || dashboard.get().error.is_some()>
                        <p class="dashboard__error">
                            {move || dashboard.get().error.unwrap_or_default()}
                        </p>
                    </Show>

                    <Show when=move || !is_loading() fallback=|| view! { <Loading/> }>
                        <UpcomingEvent/>
                    </Show>
                    <Show when=move || !is_loading() fallback=|| view! { <Loading/> }>
                        <EventOverview/>
                    </Show>
                    <Show when=move || !is_loading() fallback=|| view! { <Loading/> }>
                        <DonutChart title="Total Volunteers" slices=volunteers center=volunteers_center/>
                    </Show>
                    <Show when=move || !is_loading() fallback=|| view! { <Loading/> }>
                        <DonutChart title="Total Volunteer Hours" slices=hours center=hours_center/>
                    </Show>
                    <Show when=move || !is_loading() fallback=|| view! { <Loading/> }>
                        <DonutChart title="Avg. Hours Per Volunteer" slices=average_hours center=average_center/>
                    </Show>
                </div>
            </div>
        </Show>
    }
}

#[cfg(feature = "hydrate")]
async fn load_records(dashboard: RwSignal<DashboardState>) {
    let check_ins = crate::net::api::fetch_check_ins().await;
    let events = crate::net::api::fetch_events().await;
    match (check_ins, events) {
        (Ok(check_ins), Ok(events)) => {
            log::debug!("dashboard loaded {} events, {} check-ins", events.len(), check_ins.len());
            dashboard.update(|s| s.apply_loaded(events, check_ins));
        }
        (Err(e), _) | (_, Err(e)) => {
            log::warn!("dashboard load failed: {e}");
            dashboard.update(|s| s.apply_load_error(format!("Unable to load dashboard data: {e}")));
        }
    }
}

#[cfg(feature = "hydrate")]
async fn load_users(dashboard: RwSignal<DashboardState>) {
    match crate::net::api::fetch_users().await {
        Ok(users) => dashboard.update(|s| s.apply_users(&users)),
        Err(e) => log::warn!("user list load failed: {e}"),
    }
}
