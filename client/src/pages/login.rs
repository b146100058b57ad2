//! Admin login: email check followed by a sign-in email request.
//!
//! DESIGN
//! ======
//! The page validates the address locally, asks the check endpoint whether it
//! belongs to an admin, and only then requests the sign-in email. Decision
//! logic lives in pure helpers so it can be tested without a browser.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::types::CheckUserResponse;
use crate::state::auth::AuthState;
use crate::util::auth::install_authed_redirect;

pub const CHECK_FAILED_MESSAGE: &str = "Something went wrong. Please try again.";
pub const SIGN_IN_FAILED_MESSAGE: &str = "We couldn't send the sign-in email. Please try again.";

/// What the login form does after the check endpoint answers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginStep {
    /// Request a sign-in email for this address.
    SendSignIn(String),
    /// Stop and show this message.
    Rejected(String),
}

pub fn next_login_step(result: Result<CheckUserResponse, String>, submitted_email: &str) -> LoginStep {
    let Ok(response) = result else {
        return LoginStep::Rejected(CHECK_FAILED_MESSAGE.to_owned());
    };
    match checkins::AccessDecision::from_response(response, submitted_email) {
        checkins::AccessDecision::Admin { email } => LoginStep::SendSignIn(email),
        decision => LoginStep::Rejected(decision.message().unwrap_or(CHECK_FAILED_MESSAGE).to_owned()),
    }
}

pub fn can_submit(email: &str, busy: bool) -> bool {
    !busy && !email.is_empty()
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    install_authed_redirect(auth, navigate.clone());

    let email = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let email_value = match checkins::validate_admin_email(&email.get()) {
            Ok(value) => value,
            Err(e) => {
                error.set(Some(e.to_string()));
                return;
            }
        };
        error.set(None);
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let checked = crate::net::api::check_user(&email_value).await;
                if let Err(e) = &checked {
                    log::warn!("check user failed: {e}");
                }
                match next_login_step(checked, &email_value) {
                    LoginStep::SendSignIn(address) => match crate::net::api::request_sign_in(&address).await {
                        Ok(()) => navigate(
                            crate::util::auth::EMAIL_SENT_PATH,
                            leptos_router::NavigateOptions::default(),
                        ),
                        Err(e) => {
                            log::warn!("sign-in request failed: {e}");
                            error.set(Some(SIGN_IN_FAILED_MESSAGE.to_owned()));
                        }
                    },
                    LoginStep::Rejected(message) => error.set(Some(message)),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&navigate, email_value);
            busy.set(false);
        }
    };

    view! {
        <div class="flex-container">
            <div class="adminlogin-container">
                <div class="adminlogin-headers">
                    <h3>"Welcome Back!"</h3>
                </div>
                <form class="form" on:submit=on_submit autocomplete="off">
                    <div class="form-row">
                        <div class="form-input-text">
                            <label for="email">"Enter your email address:"</label>
                            <input
                                id="email"
                                class="login-input"
                                type="email"
                                name="email"
                                placeholder="Email Address"
                                prop:value=move || email.get()
                                on:input=move |ev| email.set(event_target_value(&ev))
                            />
                        </div>
                    </div>
                    <Show when=move || error.get().is_some()>
                        <p class="login-message login-message--error">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    <div class="form-row">
                        <div class="form-input-button">
                            <button
                                class="login-button"
                                type="submit"
                                disabled=move || !can_submit(&email.get(), busy.get())
                            >
                                "LOGIN"
                            </button>
                        </div>
                    </div>
                </form>
            </div>
        </div>
    }
}
