//! Confirmation shown after a sign-in email was requested.

use leptos::prelude::*;

use crate::util::auth::LOGIN_PATH;

#[component]
pub fn EmailSentPage() -> impl IntoView {
    view! {
        <div class="flex-container">
            <div class="adminlogin-container">
                <div class="adminlogin-headers">
                    <h3>"Check your email"</h3>
                </div>
                <p class="email-sent__message">
                    "We sent a sign-in link to your inbox. Open it on this device to reach the dashboard."
                </p>
                <a class="email-sent__back" href=LOGIN_PATH>
                    "Use a different email"
                </a>
            </div>
        </div>
    }
}
