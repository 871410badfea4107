use leptos::prelude::*;

use crate::shared::config::use_config;

/// Shown while no employee session is cached in this browser.
#[component]
pub fn SignedOutPage() -> impl IntoView {
    let config = use_config();

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>{config.ui.title}</h1>
                <h2>"No active session"</h2>
                <p>
                    "Sign in through the employee portal. This page picks up the "
                    "session as soon as it is stored."
                </p>
            </div>
        </div>
    }
}
