//! TopHeader component - application top navigation bar.
//!
//! Contains the sidebar toggle, the configured application title and the
//! signed-in employee with a local sign-out.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::config::use_config;
use crate::shared::icons::icon;
use crate::system::session::context::{sign_out, use_session, use_set_session};
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let config = use_config();
    let session = use_session();
    let set_session = use_set_session();
    let storage_key = StoredValue::new(config.session.storage_key.clone());

    let toggle_sidebar = move |_| {
        ctx.toggle_left();
    };

    let logout = move |_| {
        sign_out(set_session, &storage_key.get_value());
    };

    let is_sidebar_visible = move || ctx.left_open.get();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=toggle_sidebar
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {move || if is_sidebar_visible() {
                        icon("panel-left-close")
                    } else {
                        icon("panel-left-open")
                    }}
                </button>
                <span class="top-header__title">{config.ui.title}</span>
            </div>

            <div class="top-header__actions">
                <div class="top-header__user">
                    {icon("user")}
                    <span>{move || session.with(|s| s.display_name().to_string())}</span>
                </div>

                <button class="top-header__icon-btn" on:click=logout title="Sign out">
                    "Sign out"
                </button>
            </div>
        </div>
    }
}
