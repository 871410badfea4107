use leptos::prelude::*;

use crate::layout::global_context::use_app_context;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_DETAIL};

/// Rendered for paths no derived route matches.
///
/// `landing` is the employee's first permitted page, if there is one.
#[component]
pub fn NoAccessPage(path: String, landing: Option<String>) -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <PageFrame page_id="no-access--detail".to_string() category=PAGE_CAT_DETAIL>
            <div class="page__content page__content--centered">
                {icon("lock")}
                <h1>"Page not available"</h1>
                <p>
                    "Your roles do not grant access to "
                    <code>{path}</code>
                    "."
                </p>
                {landing.map(|href| view! {
                    <button class="button button--primary" on:click=move |_| ctx.navigate(&href)>
                        "Go to start page"
                    </button>
                })}
            </div>
        </PageFrame>
    }
}
