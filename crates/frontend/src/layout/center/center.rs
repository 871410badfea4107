use crate::layout::global_context::AppGlobalContext;
use leptos::prelude::*;

#[component]
pub fn Center(children: Children) -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");
    let sidebar_hidden = move || !ctx.left_open.get();

    view! {
        <div data-zone="center" class="app-page" class:app-page--wide=sidebar_hidden style="flex: 1; overflow: auto;">
            {children()}
        </div>
    }
}
