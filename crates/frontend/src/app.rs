use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::config::{load_config, AppConfig};
use crate::system::session::context::SessionProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = load_config().unwrap_or_else(|e| {
        log::warn!("Invalid configuration, falling back to defaults: {e:#}");
        AppConfig::default()
    });

    // Configuration is read once; everything below takes it from context.
    provide_context(config);

    // Current path, sidebar visibility
    provide_context(AppGlobalContext::new());

    view! {
        <SessionProvider>
            <AppRoutes />
        </SessionProvider>
    }
}
