use contracts::system::access::{active_segment, RouteTable};
use contracts::system::session::SessionContext;
use leptos::prelude::*;

use crate::layout::global_context::use_app_context;
use crate::layout::left::sidebar::Sidebar;
use crate::layout::Shell;
use crate::shared::config::use_config;
use crate::system::access::page::ModulePage;
use crate::system::access::registry::module_registry;
use crate::system::pages::{NoAccessPage, SignedOutPage};
use crate::system::session::context::use_session;

#[component]
fn MainLayout() -> impl IntoView {
    let ctx = use_app_context();

    // Initialize router integration. This runs once when the component is created.
    ctx.init_router_integration();

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=|| view! { <RoutedPage /> }.into_any()
        />
    }
}

/// Resolves the current path against the routes derived from the session.
#[component]
fn RoutedPage() -> impl IntoView {
    let ctx = use_app_context();
    let session = use_session();
    let prefix = StoredValue::new(use_config().routing.prefix);

    let table = Memo::new(move |_| {
        session.with(|s| RouteTable::derive(s, module_registry(), &prefix.get_value()))
    });
    let landing = Memo::new(move |_| table.with(|t| t.landing().map(|route| route.path.clone())));

    // Bare `/` or `/{prefix}` goes to the first permitted page.
    Effect::new(move |_| {
        let path = ctx.current_path.get();
        if active_segment(&path, &prefix.get_value()).is_some() {
            return;
        }
        if let Some(target) = landing.get() {
            ctx.redirect(&target);
        }
    });

    move || {
        let path = ctx.current_path.get();
        let matched = table.with(|t| {
            t.match_path(&path).map(|m| {
                log::debug!("route {} → {}", path, m.entry.path);
                (m.entry.component, m.param("id").map(str::to_string))
            })
        });

        let redirect_pending =
            active_segment(&path, &prefix.get_value()).is_none() && landing.get().is_some();

        match matched {
            Some((page, id)) => view! { <ModulePage page=page id=id /> }.into_any(),
            None if redirect_pending => ().into_any(),
            None => {
                log::debug!("no route for {}", path);
                view! { <NoAccessPage path=path landing=landing.get() /> }.into_any()
            }
        }
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let session = use_session();

    view! {
        <Show
            when=move || session.with(SessionContext::is_signed_in)
            fallback=|| view! { <SignedOutPage /> }
        >
            <MainLayout />
        </Show>
    }
}
