use contracts::system::access::{module_path, Capability, RouteKind};
use leptos::prelude::*;

use super::registry::{module_registry, PageRef};
use crate::layout::global_context::use_app_context;
use crate::shared::config::use_config;
use crate::shared::icons::icon;
use crate::shared::page_frame::{category_for, PageFrame};
use crate::system::session::context::use_session;

const RIDE_HISTORY: &str = "ridehistory";

fn heading(page: &PageRef, id: Option<&str>) -> String {
    match (page.kind, id) {
        (RouteKind::List, _) => page.title.to_string(),
        (RouteKind::Details, Some(id)) => format!("{} · #{}", page.title, id),
        (RouteKind::Details, None) => format!("{} · details", page.title),
        (RouteKind::Add, _) => format!("{} · new", page.title),
        (RouteKind::Edit, _) => format!("{} · edit", page.title),
    }
}

/// Frame for a routed module page: header, permission-gated toolbar and the
/// list/details/form body placeholder.
#[component]
pub fn ModulePage(page: PageRef, id: Option<String>) -> impl IntoView {
    let ctx = use_app_context();
    let session = use_session();
    let prefix = use_config().routing.prefix;

    let module = page.module;
    let base = module_path(&prefix, module);
    let entry = module_registry().get(module);
    let has_add = entry.is_some_and(|e| e.component(&Capability::Add).is_some());
    let has_edit = entry.is_some_and(|e| e.component(&Capability::Edit).is_some());

    let can = move |token: &'static str| session.with(|s| s.can(module, token));
    let show_add = move || page.kind == RouteKind::List && has_add && can("add");
    let show_edit = move || page.kind != RouteKind::Edit && has_edit && can("edit");
    let show_delete = move || page.kind == RouteKind::Details && can("delete");
    let show_history = move || page.kind != RouteKind::Add && can(RIDE_HISTORY);
    let history_open = RwSignal::new(false);

    let granted = move || {
        session.with(|s| {
            s.permissions_for(module)
                .tokens()
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
    };

    let add_href = format!("{base}/add");
    let edit_href = format!("{base}/edit");
    let title = heading(&page, id.as_deref());
    let page_id = format!("{}--{}", module, page.kind.as_str());

    view! {
        <PageFrame page_id=page_id category=category_for(page.kind)>
            <div class="page__header">
                <h1 class="page__title">{title}</h1>
                <div class="page__toolbar">
                    <Show when=show_add>
                        {
                            let href = add_href.clone();
                            view! {
                                <button class="button button--primary" on:click=move |_| ctx.navigate(&href)>
                                    {icon("plus")}
                                    <span>"Add"</span>
                                </button>
                            }
                        }
                    </Show>
                    <Show when=show_edit>
                        {
                            let href = edit_href.clone();
                            view! {
                                <button class="button" on:click=move |_| ctx.navigate(&href)>
                                    {icon("edit")}
                                    <span>"Edit"</span>
                                </button>
                            }
                        }
                    </Show>
                    <Show when=show_delete>
                        <button
                            class="button button--danger"
                            on:click=move |_| log::info!("Delete requested for {}", module)
                        >
                            <span>"Delete"</span>
                        </button>
                    </Show>
                    <Show when=show_history>
                        <button
                            class="button"
                            class:button--active=move || history_open.get()
                            on:click=move |_| history_open.update(|open| *open = !*open)
                        >
                            {icon("history")}
                            <span>"Ride history"</span>
                        </button>
                    </Show>
                </div>
            </div>
            <div class="page__content">
                <div class="page__permissions">
                    {move || granted().into_iter().map(|token| view! {
                        <span class="badge">{token}</span>
                    }).collect_view()}
                </div>
                <Show when=move || history_open.get()>
                    <section class="page__panel">
                        <h2>"Ride history"</h2>
                    </section>
                </Show>
            </div>
        </PageFrame>
    }
}
