//! Sidebar built from the employee's role tree.
//!
//! Standalone items come first, then one collapsible group per named role.
//! At most one group and one sub group are open; the open pair is reset from
//! the current path whenever the path or session changes.

use contracts::system::access::{
    active_segment, build_navigation, NavExpansion, NavGroup, NavItem, NavModel, NavSubGroup,
};
use leptos::prelude::*;

use crate::layout::global_context::use_app_context;
use crate::shared::config::use_config;
use crate::shared::icons::icon;
use crate::system::access::registry::module_registry;
use crate::system::session::context::use_session;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_app_context();
    let session = use_session();
    let prefix = StoredValue::new(use_config().routing.prefix);

    let model = Memo::new(move |_| {
        let path = ctx.current_path.get();
        session.with(|s| build_navigation(s, module_registry(), &prefix.get_value(), &path))
    });

    let expansion = RwSignal::new(NavExpansion::collapsed());
    Effect::new(move |_| {
        ctx.current_path.track();
        let expanded = model.with(|m| m.expanded.clone());
        expansion.set(expanded);
    });

    let active_key = Memo::new(move |_| {
        ctx.current_path
            .with(|path| active_segment(path, &prefix.get_value()))
    });

    view! {
        <nav class="app-sidebar__content">
            {move || {
                let NavModel { standalone, hierarchical, .. } = model.get();
                if standalone.is_empty() && hierarchical.is_empty() {
                    return view! {
                        <div class="app-sidebar__empty">"No modules available"</div>
                    }
                    .into_any();
                }
                view! {
                    {standalone
                        .into_iter()
                        .map(|item| view! { <SidebarItem item=item active_key=active_key depth=0 /> })
                        .collect_view()}
                    {hierarchical
                        .into_iter()
                        .map(|group| view! { <SidebarGroup group=group expansion=expansion active_key=active_key /> })
                        .collect_view()}
                }
                .into_any()
            }}
        </nav>
    }
}

#[component]
fn SidebarItem(item: NavItem, active_key: Memo<Option<String>>, depth: u8) -> impl IntoView {
    let ctx = use_app_context();
    let key = StoredValue::new(item.key.as_str().to_string());
    let href = StoredValue::new(item.href.clone());
    let padding = format!("{}px", 12 + u32::from(depth) * 10);

    view! {
        <a
            class="app-sidebar__item"
            class:app-sidebar__item--active=move || {
                active_key.with(|active| active.as_deref() == Some(key.get_value().as_str()))
            }
            href=item.href.clone()
            style:padding-left=padding
            on:click=move |ev| {
                ev.prevent_default();
                ctx.navigate(&href.get_value());
            }
        >
            <div class="app-sidebar__item-content">
                {icon(&item.icon)}
                <span>{item.module_name}</span>
            </div>
        </a>
    }
}

#[component]
fn SidebarGroup(
    group: NavGroup,
    expansion: RwSignal<NavExpansion>,
    active_key: Memo<Option<String>>,
) -> impl IntoView {
    let label = StoredValue::new(group.parent_menu.clone());
    let is_open = move || expansion.with(|e| e.is_group_open(&label.get_value()));
    let sub_groups = StoredValue::new(group.child_menus);
    let direct = StoredValue::new(group.direct_modules);

    view! {
        <div class="app-sidebar__group">
            <div
                class="app-sidebar__item"
                style:padding-left="12px"
                on:click=move |_| expansion.update(|e| *e = e.toggle_group(&label.get_value()))
            >
                <div class="app-sidebar__item-content">
                    {icon(group.icon)}
                    <span>{group.parent_menu}</span>
                </div>
                <div class="app-sidebar__chevron" class:app-sidebar__chevron--expanded=is_open>
                    {icon("chevron-right")}
                </div>
            </div>

            <Show when=is_open>
                <div class="app-sidebar__children">
                    {sub_groups
                        .get_value()
                        .into_iter()
                        .map(|sub| view! { <SidebarSubGroup sub=sub expansion=expansion active_key=active_key /> })
                        .collect_view()}
                    {direct
                        .get_value()
                        .into_iter()
                        .map(|item| view! { <SidebarItem item=item active_key=active_key depth=1 /> })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
}

#[component]
fn SidebarSubGroup(
    sub: NavSubGroup,
    expansion: RwSignal<NavExpansion>,
    active_key: Memo<Option<String>>,
) -> impl IntoView {
    let label = StoredValue::new(sub.label.clone());
    let is_open = move || expansion.with(|e| e.is_sub_group_open(&label.get_value()));
    let modules = StoredValue::new(sub.modules);

    view! {
        <div class="app-sidebar__subgroup">
            <div
                class="app-sidebar__item"
                style:padding-left="22px"
                on:click=move |_| expansion.update(|e| *e = e.toggle_sub_group(&label.get_value()))
            >
                <div class="app-sidebar__item-content">
                    <span>{sub.label}</span>
                </div>
                <div class="app-sidebar__chevron" class:app-sidebar__chevron--expanded=is_open>
                    {icon("chevron-right")}
                </div>
            </div>

            <Show when=is_open>
                <div class="app-sidebar__children">
                    {modules
                        .get_value()
                        .into_iter()
                        .map(|item| view! { <SidebarItem item=item active_key=active_key depth=2 /> })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
}
