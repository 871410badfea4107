use contracts::system::session::SessionContext;
use leptos::ev;
use leptos::prelude::*;

use super::storage;
use crate::shared::config::use_config;
use crate::system::access::registry::report_diagnostics;

/// Session context provider component.
///
/// Reads the cached session once on mount and again whenever another tab
/// rewrites the storage key or clears storage.
#[component]
pub fn SessionProvider(children: ChildrenFn) -> impl IntoView {
    let storage_key = use_config().session.storage_key;

    let initial = storage::load_session(&storage_key);
    report_diagnostics(&initial);
    let (session, set_session) = signal(initial);

    let handle = window_event_listener(ev::storage, move |event| {
        if !affects_session(event.key().as_deref(), &storage_key) {
            return;
        }
        log::info!("Session changed in another tab, reloading");
        let reloaded = storage::load_session(&storage_key);
        report_diagnostics(&reloaded);
        set_session.set(reloaded);
    });
    on_cleanup(move || handle.remove());

    provide_context(session);
    provide_context(set_session);

    children()
}

/// Whether a `storage` event for `changed_key` can change the cached session.
/// `None` comes from `localStorage.clear()`, which drops every key.
fn affects_session(changed_key: Option<&str>, storage_key: &str) -> bool {
    match changed_key {
        Some(key) => key == storage_key,
        None => true,
    }
}

/// Hook to access the session snapshot
pub fn use_session() -> ReadSignal<SessionContext> {
    use_context::<ReadSignal<SessionContext>>()
        .expect("SessionProvider not found in component tree")
}

pub fn use_set_session() -> WriteSignal<SessionContext> {
    use_context::<WriteSignal<SessionContext>>()
        .expect("SessionProvider not found in component tree")
}

/// Sign out locally: drop the cached session and clear the snapshot.
pub fn sign_out(set_session: WriteSignal<SessionContext>, storage_key: &str) {
    log::info!("Signing out");
    storage::clear_session(storage_key);
    set_session.set(SessionContext::empty());
}
