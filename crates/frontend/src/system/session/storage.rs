use contracts::system::session::SessionContext;
use web_sys::window;

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Raw session JSON cached under `key`, if any.
pub fn get_session_json(key: &str) -> Option<String> {
    get_local_storage()?.get_item(key).ok()?
}

/// Reads and decodes the cached employee session.
///
/// A missing entry or unreadable storage gives an empty session. Invalid JSON
/// is logged and also degrades to an empty session.
pub fn load_session(key: &str) -> SessionContext {
    let Some(raw) = get_session_json(key) else {
        log::info!("No cached session under '{}'", key);
        return SessionContext::empty();
    };

    match SessionContext::from_json(&raw) {
        Ok(session) => {
            log::debug!(
                "Session loaded: {} roles, {} modules",
                session.roles.len(),
                session.modules().count()
            );
            session
        }
        Err(e) => {
            log::warn!("Cached session under '{}' is not valid JSON: {}", key, e);
            SessionContext::empty()
        }
    }
}

/// Drops the cached session, e.g. after sign-out in another tab.
pub fn clear_session(key: &str) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(key);
    }
}
