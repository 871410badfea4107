use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::JsValue;
use web_sys::window;

/// Shell-wide UI state: the routed path and sidebar visibility.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub current_path: RwSignal<String>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            current_path: RwSignal::new(location_path()),
            left_open: RwSignal::new(true),
        }
    }

    /// Keeps `current_path` in sync with browser back/forward.
    pub fn init_router_integration(&self) {
        let this = *self;
        let handle = window_event_listener(ev::popstate, move |_| {
            let path = location_path();
            log::debug!("popstate → {}", path);
            this.current_path.set(path);
        });
        on_cleanup(move || handle.remove());
    }

    /// Pushes a history entry and routes to `path`.
    pub fn navigate(&self, path: &str) {
        if self.current_path.with_untracked(|current| current == path) {
            return;
        }
        log::debug!("navigate → {}", path);
        if let Some(history) = window().and_then(|w| w.history().ok()) {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
        }
        self.current_path.set(path.to_string());
    }

    /// Replaces the current history entry, e.g. for the landing redirect.
    pub fn redirect(&self, path: &str) {
        log::debug!("redirect → {}", path);
        if let Some(history) = window().and_then(|w| w.history().ok()) {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(path));
        }
        self.current_path.set(path.to_string());
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Decoded `window.location.pathname`, or `/` outside a browser.
pub fn location_path() -> String {
    window()
        .and_then(|w| w.location().pathname().ok())
        .filter(|path| !path.is_empty())
        .map(|path| decode_path(&path))
        .unwrap_or_else(|| "/".to_string())
}

/// Percent-decodes a pathname so it compares equal to paths built from raw
/// `moduleUrl`s. Sequences that do not decode to UTF-8 are kept as is.
pub fn decode_path(path: &str) -> String {
    match urlencoding::decode(path) {
        Ok(decoded) => decoded.into_owned(),
        Err(e) => {
            log::warn!("Cannot decode path {}: {}", path, e);
            path.to_string()
        }
    }
}

/// Hook to access the shell context
pub fn use_app_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext not found")
}
