use leptos::prelude::*;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct AppConfig {
    pub routing: RoutingConfig,
    pub session: SessionConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct RoutingConfig {
    /// First path segment of every module route, e.g. `/dms/driver`.
    pub prefix: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SessionConfig {
    /// localStorage key holding the cached employee session JSON.
    pub storage_key: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct UiConfig {
    pub title: String,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            prefix: "dms".to_string(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            storage_key: "employee_session".to_string(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            title: "Ride Operations".to_string(),
        }
    }
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[routing]
prefix = "dms"

[session]
storage_key = "employee_session"

[ui]
title = "Ride Operations"
"#;

const CONFIG_META_SELECTOR: &str = r#"meta[name="backoffice-config"]"#;

/// Load configuration
///
/// Search order:
/// 1. `<meta name="backoffice-config" content="...">` in the host page (TOML)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<AppConfig> {
    if let Some(raw) = config_from_page() {
        log::info!("Loading config from host page meta tag");
        return parse_config(&raw);
    }

    log::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

pub fn parse_config(raw: &str) -> anyhow::Result<AppConfig> {
    let config: AppConfig = toml::from_str(raw)?;
    Ok(config)
}

fn config_from_page() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let meta = document.query_selector(CONFIG_META_SELECTOR).ok()??;
    meta.get_attribute("content")
        .filter(|content| !content.trim().is_empty())
}

/// Hook to access the application configuration
pub fn use_config() -> AppConfig {
    use_context::<AppConfig>().expect("AppConfig not provided")
}
