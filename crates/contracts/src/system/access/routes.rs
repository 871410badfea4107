use serde::Serialize;

use super::model::ModuleKey;
use super::permission::Capability;
use super::registry::ModuleRegistry;
use crate::system::session::SessionContext;

/// What a derived route renders for its module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteKind {
    List,
    Details,
    Add,
    Edit,
}

impl RouteKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RouteKind::List => "list",
            RouteKind::Details => "details",
            RouteKind::Add => "add",
            RouteKind::Edit => "edit",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RouteEntry<C> {
    pub path: String,
    pub module: ModuleKey,
    pub kind: RouteKind,
    pub component: C,
}

/// Routing prefix without surrounding slashes: `"/dms/"` → `"dms"`.
pub fn normalize_prefix(prefix: &str) -> &str {
    prefix.trim().trim_matches('/')
}

/// `/{prefix}/{module_url}`, or `/{module_url}` for an empty prefix.
pub fn module_path(prefix: &str, module_url: &str) -> String {
    let prefix = normalize_prefix(prefix);
    let module_url = module_url.trim().trim_matches('/');
    if prefix.is_empty() {
        format!("/{module_url}")
    } else {
        format!("/{prefix}/{module_url}")
    }
}

/// Flattens the session's role tree into routes.
///
/// Walks role → child menu → module. Modules without a visible registry
/// entry are skipped. For each module the routed capabilities are checked
/// in the fixed order view, add, edit; a capability yields a route only when
/// the permission set holds the token and the entry registers a component
/// for it. A `view` route is followed by `/view/:id` when the entry has a
/// details component. Other tokens have no routing effect.
pub fn derive_routes<C: Clone>(
    session: &SessionContext,
    registry: &ModuleRegistry<C>,
    prefix: &str,
) -> Vec<RouteEntry<C>> {
    let mut routes = Vec::new();

    for module in session.modules() {
        let key = module.key();
        let Some(entry) = registry.routable(&key) else {
            continue;
        };
        let base = module_path(prefix, &module.module_url);

        for capability in &Capability::ROUTED {
            if !module.permission.has(capability) {
                continue;
            }
            let Some(component) = entry.component(capability) else {
                continue;
            };

            let (kind, path) = match capability {
                Capability::Add => (RouteKind::Add, format!("{base}/add")),
                Capability::Edit => (RouteKind::Edit, format!("{base}/edit")),
                _ => (RouteKind::List, base.clone()),
            };
            routes.push(RouteEntry {
                path,
                module: key.clone(),
                kind,
                component: component.clone(),
            });

            if *capability == Capability::View {
                if let Some(details) = &entry.view_details {
                    routes.push(RouteEntry {
                        path: format!("{base}/view/:id"),
                        module: key.clone(),
                        kind: RouteKind::Details,
                        component: details.clone(),
                    });
                }
            }
        }
    }

    routes
}
