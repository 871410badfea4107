use std::collections::BTreeMap;

use super::registry::ModuleRegistry;
use super::routes::{derive_routes, RouteEntry};
use crate::system::session::SessionContext;

/// Result of matching a browser path against the derived routes.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteMatch<'a, C> {
    pub entry: &'a RouteEntry<C>,
    /// Values captured by `:name` segments, e.g. `{"id": "42"}`.
    pub params: BTreeMap<String, String>,
}

impl<C> RouteMatch<'_, C> {
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}

/// Ordered route table; the first matching entry wins.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteTable<C> {
    routes: Vec<RouteEntry<C>>,
}

impl<C> Default for RouteTable<C> {
    fn default() -> Self {
        Self { routes: Vec::new() }
    }
}

impl<C> RouteTable<C> {
    pub fn new(routes: Vec<RouteEntry<C>>) -> Self {
        Self { routes }
    }

    pub fn derive(session: &SessionContext, registry: &ModuleRegistry<C>, prefix: &str) -> Self
    where
        C: Clone,
    {
        Self::new(derive_routes(session, registry, prefix))
    }

    pub fn routes(&self) -> &[RouteEntry<C>] {
        &self.routes
    }

    /// Entry point used when the browser sits on the bare prefix.
    pub fn landing(&self) -> Option<&RouteEntry<C>> {
        self.routes.first()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn match_path(&self, path: &str) -> Option<RouteMatch<'_, C>> {
        let segments = path_segments(path);
        self.routes.iter().find_map(|entry| {
            match_pattern(&entry.path, &segments).map(|params| RouteMatch { entry, params })
        })
    }
}

/// Non-empty path segments, ignoring any query string or fragment.
pub fn path_segments(path: &str) -> Vec<&str> {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    path.split('/').filter(|s| !s.is_empty()).collect()
}

/// Case-insensitive segment comparison, using the same Unicode lower-casing
/// as `ModuleKey`.
pub fn segment_eq(a: &str, b: &str) -> bool {
    a == b || a.to_lowercase() == b.to_lowercase()
}

fn match_pattern(pattern: &str, segments: &[&str]) -> Option<BTreeMap<String, String>> {
    let pattern_segments = path_segments(pattern);
    if pattern_segments.len() != segments.len() {
        return None;
    }

    let mut params = BTreeMap::new();
    for (expected, actual) in pattern_segments.iter().zip(segments) {
        if let Some(name) = expected.strip_prefix(':') {
            params.insert(name.to_string(), actual.to_string());
        } else if !segment_eq(expected, actual) {
            return None;
        }
    }
    Some(params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::access::model::ModuleKey;
    use crate::system::access::navigation::active_segment;
    use crate::system::access::registry::ModuleEntry;
    use crate::system::access::routes::RouteKind;
    use crate::system::access::test_support::{registry, session, PREFIX};

    fn route(path: &str, component: &'static str) -> RouteEntry<&'static str> {
        RouteEntry {
            path: path.to_string(),
            module: ModuleKey::new("driver"),
            kind: RouteKind::List,
            component,
        }
    }

    #[test]
    fn test_matches_static_and_param_segments() {
        let table = RouteTable::derive(&session(), &registry(), PREFIX);

        let list = table.match_path("/dms/driver").unwrap();
        assert_eq!(list.entry.component, "DriverList");
        assert!(list.params.is_empty());

        let details = table.match_path("/dms/driver/view/d-981").unwrap();
        assert_eq!(details.entry.kind, RouteKind::Details);
        assert_eq!(details.param("id"), Some("d-981"));

        assert!(table.match_path("/dms/driver/add").is_none());
        assert!(table.match_path("/dms/rider").is_none());
    }

    #[test]
    fn test_case_trailing_slash_and_query_are_ignored() {
        let table = RouteTable::derive(&session(), &registry(), PREFIX);
        let found = table.match_path("/DMS/VehicleType/Edit/?tab=general#top").unwrap();
        assert_eq!(found.entry.component, "VehicleTypeEdit");
    }

    #[test]
    fn test_non_ascii_segments_fold_like_module_keys() {
        let session = SessionContext::from_json(
            r#"[{"parentMenu": "--", "childMenus": [{"childMenu": "--", "modules": [
                {"moduleUrl": "Ärzte", "moduleName": "Ärzte", "permission": "view"}
            ]}]}]"#,
        )
        .unwrap();
        let registry = ModuleRegistry::new().with("ärzte", ModuleEntry::new().view("Doctors"));
        let table = RouteTable::derive(&session, &registry, PREFIX);

        assert_eq!(table.routes()[0].path, "/dms/Ärzte");
        assert_eq!(table.match_path("/dms/ärzte").unwrap().entry.component, "Doctors");
        assert_eq!(table.match_path("/DMS/ÄRZTE").unwrap().entry.component, "Doctors");
        assert_eq!(
            active_segment("/dms/ÄRZTE", PREFIX).as_deref(),
            Some(table.routes()[0].module.as_str())
        );
        assert!(segment_eq("Straße", "straße"));
        assert!(!segment_eq("trip", "trips"));
    }

    #[test]
    fn test_first_match_wins() {
        let table = RouteTable::new(vec![
            route("/dms/driver", "First"),
            route("/dms/Driver", "Second"),
        ]);
        assert_eq!(table.match_path("/dms/driver").unwrap().entry.component, "First");
    }

    #[test]
    fn test_landing_is_first_route() {
        let table = RouteTable::derive(&session(), &registry(), PREFIX);
        assert_eq!(table.landing().map(|r| r.path.as_str()), Some("/dms/dashboard"));
        assert!(RouteTable::<&str>::default().landing().is_none());
    }

    #[test]
    fn test_path_segments() {
        assert_eq!(path_segments("//dms//trip/"), vec!["dms", "trip"]);
        assert!(path_segments("/").is_empty());
        assert!(path_segments("?x=1").is_empty());
    }
}
