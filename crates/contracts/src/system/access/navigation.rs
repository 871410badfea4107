//! Sidebar model derived from the employee's role tree.
//!
//! Roles without a parent label contribute standalone entries; named roles
//! become collapsible groups with optional sub groups. The current browser
//! path decides which group starts expanded.

use serde::Serialize;

use super::expansion::NavExpansion;
use super::matcher::{path_segments, segment_eq};
use super::model::{Grouping, Module, ModuleKey};
use super::permission::Capability;
use super::registry::{ModuleEntry, ModuleRegistry};
use super::routes::{module_path, normalize_prefix};
use crate::system::session::SessionContext;

pub const GROUP_ICON_FALLBACK: &str = "folder";
pub const MODULE_ICON_FALLBACK: &str = "circle";

/// Lower-cased group label → icon name.
const GROUP_ICONS: &[(&str, &str)] = &[
    ("dashboard", "layout-dashboard"),
    ("drivers", "car"),
    ("driver management", "car"),
    ("riders", "users"),
    ("rider management", "users"),
    ("trips", "map"),
    ("trip management", "map"),
    ("payments", "credit-card"),
    ("payment management", "credit-card"),
    ("feedback", "message-square"),
    ("organization", "shield"),
    ("roles & permissions", "shield"),
    ("employee management", "shield"),
    ("content", "file-text"),
    ("cms", "file-text"),
    ("blog", "file-text"),
    ("careers", "briefcase"),
    ("reports", "bar-chart"),
    ("settings", "settings"),
];

pub fn group_icon(label: &str) -> &'static str {
    let label = label.trim().to_lowercase();
    GROUP_ICONS
        .iter()
        .find(|(name, _)| *name == label)
        .map(|(_, icon)| *icon)
        .unwrap_or(GROUP_ICON_FALLBACK)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub key: ModuleKey,
    pub module_url: String,
    pub module_name: String,
    pub icon: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavSubGroup {
    pub label: String,
    pub modules: Vec<NavItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavGroup {
    pub parent_menu: String,
    pub icon: &'static str,
    pub child_menus: Vec<NavSubGroup>,
    pub direct_modules: Vec<NavItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct NavModel {
    pub standalone: Vec<NavItem>,
    pub hierarchical: Vec<NavGroup>,
    pub expanded: NavExpansion,
}

impl NavModel {
    pub fn is_empty(&self) -> bool {
        self.standalone.is_empty() && self.hierarchical.is_empty()
    }

    /// All items in render order.
    pub fn items(&self) -> impl Iterator<Item = &NavItem> {
        self.standalone.iter().chain(self.hierarchical.iter().flat_map(|group| {
            group
                .child_menus
                .iter()
                .flat_map(|sub| sub.modules.iter())
                .chain(group.direct_modules.iter())
        }))
    }

    /// Expansion that reveals the item for `path`.
    ///
    /// Standalone items are searched first and need nothing expanded; then
    /// groups in order, sub groups before direct modules. No match leaves
    /// everything collapsed.
    pub fn expansion_for(&self, path: &str, prefix: &str) -> NavExpansion {
        let Some(segment) = active_segment(path, prefix) else {
            return NavExpansion::collapsed();
        };
        let matches = |item: &NavItem| item.key.as_str() == segment;

        if self.standalone.iter().any(matches) {
            return NavExpansion::collapsed();
        }
        for group in &self.hierarchical {
            for sub in &group.child_menus {
                if sub.modules.iter().any(matches) {
                    return NavExpansion::sub_group(&group.parent_menu, &sub.label);
                }
            }
            if group.direct_modules.iter().any(matches) {
                return NavExpansion::group(&group.parent_menu);
            }
        }
        NavExpansion::collapsed()
    }
}

/// Lower-cased first path segment after the routing prefix.
///
/// `/dms/driver/edit` with prefix `dms` gives `driver`. Paths that do not
/// start with the prefix are read from their first segment.
pub fn active_segment(path: &str, prefix: &str) -> Option<String> {
    let segments = path_segments(path);
    let prefix_segments = path_segments(normalize_prefix(prefix));

    let has_prefix = !prefix_segments.is_empty()
        && segments.len() >= prefix_segments.len()
        && prefix_segments
            .iter()
            .zip(&segments)
            .all(|(p, s)| segment_eq(p, s));
    let rest = if has_prefix {
        &segments[prefix_segments.len()..]
    } else {
        &segments[..]
    };

    rest.first().map(|segment| segment.to_lowercase())
}

/// Builds the sidebar model for `session`.
///
/// Standalone modules are shown only with the `view` token and a registered
/// `view` component. Modules inside named groups only need a visible registry
/// entry; the `view` token is not rechecked there.
pub fn build_navigation<C>(
    session: &SessionContext,
    registry: &ModuleRegistry<C>,
    prefix: &str,
    current_path: &str,
) -> NavModel {
    let mut model = NavModel::default();

    for role in &session.roles {
        match &role.parent_menu {
            Grouping::Standalone => {
                for module in role.modules() {
                    let Some(entry) = registry.routable(&module.key()) else {
                        continue;
                    };
                    if module.permission.has(&Capability::View) && entry.view.is_some() {
                        model.standalone.push(nav_item(module, entry, prefix));
                    }
                }
            }
            Grouping::Named(parent_menu) => {
                let mut child_menus = Vec::new();
                let mut direct_modules = Vec::new();

                for child in &role.child_menus {
                    let items: Vec<NavItem> = child
                        .modules
                        .iter()
                        .filter_map(|module| {
                            registry
                                .routable(&module.key())
                                .map(|entry| nav_item(module, entry, prefix))
                        })
                        .collect();

                    match &child.child_menu {
                        Grouping::Standalone => direct_modules.extend(items),
                        Grouping::Named(label) if !items.is_empty() => {
                            child_menus.push(NavSubGroup {
                                label: label.clone(),
                                modules: items,
                            })
                        }
                        Grouping::Named(_) => {}
                    }
                }

                if child_menus.is_empty() && direct_modules.is_empty() {
                    continue;
                }
                model.hierarchical.push(NavGroup {
                    parent_menu: parent_menu.clone(),
                    icon: group_icon(parent_menu),
                    child_menus,
                    direct_modules,
                });
            }
        }
    }

    model.expanded = model.expansion_for(current_path, prefix);
    model
}

fn nav_item<C>(module: &Module, entry: &ModuleEntry<C>, prefix: &str) -> NavItem {
    NavItem {
        key: module.key(),
        module_url: module.module_url.clone(),
        module_name: module.module_name.clone(),
        icon: entry
            .icon
            .clone()
            .unwrap_or_else(|| MODULE_ICON_FALLBACK.to_string()),
        href: module_path(prefix, &module.module_url),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::access::registry::ModuleEntry;
    use crate::system::access::test_support::{registry, session, PREFIX};

    fn keys<'a>(items: impl Iterator<Item = &'a NavItem>) -> Vec<&'a str> {
        items.map(|item| item.key.as_str()).collect()
    }

    #[test]
    fn test_fixture_navigation_shape() {
        let nav = build_navigation(&session(), &registry(), PREFIX, "/dms/dashboard");

        assert_eq!(keys(nav.standalone.iter()), vec!["dashboard"]);
        assert_eq!(nav.hierarchical.len(), 2);

        let drivers = &nav.hierarchical[0];
        assert_eq!(drivers.parent_menu, "Driver Management");
        assert_eq!(drivers.icon, "car");
        assert_eq!(drivers.child_menus.len(), 1);
        assert_eq!(drivers.child_menus[0].label, "Drivers");
        assert_eq!(
            keys(drivers.child_menus[0].modules.iter()),
            vec!["driver", "vehicletype"]
        );
        // driverPayout is hidden
        assert!(drivers.direct_modules.is_empty());

        let trips = &nav.hierarchical[1];
        assert_eq!(trips.parent_menu, "Trip Management");
        assert!(trips.child_menus.is_empty());
        assert_eq!(keys(trips.direct_modules.iter()), vec!["trip"]);

        assert!(nav.expanded.is_collapsed());
    }

    #[test]
    fn test_items_carry_href_and_icons() {
        let nav = build_navigation(&session(), &registry(), PREFIX, "/");
        let vehicle = nav.items().find(|i| i.key.as_str() == "vehicletype").unwrap();
        assert_eq!(vehicle.href, "/dms/vehicleType");
        assert_eq!(vehicle.module_name, "Vehicle Types");
        assert_eq!(vehicle.icon, MODULE_ICON_FALLBACK);

        let driver = nav.items().find(|i| i.key.as_str() == "driver").unwrap();
        assert_eq!(driver.icon, "car");
    }

    #[test]
    fn test_unregistered_module_has_no_nav_entry() {
        let nav = build_navigation(&session(), &registry(), PREFIX, "/dms/legacyFeature");
        assert!(nav.items().all(|item| item.key.as_str() != "legacyfeature"));
        assert!(nav.hierarchical.iter().all(|g| g.parent_menu != "Legacy"));
        assert!(nav.expanded.is_collapsed());
    }

    #[test]
    fn test_standalone_role_never_lands_in_groups() {
        let session = SessionContext::from_json(
            r#"[{"parentMenu":"--","childMenus":[
                {"childMenu":"Drivers","modules":[{"moduleUrl":"driver","moduleName":"Drivers","permission":"view"}]},
                {"childMenu":"--","modules":[{"moduleUrl":"trip","moduleName":"Trips","permission":"view"}]}
            ]}]"#,
        )
        .unwrap();
        let nav = build_navigation(&session, &registry(), PREFIX, "/dms/driver");

        assert_eq!(keys(nav.standalone.iter()), vec!["driver", "trip"]);
        assert!(nav.hierarchical.is_empty());
        assert!(nav.expanded.is_collapsed());
    }

    #[test]
    fn test_standalone_requires_view_token_and_component() {
        let registry = registry().with("rider", ModuleEntry::new().add("RiderAdd"));
        let session = SessionContext::from_json(
            r#"[{"parentMenu":"","childMenus":[{"childMenu":"--","modules":[
                {"moduleUrl":"driver","permission":"edit"},
                {"moduleUrl":"rider","permission":"view,add"},
                {"moduleUrl":"trip","permission":"view"}
            ]}]}]"#,
        )
        .unwrap();
        let nav = build_navigation(&session, &registry, PREFIX, "/");
        assert_eq!(keys(nav.standalone.iter()), vec!["trip"]);
    }

    #[test]
    fn test_hidden_module_is_dropped_from_standalone_items() {
        let session = SessionContext::from_json(
            r#"[{"parentMenu":"--","childMenus":[{"childMenu":"--","modules":[
                {"moduleUrl":"driverPayout","moduleName":"Driver Payouts","permission":"view"},
                {"moduleUrl":"dashboard","moduleName":"Dashboard","permission":"view"}
            ]}]}]"#,
        )
        .unwrap();
        let registry = registry();
        assert!(registry.get("driverPayout").is_some_and(|e| e.view.is_some()));

        let nav = build_navigation(&session, &registry, PREFIX, "/dms/driverPayout");
        assert_eq!(keys(nav.standalone.iter()), vec!["dashboard"]);
        assert!(nav.hierarchical.is_empty());
        assert!(nav.expanded.is_collapsed());
    }

    #[test]
    fn test_grouped_modules_skip_the_view_check() {
        let session = SessionContext::from_json(
            r#"[{"parentMenu":"Driver Management","childMenus":[
                {"childMenu":"Drivers","modules":[{"moduleUrl":"driver","permission":"edit"}]}
            ]}]"#,
        )
        .unwrap();
        let nav = build_navigation(&session, &registry(), PREFIX, "/");
        assert_eq!(keys(nav.items()), vec!["driver"]);
    }

    #[test]
    fn test_active_child_menu_module_expands_group_and_sub_group() {
        let nav = build_navigation(&session(), &registry(), PREFIX, "/dms/driver/edit");
        assert_eq!(
            nav.expanded,
            NavExpansion::sub_group("Driver Management", "Drivers")
        );
    }

    #[test]
    fn test_active_direct_module_expands_group_only() {
        let nav = build_navigation(&session(), &registry(), PREFIX, "/dms/Trip/view/42");
        assert_eq!(nav.expanded, NavExpansion::group("Trip Management"));
    }

    #[test]
    fn test_standalone_match_stops_the_search() {
        let session = SessionContext::from_json(
            r#"[
                {"parentMenu":"--","childMenus":[{"childMenu":"--","modules":[{"moduleUrl":"trip","permission":"view"}]}]},
                {"parentMenu":"Trip Management","childMenus":[{"childMenu":"--","modules":[{"moduleUrl":"trip","permission":"view"}]}]}
            ]"#,
        )
        .unwrap();
        let nav = build_navigation(&session, &registry(), PREFIX, "/dms/trip");
        assert!(nav.expanded.is_collapsed());
    }

    #[test]
    fn test_empty_and_malformed_input_gives_empty_model() {
        let registry = registry();
        for raw in [
            "[]",
            "null",
            r#"{"employeeRole":"x"}"#,
            r#"[{"parentMenu":"Ops"},{"parentMenu":"Ops","childMenus":[{"childMenu":"A"}]}]"#,
        ] {
            let session = SessionContext::from_json(raw).unwrap();
            let nav = build_navigation(&session, &registry, PREFIX, "/dms/driver");
            assert!(nav.is_empty(), "{raw}");
            assert!(nav.expanded.is_collapsed());
        }
    }

    #[test]
    fn test_active_segment() {
        assert_eq!(active_segment("/dms/driver/edit", "dms").as_deref(), Some("driver"));
        assert_eq!(active_segment("/DMS/Rider", "/dms/").as_deref(), Some("rider"));
        assert_eq!(active_segment("/trip/view/1", "dms").as_deref(), Some("trip"));
        assert_eq!(active_segment("/admin/dms/trip", "admin/dms").as_deref(), Some("trip"));
        assert_eq!(active_segment("/dms", "dms"), None);
        assert_eq!(active_segment("", "dms"), None);
    }

    #[test]
    fn test_group_icons() {
        assert_eq!(group_icon("Trip Management"), "map");
        assert_eq!(group_icon("  PAYMENTS "), "credit-card");
        assert_eq!(group_icon("Something Else"), GROUP_ICON_FALLBACK);
    }
}
