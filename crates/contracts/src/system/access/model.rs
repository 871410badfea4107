//! Role tree cached in the employee session: role → child menu → module.
//!
//! All types decode leniently from `serde_json::Value`: missing or mistyped
//! collections become empty, mistyped strings become empty strings.

use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;
use std::fmt;

use super::permission::PermissionSet;
use crate::shared::lenient::{array_field, objects, str_field};

/// Wire marker for "no grouping" in `parentMenu` / `childMenu`.
pub const NO_GROUPING: &str = "--";

/// Case-insensitive module identity, the lower-cased `moduleUrl`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ModuleKey(String);

impl ModuleKey {
    pub fn new(module_url: &str) -> Self {
        Self(module_url.trim().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for ModuleKey {
    fn from(module_url: &str) -> Self {
        Self::new(module_url)
    }
}

impl fmt::Display for ModuleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Menu grouping label. `Standalone` replaces the `"--"` marker.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Grouping {
    #[default]
    Standalone,
    Named(String),
}

impl Grouping {
    /// `"--"`, blank and absent labels all mean "no grouping".
    pub fn from_label(label: Option<&str>) -> Self {
        match label.map(str::trim) {
            Some(label) if !label.is_empty() && label != NO_GROUPING => {
                Grouping::Named(label.to_string())
            }
            _ => Grouping::Standalone,
        }
    }

    pub fn label(&self) -> Option<&str> {
        match self {
            Grouping::Standalone => None,
            Grouping::Named(label) => Some(label),
        }
    }

    pub fn is_standalone(&self) -> bool {
        matches!(self, Grouping::Standalone)
    }
}

impl Serialize for Grouping {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label().unwrap_or(NO_GROUPING))
    }
}

/// Smallest navigable unit.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "Value")]
pub struct Module {
    pub module_url: String,
    pub module_name: String,
    pub permission: PermissionSet,
}

impl Module {
    pub fn key(&self) -> ModuleKey {
        ModuleKey::new(&self.module_url)
    }
}

impl From<&Value> for Module {
    fn from(value: &Value) -> Self {
        Self {
            module_url: str_field(value, "moduleUrl")
                .unwrap_or_default()
                .trim()
                .to_string(),
            module_name: str_field(value, "moduleName")
                .unwrap_or_default()
                .to_string(),
            permission: value
                .get("permission")
                .map(PermissionSet::from_value)
                .unwrap_or_default(),
        }
    }
}

impl From<Value> for Module {
    fn from(value: Value) -> Self {
        Self::from(&value)
    }
}

/// Modules grouped under an optional sub-label.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "Value")]
pub struct ChildMenu {
    pub child_menu: Grouping,
    pub modules: Vec<Module>,
}

impl From<&Value> for ChildMenu {
    fn from(value: &Value) -> Self {
        Self {
            child_menu: Grouping::from_label(str_field(value, "childMenu")),
            modules: objects(array_field(value, "modules"))
                .map(Module::from)
                .collect(),
        }
    }
}

impl From<Value> for ChildMenu {
    fn from(value: Value) -> Self {
        Self::from(&value)
    }
}

/// Top-level navigation group assigned to an employee.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "Value")]
pub struct Role {
    pub parent_menu: Grouping,
    pub child_menus: Vec<ChildMenu>,
}

impl Role {
    /// Every module of the role, in child-menu order.
    pub fn modules(&self) -> impl Iterator<Item = &Module> {
        self.child_menus.iter().flat_map(|child| child.modules.iter())
    }
}

impl From<&Value> for Role {
    fn from(value: &Value) -> Self {
        Self {
            parent_menu: Grouping::from_label(str_field(value, "parentMenu")),
            child_menus: objects(array_field(value, "childMenus"))
                .map(ChildMenu::from)
                .collect(),
        }
    }
}

impl From<Value> for Role {
    fn from(value: Value) -> Self {
        Self::from(&value)
    }
}

/// Role list from a JSON value; anything but an array yields no roles.
pub fn roles_from_value(value: &Value) -> Vec<Role> {
    value
        .as_array()
        .map(|items| objects(items).map(Role::from).collect())
        .unwrap_or_default()
}
