//! Permission-driven routes and navigation.
//!
//! The employee's role tree (role → child menu → module, each module with a
//! comma-separated permission string) is joined against a static module
//! registry to produce:
//!
//! - `routes`: the flat list of paths the shell may render
//! - `navigation`: the two-tier sidebar model and its initial expansion
//!
//! Both derivations are pure and never fail; mismatches between the role tree
//! and the registry are reported separately by `ModuleRegistry::diagnose`.

pub mod error;
pub mod expansion;
pub mod matcher;
pub mod model;
pub mod navigation;
pub mod permission;
pub mod registry;
pub mod routes;

#[cfg(test)]
pub(crate) mod test_support;

pub use error::{AccessDiagnostic, AccessError};
pub use expansion::NavExpansion;
pub use matcher::{RouteMatch, RouteTable};
pub use model::{ChildMenu, Grouping, Module, ModuleKey, Role};
pub use navigation::{active_segment, build_navigation, NavGroup, NavItem, NavModel, NavSubGroup};
pub use permission::{Capability, PermissionSet};
pub use registry::{ModuleEntry, ModuleRegistry};
pub use routes::{derive_routes, module_path, RouteEntry, RouteKind};
