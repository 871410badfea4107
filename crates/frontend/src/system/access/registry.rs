//! Back-office module registry.
//!
//! Maps each `moduleUrl` the backend may grant to the pages this shell can
//! render for it. Modules missing here are never routed, whatever the
//! employee's permissions say.

use contracts::system::access::{ModuleEntry, ModuleRegistry, RouteKind};
use contracts::system::session::SessionContext;
use once_cell::sync::Lazy;

/// Page reference stored in the registry and carried by derived routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRef {
    /// Registry key, lower-cased `moduleUrl`.
    pub module: &'static str,
    pub title: &'static str,
    pub kind: RouteKind,
}

impl PageRef {
    const fn new(module: &'static str, title: &'static str, kind: RouteKind) -> Self {
        Self { module, title, kind }
    }
}

fn list(module: &'static str, title: &'static str) -> ModuleEntry<PageRef> {
    ModuleEntry::new().view(PageRef::new(module, title, RouteKind::List))
}

fn with_details(module: &'static str, title: &'static str) -> ModuleEntry<PageRef> {
    list(module, title).view_details(PageRef::new(module, title, RouteKind::Details))
}

fn crud(module: &'static str, title: &'static str) -> ModuleEntry<PageRef> {
    list(module, title)
        .add(PageRef::new(module, title, RouteKind::Add))
        .edit(PageRef::new(module, title, RouteKind::Edit))
}

pub static MODULE_REGISTRY: Lazy<ModuleRegistry<PageRef>> = Lazy::new(|| {
    ModuleRegistry::new()
        .with("dashboard", list("dashboard", "Dashboard").icon("layout-dashboard"))
        .with(
            "driver",
            crud("driver", "Drivers")
                .view_details(PageRef::new("driver", "Drivers", RouteKind::Details))
                .icon("car"),
        )
        .with(
            "driverDocument",
            with_details("driverdocument", "Driver documents").hide(),
        )
        .with(
            "rider",
            with_details("rider", "Riders")
                .icon("users")
                .extra_capability("rideHistory"),
        )
        .with(
            "trip",
            with_details("trip", "Trips")
                .icon("map")
                .extra_capability("rideHistory"),
        )
        .with(
            "payment",
            with_details("payment", "Payments")
                .icon("credit-card")
                .extra_capability("refund"),
        )
        .with("feedback", list("feedback", "Feedback").icon("message-square"))
        .with("role", crud("role", "Roles & permissions").icon("shield"))
        .with("employee", crud("employee", "Employees").icon("user"))
        .with("blog", crud("blog", "Blog").icon("file-text"))
        .with("career", crud("career", "Careers").icon("briefcase"))
        .with("promoCode", crud("promocode", "Promo codes").icon("tag"))
        .with("vehicleType", crud("vehicletype", "Vehicle types").icon("truck"))
        .with(
            "settings",
            list("settings", "Settings")
                .edit(PageRef::new("settings", "Settings", RouteKind::Edit))
                .icon("settings"),
        )
});

pub fn module_registry() -> &'static ModuleRegistry<PageRef> {
    &MODULE_REGISTRY
}

/// Logs every role-tree entry the registry cannot serve.
///
/// Debug builds log at `error` so mismatches surface during development;
/// release builds only warn.
pub fn report_diagnostics(session: &SessionContext) {
    let diagnostics = module_registry().diagnose(session);
    for diagnostic in &diagnostics {
        if cfg!(debug_assertions) {
            log::error!("{}", diagnostic);
        } else {
            log::warn!("{}", diagnostic);
        }
    }
    if !diagnostics.is_empty() {
        log::info!("{} role tree entries ignored", diagnostics.len());
    }
}
