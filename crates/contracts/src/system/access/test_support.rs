//! Shared fixtures for access tests.

use super::registry::{ModuleEntry, ModuleRegistry};
use crate::system::session::SessionContext;

pub const PREFIX: &str = "dms";

pub const SESSION_JSON: &str = r#"{
    "employeeId": "emp-17",
    "employeeName": "Dispatch Lead",
    "email": "lead@example.com",
    "employeeRole": [
        {
            "parentMenu": "--",
            "childMenus": [
                { "childMenu": "--", "modules": [
                    { "moduleUrl": "dashboard", "moduleName": "Dashboard", "permission": "view" }
                ] }
            ]
        },
        {
            "parentMenu": "Driver Management",
            "childMenus": [
                { "childMenu": "Drivers", "modules": [
                    { "moduleUrl": "driver", "moduleName": "Drivers", "permission": "view,edit" },
                    { "moduleUrl": "vehicleType", "moduleName": "Vehicle Types", "permission": "view,add,edit,delete" }
                ] },
                { "childMenu": "--", "modules": [
                    { "moduleUrl": "driverPayout", "moduleName": "Driver Payouts", "permission": "view" }
                ] }
            ]
        },
        {
            "parentMenu": "Trip Management",
            "childMenus": [
                { "childMenu": "--", "modules": [
                    { "moduleUrl": "trip", "moduleName": "Trips", "permission": "view,rideHistory" }
                ] }
            ]
        },
        {
            "parentMenu": "Legacy",
            "childMenus": [
                { "childMenu": "Old", "modules": [
                    { "moduleUrl": "legacyFeature", "moduleName": "Legacy", "permission": "view" }
                ] }
            ]
        }
    ]
}"#;

pub fn session() -> SessionContext {
    SessionContext::from_json(SESSION_JSON).expect("fixture session is valid JSON")
}

pub fn registry() -> ModuleRegistry<&'static str> {
    ModuleRegistry::new()
        .with(
            "dashboard",
            ModuleEntry::new().view("DashboardView").icon("layout-dashboard"),
        )
        .with(
            "driver",
            ModuleEntry::new()
                .view("DriverList")
                .add("DriverAdd")
                .edit("DriverEdit")
                .view_details("DriverDetails")
                .icon("car"),
        )
        .with(
            "vehicletype",
            ModuleEntry::new()
                .view("VehicleTypeList")
                .add("VehicleTypeAdd")
                .edit("VehicleTypeEdit"),
        )
        .with(
            "driverPayout",
            ModuleEntry::new().view("DriverPayoutList").hide(),
        )
        .with(
            "trip",
            ModuleEntry::new()
                .view("TripList")
                .view_details("TripDetails")
                .extra_capability("rideHistory")
                .icon("map"),
        )
}
