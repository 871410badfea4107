//! Immutable snapshot of the cached employee session.
//!
//! The shell reads the session once per change and hands the snapshot to the
//! route deriver and the navigation builder; neither touches storage.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::access::model::{roles_from_value, Module, ModuleKey, Role};
use super::access::permission::PermissionSet;
use crate::shared::lenient::opt_string_field;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "Value")]
pub struct SessionContext {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(rename = "employeeRole")]
    pub roles: Vec<Role>,
}

impl SessionContext {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_roles(roles: Vec<Role>) -> Self {
        Self {
            roles,
            ..Self::default()
        }
    }

    /// Decodes a cached session.
    ///
    /// Only syntactically invalid JSON is an error. A bare JSON array is read
    /// as the role list; any other shape yields a session without roles.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_str(raw)?;
        Ok(Self::from(&value))
    }

    /// Every module in traversal order: role, child menu, module.
    pub fn modules(&self) -> impl Iterator<Item = &Module> {
        self.roles.iter().flat_map(Role::modules)
    }

    /// Union of the permissions granted to `module_url` across all roles.
    pub fn permissions_for(&self, module_url: &str) -> PermissionSet {
        let key = ModuleKey::new(module_url);
        let mut permissions = PermissionSet::default();
        for module in self.modules().filter(|m| m.key() == key) {
            permissions.extend(&module.permission);
        }
        permissions
    }

    /// Whether the employee holds `token` on `module_url`, e.g. `delete` or
    /// `ridehistory`. Used to gate individual UI actions.
    pub fn can(&self, module_url: &str, token: &str) -> bool {
        let key = ModuleKey::new(module_url);
        self.modules()
            .any(|m| m.key() == key && m.permission.contains(token))
    }

    pub fn has_roles(&self) -> bool {
        !self.roles.is_empty()
    }

    /// Whether a session is cached at all. An identified employee whose role
    /// tree is missing or malformed is still signed in, with nothing granted.
    pub fn is_signed_in(&self) -> bool {
        self.employee_id.is_some()
            || self.employee_name.is_some()
            || self.email.is_some()
            || self.has_roles()
    }

    pub fn display_name(&self) -> &str {
        self.employee_name
            .as_deref()
            .or(self.email.as_deref())
            .unwrap_or("Employee")
    }
}

impl From<&Value> for SessionContext {
    fn from(value: &Value) -> Self {
        if value.is_array() {
            return Self::with_roles(roles_from_value(value));
        }
        Self {
            employee_id: opt_string_field(value, "employeeId"),
            employee_name: opt_string_field(value, "employeeName"),
            email: opt_string_field(value, "email"),
            roles: value
                .get("employeeRole")
                .map(roles_from_value)
                .unwrap_or_default(),
        }
    }
}

impl From<Value> for SessionContext {
    fn from(value: Value) -> Self {
        Self::from(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::access::test_support::SESSION_JSON;

    #[test]
    fn test_from_json_reads_employee_and_roles() {
        let session = SessionContext::from_json(SESSION_JSON).unwrap();
        assert_eq!(session.employee_id.as_deref(), Some("emp-17"));
        assert_eq!(session.display_name(), "Dispatch Lead");
        assert_eq!(session.roles.len(), 4);
        assert_eq!(session.modules().count(), 6);
    }

    #[test]
    fn test_bare_array_is_role_list() {
        let session =
            SessionContext::from_json(r#"[{"parentMenu":"--","childMenus":[]}]"#).unwrap();
        assert_eq!(session.roles.len(), 1);
        assert_eq!(session.employee_id, None);
    }

    #[test]
    fn test_unexpected_shapes_give_empty_session() {
        for raw in ["null", "42", "\"text\"", "{}", r#"{"employeeRole": {"a": 1}}"#] {
            let session = SessionContext::from_json(raw).unwrap();
            assert!(!session.has_roles(), "{raw}");
        }
    }

    #[test]
    fn test_identified_employee_without_roles_is_signed_in() {
        for roles in ["null", "{}", "[]", "\"view\""] {
            let raw =
                format!(r#"{{"employeeId":"emp-1","employeeName":"Ops","employeeRole":{roles}}}"#);
            let session = SessionContext::from_json(&raw).unwrap();
            assert!(!session.has_roles(), "{raw}");
            assert!(session.is_signed_in(), "{raw}");
        }
        let session = SessionContext::from_json(r#"{"email":"ops@example.com"}"#).unwrap();
        assert!(session.is_signed_in());
    }

    #[test]
    fn test_nothing_cached_is_signed_out() {
        assert!(!SessionContext::empty().is_signed_in());
        for raw in ["null", "{}", "[]", r#"{"employeeId":"  ","employeeRole":[]}"#] {
            let session = SessionContext::from_json(raw).unwrap();
            assert!(!session.is_signed_in(), "{raw}");
        }
        let roles_only =
            SessionContext::from_json(r#"[{"parentMenu":"--","childMenus":[]}]"#).unwrap();
        assert!(roles_only.is_signed_in());
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(SessionContext::from_json("{ not json").is_err());
    }

    #[test]
    fn test_permissions_are_merged_across_roles() {
        let session = SessionContext::from_json(
            r#"[
                {"parentMenu":"A","childMenus":[{"childMenu":"--","modules":[{"moduleUrl":"rider","permission":"view"}]}]},
                {"parentMenu":"B","childMenus":[{"childMenu":"--","modules":[{"moduleUrl":"Rider","permission":"delete"}]}]}
            ]"#,
        )
        .unwrap();

        assert_eq!(session.permissions_for("RIDER").to_string(), "view,delete");
        assert!(session.can("rider", "delete"));
        assert!(!session.can("rider", "edit"));
        assert!(!session.can("trip", "view"));
    }

    #[test]
    fn test_domain_token_gating() {
        let session = SessionContext::from_json(SESSION_JSON).unwrap();
        assert!(session.can("trip", "rideHistory"));
        assert!(!session.can("driver", "rideHistory"));
    }

    #[test]
    fn test_display_name_falls_back() {
        let session = SessionContext::from_json(r#"{"email":"ops@example.com"}"#).unwrap();
        assert_eq!(session.display_name(), "ops@example.com");
        assert_eq!(SessionContext::empty().display_name(), "Employee");
    }
}
