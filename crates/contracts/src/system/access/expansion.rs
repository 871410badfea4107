use serde::Serialize;

/// Which sidebar group and sub group are open. At most one of each.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct NavExpansion {
    pub group: Option<String>,
    pub sub_group: Option<String>,
}

impl NavExpansion {
    pub fn collapsed() -> Self {
        Self::default()
    }

    pub fn group(label: &str) -> Self {
        Self {
            group: Some(label.to_string()),
            sub_group: None,
        }
    }

    pub fn sub_group(group: &str, sub_group: &str) -> Self {
        Self {
            group: Some(group.to_string()),
            sub_group: Some(sub_group.to_string()),
        }
    }

    /// Clicking a group opens or closes it and always collapses the open sub group.
    pub fn toggle_group(&self, label: &str) -> Self {
        let group = if self.is_group_open(label) {
            None
        } else {
            Some(label.to_string())
        };
        Self {
            group,
            sub_group: None,
        }
    }

    /// Clicking a sub group opens or closes only that sub group.
    pub fn toggle_sub_group(&self, label: &str) -> Self {
        let sub_group = if self.is_sub_group_open(label) {
            None
        } else {
            Some(label.to_string())
        };
        Self {
            group: self.group.clone(),
            sub_group,
        }
    }

    pub fn is_group_open(&self, label: &str) -> bool {
        self.group.as_deref() == Some(label)
    }

    pub fn is_sub_group_open(&self, label: &str) -> bool {
        self.sub_group.as_deref() == Some(label)
    }

    pub fn is_collapsed(&self) -> bool {
        self.group.is_none() && self.sub_group.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_group_opens_and_closes() {
        let state = NavExpansion::collapsed().toggle_group("Trips");
        assert!(state.is_group_open("Trips"));
        let state = state.toggle_group("Trips");
        assert!(state.is_collapsed());
    }

    #[test]
    fn test_toggle_group_switches_and_clears_sub_group() {
        let state = NavExpansion::sub_group("Driver Management", "Drivers");
        let switched = state.toggle_group("Trip Management");
        assert_eq!(switched, NavExpansion::group("Trip Management"));

        let closed = state.toggle_group("Driver Management");
        assert!(closed.is_collapsed());
    }

    #[test]
    fn test_toggle_sub_group_keeps_group() {
        let state = NavExpansion::group("Driver Management").toggle_sub_group("Drivers");
        assert_eq!(state, NavExpansion::sub_group("Driver Management", "Drivers"));

        let state = state.toggle_sub_group("Vehicles");
        assert!(state.is_sub_group_open("Vehicles"));
        assert!(state.is_group_open("Driver Management"));

        let state = state.toggle_sub_group("Vehicles");
        assert_eq!(state, NavExpansion::group("Driver Management"));
    }
}
