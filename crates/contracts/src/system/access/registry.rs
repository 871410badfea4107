//! Static registry of module UIs.
//!
//! The registry is the join key between permission data and what the shell
//! can actually render. It is generic over the component reference `C` so
//! the derivation stays independent of the UI framework.

use std::collections::{HashMap, HashSet};

use super::error::{AccessDiagnostic, AccessError};
use super::model::ModuleKey;
use super::permission::Capability;
use crate::system::session::SessionContext;

/// UI entry points registered for one module.
#[derive(Debug, Clone, PartialEq)]
pub struct ModuleEntry<C> {
    pub view: Option<C>,
    pub add: Option<C>,
    pub edit: Option<C>,
    pub view_details: Option<C>,
    pub icon: Option<String>,
    /// Hidden modules get neither routes nor navigation entries.
    pub hidden: bool,
    /// Lower-cased tokens recognised for this module that gate UI actions
    /// but produce no routes (e.g. `ridehistory`).
    pub extra_capabilities: Vec<String>,
}

impl<C> Default for ModuleEntry<C> {
    fn default() -> Self {
        Self {
            view: None,
            add: None,
            edit: None,
            view_details: None,
            icon: None,
            hidden: false,
            extra_capabilities: Vec::new(),
        }
    }
}

impl<C> ModuleEntry<C> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(mut self, component: C) -> Self {
        self.view = Some(component);
        self
    }

    pub fn add(mut self, component: C) -> Self {
        self.add = Some(component);
        self
    }

    pub fn edit(mut self, component: C) -> Self {
        self.edit = Some(component);
        self
    }

    pub fn view_details(mut self, component: C) -> Self {
        self.view_details = Some(component);
        self
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn hide(mut self) -> Self {
        self.hidden = true;
        self
    }

    pub fn extra_capability(mut self, token: &str) -> Self {
        let token = token.trim().to_lowercase();
        if !token.is_empty() && !self.extra_capabilities.contains(&token) {
            self.extra_capabilities.push(token);
        }
        self
    }

    /// Component registered for a routed capability.
    pub fn component(&self, capability: &Capability) -> Option<&C> {
        match capability {
            Capability::View => self.view.as_ref(),
            Capability::Add => self.add.as_ref(),
            Capability::Edit => self.edit.as_ref(),
            Capability::Delete | Capability::Other(_) => None,
        }
    }

    /// Whether `token` means anything for this module.
    pub fn recognises(&self, token: &str) -> bool {
        match Capability::parse(token) {
            Capability::Other(token) => self.extra_capabilities.contains(&token),
            _ => true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ModuleRegistry<C> {
    entries: HashMap<ModuleKey, ModuleEntry<C>>,
}

impl<C> Default for ModuleRegistry<C> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<C> ModuleRegistry<C> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `entry` under the lower-cased `module_url`, replacing any
    /// previous registration.
    pub fn register(&mut self, module_url: &str, entry: ModuleEntry<C>) -> &mut Self {
        self.entries.insert(ModuleKey::new(module_url), entry);
        self
    }

    pub fn with(mut self, module_url: &str, entry: ModuleEntry<C>) -> Self {
        self.register(module_url, entry);
        self
    }

    pub fn get(&self, module_url: &str) -> Option<&ModuleEntry<C>> {
        self.entries.get(&ModuleKey::new(module_url))
    }

    pub fn get_by_key(&self, key: &ModuleKey) -> Option<&ModuleEntry<C>> {
        self.entries.get(key)
    }

    /// Entry for `key` if it is registered and not hidden.
    pub fn routable(&self, key: &ModuleKey) -> Option<&ModuleEntry<C>> {
        self.entries.get(key).filter(|entry| !entry.hidden)
    }

    pub fn is_routable(&self, module_url: &str) -> bool {
        self.routable(&ModuleKey::new(module_url)).is_some()
    }

    /// Registered keys in sorted order.
    pub fn keys(&self) -> Vec<&ModuleKey> {
        let mut keys: Vec<&ModuleKey> = self.entries.keys().collect();
        keys.sort();
        keys
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Lists role-tree entries the registry cannot serve, in traversal order
    /// and without repeats. Modules with a blank url are ignored.
    pub fn diagnose(&self, session: &SessionContext) -> Vec<AccessDiagnostic> {
        let mut diagnostics = Vec::new();
        let mut seen: HashSet<(ModuleKey, Option<String>)> = HashSet::new();
        for module in session.modules() {
            let key = module.key();
            if key.is_empty() {
                continue;
            }
            let Some(entry) = self.get_by_key(&key) else {
                if seen.insert((key, None)) {
                    diagnostics.push(AccessDiagnostic::MissingRegistryEntry {
                        module_url: module.module_url.clone(),
                    });
                }
                continue;
            };
            for token in module.permission.tokens() {
                if entry.recognises(token) || !seen.insert((key.clone(), Some(token.to_string())))
                {
                    continue;
                }
                diagnostics.push(AccessDiagnostic::UnknownPermissionToken {
                    module_url: module.module_url.clone(),
                    token: token.to_string(),
                });
            }
        }
        diagnostics
    }

    pub fn validate(&self, session: &SessionContext) -> Result<(), AccessError> {
        let diagnostics = self.diagnose(session);
        if diagnostics.is_empty() {
            Ok(())
        } else {
            Err(AccessError::Invalid(diagnostics))
        }
    }
}
