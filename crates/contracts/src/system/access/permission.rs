use serde::{Serialize, Serializer};
use serde_json::Value;
use std::fmt;

/// A single capability word granted to a module.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Capability {
    View,
    Add,
    Edit,
    Delete,
    /// Domain-specific token such as `ridehistory`.
    Other(String),
}

impl Capability {
    /// Capabilities that produce routes, in the order routes are emitted.
    pub const ROUTED: [Capability; 3] = [Capability::View, Capability::Add, Capability::Edit];

    pub fn parse(token: &str) -> Self {
        let token = token.trim().to_lowercase();
        match token.as_str() {
            "view" => Capability::View,
            "add" => Capability::Add,
            "edit" => Capability::Edit,
            "delete" => Capability::Delete,
            _ => Capability::Other(token),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Capability::View => "view",
            Capability::Add => "add",
            Capability::Edit => "edit",
            Capability::Delete => "delete",
            Capability::Other(token) => token,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Capability::Other(_))
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered set of lower-cased permission tokens, parsed from `"view,add,edit"`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PermissionSet {
    tokens: Vec<String>,
}

impl PermissionSet {
    pub fn parse(raw: &str) -> Self {
        let mut set = Self::default();
        for piece in raw.split(',') {
            set.insert(piece);
        }
        set
    }

    /// Reads a permission value from cached JSON.
    ///
    /// Accepts the canonical comma-separated string and an array of such
    /// strings; every other JSON type yields an empty set.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::String(raw) => Self::parse(raw),
            Value::Array(items) => {
                let mut set = Self::default();
                for raw in items.iter().filter_map(Value::as_str) {
                    set.extend(&Self::parse(raw));
                }
                set
            }
            _ => Self::default(),
        }
    }

    pub fn insert(&mut self, token: &str) {
        let token = token.trim().to_lowercase();
        if !token.is_empty() && !self.tokens.contains(&token) {
            self.tokens.push(token);
        }
    }

    pub fn extend(&mut self, other: &PermissionSet) {
        for token in &other.tokens {
            self.insert(token);
        }
    }

    pub fn contains(&self, token: &str) -> bool {
        let token = token.trim().to_lowercase();
        self.tokens.iter().any(|t| *t == token)
    }

    pub fn has(&self, capability: &Capability) -> bool {
        self.contains(capability.as_str())
    }

    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    pub fn capabilities(&self) -> impl Iterator<Item = Capability> + '_ {
        self.tokens.iter().map(|t| Capability::parse(t))
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl fmt::Display for PermissionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tokens.join(","))
    }
}

impl Serialize for PermissionSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}
