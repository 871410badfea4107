use thiserror::Error;

/// Mismatch between the cached role tree and the module registry.
///
/// The derivers skip these silently; diagnostics exist so the shell can
/// report them at startup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessDiagnostic {
    #[error("module '{module_url}' has no registered UI entry")]
    MissingRegistryEntry { module_url: String },

    #[error("module '{module_url}' grants unknown permission '{token}'")]
    UnknownPermissionToken { module_url: String, token: String },
}

#[derive(Debug, Error)]
pub enum AccessError {
    #[error("role tree does not match the module registry ({} problems)", .0.len())]
    Invalid(Vec<AccessDiagnostic>),
}
