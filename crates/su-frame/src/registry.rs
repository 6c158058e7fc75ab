//! Process-wide registry of extension dtypes.
//!
//! Types register once; the host resolves dtype names (e.g. in
//! [`Series::astype`](crate::Series::astype)) through [`lookup`].

use std::sync::{OnceLock, RwLock};

use tracing::debug;

use crate::extension::ExtensionDtype;

fn registry() -> &'static RwLock<Vec<&'static dyn ExtensionDtype>> {
    static REGISTRY: OnceLock<RwLock<Vec<&'static dyn ExtensionDtype>>> = OnceLock::new();
    REGISTRY.get_or_init(|| RwLock::new(Vec::new()))
}

/// Register a dtype. Registering the same name again is a no-op.
pub fn register(dtype: &'static dyn ExtensionDtype) {
    let mut entries = registry().write().unwrap_or_else(|e| e.into_inner());
    if entries.iter().any(|d| d.is_same(dtype)) {
        return;
    }
    debug!(dtype = dtype.name(), "registered extension dtype");
    entries.push(dtype);
}

/// Find a registered dtype by name.
pub fn lookup(name: &str) -> Option<&'static dyn ExtensionDtype> {
    let entries = registry().read().unwrap_or_else(|e| e.into_inner());
    entries.iter().copied().find(|d| d.name() == name)
}

/// Names of every registered dtype, in registration order.
pub fn registered_names() -> Vec<&'static str> {
    let entries = registry().read().unwrap_or_else(|e| e.into_inner());
    entries.iter().map(|d| d.name()).collect()
}
