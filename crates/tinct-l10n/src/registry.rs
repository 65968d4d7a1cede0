//! The process-wide catalog used by the scope-less helpers.
//!
//! Nothing is installed by default, in which case every lookup echoes its key.

use std::sync::{Arc, PoisonError, RwLock};

use tracing::debug;

use crate::catalog::{BundleScope, EmptyCatalog, MessageCatalog};
use crate::resolve::resolve;

static PROCESS_CATALOG: RwLock<Option<Arc<dyn MessageCatalog>>> = RwLock::new(None);

/// Make `catalog` the process-wide catalog, returning the one it replaces.
pub fn install_catalog(catalog: Arc<dyn MessageCatalog>) -> Option<Arc<dyn MessageCatalog>> {
    debug!("installing process message catalog");
    PROCESS_CATALOG
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .replace(catalog)
}

/// Remove the process-wide catalog, returning it if one was installed.
pub fn clear_catalog() -> Option<Arc<dyn MessageCatalog>> {
    PROCESS_CATALOG
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .take()
}

pub fn process_catalog() -> Option<Arc<dyn MessageCatalog>> {
    PROCESS_CATALOG
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// [`resolve`] against whatever catalog is currently installed.
pub(crate) fn resolve_installed(key: &str, scope: &BundleScope, comment: Option<&str>) -> String {
    match process_catalog() {
        Some(catalog) => resolve(catalog.as_ref(), key, scope, comment),
        None => resolve(&EmptyCatalog, key, scope, comment),
    }
}

/// Serializes tests that touch the process-wide catalog.
#[cfg(test)]
pub(crate) static TEST_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
