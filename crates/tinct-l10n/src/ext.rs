//! Localization helpers callable directly on string slices.

use crate::catalog::{BundleScope, MessageCatalog};
use crate::key::LocalizedKey;
use crate::registry::resolve_installed;
use crate::resolve::resolve;

/// Extension methods turning a key string into localized text.
///
/// Methods without an `_in` suffix resolve against the process-wide catalog
/// (see [`install_catalog`](crate::install_catalog)).
pub trait StrExt {
    /// Wrap the string as a [`LocalizedKey`] for deferred resolution.
    fn localized(&self) -> LocalizedKey;

    /// Resolve in the process scope with an optional translator comment.
    fn localized_ns(&self, comment: Option<&str>) -> String;

    /// Resolve in the named resource bundle `bundle`.
    fn localized_for_bundle(&self, bundle: &str) -> String;

    fn localized_ns_in<C: MessageCatalog + ?Sized>(&self, catalog: &C, comment: Option<&str>)
        -> String;

    fn localized_for_bundle_in<C: MessageCatalog + ?Sized>(&self, catalog: &C, bundle: &str)
        -> String;
}

impl StrExt for str {
    fn localized(&self) -> LocalizedKey {
        LocalizedKey::new(self)
    }

    fn localized_ns(&self, comment: Option<&str>) -> String {
        resolve_installed(self, &BundleScope::Process, comment)
    }

    fn localized_for_bundle(&self, bundle: &str) -> String {
        resolve_installed(self, &BundleScope::from_bundle_name(bundle), None)
    }

    fn localized_ns_in<C: MessageCatalog + ?Sized>(
        &self,
        catalog: &C,
        comment: Option<&str>,
    ) -> String {
        resolve(catalog, self, &BundleScope::Process, comment)
    }

    fn localized_for_bundle_in<C: MessageCatalog + ?Sized>(
        &self,
        catalog: &C,
        bundle: &str,
    ) -> String {
        resolve(catalog, self, &BundleScope::from_bundle_name(bundle), None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::StaticCatalog;
    use crate::registry::{clear_catalog, install_catalog, TEST_LOCK};
    use std::sync::{Arc, PoisonError};

    fn catalog() -> StaticCatalog {
        StaticCatalog::new()
            .with_entry("hello_world", "Hello, world")
            .with_entry("multiline_text", r"First line\nSecond line")
            .with_bundle_entry("widgets", "error_message", r"Something\nbroke")
    }

    #[test]
    fn localized_wraps_key() {
        let key = "hello_world".localized();
        assert_eq!(key.key(), "hello_world");
        assert_eq!(key.scope(), &BundleScope::Process);
    }

    #[test]
    fn localized_ns_in_resolves_and_unescapes() {
        let catalog = catalog();
        assert_eq!("hello_world".localized_ns_in(&catalog, None), "Hello, world");
        assert_eq!(
            "multiline_text".localized_ns_in(&catalog, Some("Shown on the welcome screen")),
            "First line\nSecond line"
        );
    }

    #[test]
    fn localized_ns_in_missing_key_falls_back() {
        assert_eq!(
            "nonexistent_key".localized_ns_in(&catalog(), None),
            "nonexistent_key"
        );
    }

    #[test]
    fn localized_for_bundle_in_uses_bundle() {
        let catalog = catalog();
        assert_eq!(
            "error_message".localized_for_bundle_in(&catalog, "widgets"),
            "Something\nbroke"
        );
        assert_eq!(
            "hello_world".localized_for_bundle_in(&catalog, "widgets"),
            "hello_world"
        );
    }

    #[test]
    fn empty_bundle_name_means_process_scope() {
        assert_eq!(
            "hello_world".localized_for_bundle_in(&catalog(), ""),
            "Hello, world"
        );
    }

    #[test]
    fn process_helpers_use_installed_catalog() {
        let _guard = TEST_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
        install_catalog(Arc::new(catalog()));
        assert_eq!("hello_world".localized_ns(None), "Hello, world");
        assert_eq!(
            "error_message".localized_for_bundle("widgets"),
            "Something\nbroke"
        );
        clear_catalog();
        assert_eq!("hello_world".localized_ns(None), "hello_world");
    }
}
