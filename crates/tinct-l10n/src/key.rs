use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::{BundleScope, MessageCatalog};
use crate::registry::resolve_installed;
use crate::resolve::resolve;

/// A localization key kept as plain data alongside its lookup context.
///
/// The key string is always available through [`LocalizedKey::key`]; resolving
/// it is a separate step against a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LocalizedKey {
    key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    comment: Option<String>,
    #[serde(default)]
    scope: BundleScope,
}

impl LocalizedKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            comment: None,
            scope: BundleScope::Process,
        }
    }

    /// Attach a note for translators.
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn in_scope(mut self, scope: BundleScope) -> Self {
        self.scope = scope;
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    pub fn scope(&self) -> &BundleScope {
        &self.scope
    }

    /// Resolve against the process-wide catalog.
    pub fn to_localized_string(&self) -> String {
        resolve_installed(&self.key, &self.scope, self.comment())
    }

    /// Resolve against an explicit catalog.
    pub fn localize_in<C: MessageCatalog + ?Sized>(&self, catalog: &C) -> String {
        resolve(catalog, &self.key, &self.scope, self.comment())
    }
}

impl From<&str> for LocalizedKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for LocalizedKey {
    fn from(key: String) -> Self {
        Self::new(key)
    }
}

impl AsRef<str> for LocalizedKey {
    fn as_ref(&self) -> &str {
        &self.key
    }
}

impl fmt::Display for LocalizedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::StaticCatalog;
    use crate::registry::{clear_catalog, install_catalog, TEST_LOCK};
    use std::sync::{Arc, PoisonError};

    #[test]
    fn key_is_a_plain_field() {
        let key = LocalizedKey::new("welcome_message");
        assert_eq!(key.key(), "welcome_message");
        assert_eq!(key.to_string(), "welcome_message");
        assert_eq!(key.comment(), None);
        assert_eq!(key.scope(), &BundleScope::Process);
    }

    #[test]
    fn builder_sets_comment_and_scope() {
        let key = LocalizedKey::from("title")
            .with_comment("Shown on the welcome screen")
            .in_scope(BundleScope::named("onboarding"));
        assert_eq!(key.comment(), Some("Shown on the welcome screen"));
        assert_eq!(key.scope(), &BundleScope::named("onboarding"));
        assert_eq!(key.key(), "title");
    }

    #[test]
    fn localize_in_explicit_catalog() {
        let catalog = StaticCatalog::new()
            .with_entry("multiline_text", r"First line\nSecond line")
            .with_bundle_entry("onboarding", "title", "Hi");

        assert_eq!(
            LocalizedKey::new("multiline_text").localize_in(&catalog),
            "First line\nSecond line"
        );
        assert_eq!(
            LocalizedKey::new("title")
                .in_scope(BundleScope::named("onboarding"))
                .localize_in(&catalog),
            "Hi"
        );
        assert_eq!(LocalizedKey::new("title").localize_in(&catalog), "title");
    }

    #[test]
    fn to_localized_string_uses_process_catalog() {
        let _guard = TEST_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
        install_catalog(Arc::new(
            StaticCatalog::new().with_entry("greeting", r"Hello\nthere"),
        ));
        assert_eq!(
            LocalizedKey::new("greeting").to_localized_string(),
            "Hello\nthere"
        );
        clear_catalog();
        assert_eq!(LocalizedKey::new("greeting").to_localized_string(), "greeting");
    }

    #[test]
    fn serializes_without_empty_comment() {
        let json = serde_json::to_string(&LocalizedKey::new("k")).unwrap();
        assert!(!json.contains("comment"));
        let back: LocalizedKey = serde_json::from_str(r#"{"key":"k"}"#).unwrap();
        assert_eq!(back, LocalizedKey::new("k"));
    }
}
