//! The message catalog capability and an in-memory implementation.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Which table a key is looked up in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BundleScope {
    /// The catalog of the running process.
    #[default]
    Process,
    /// A specific named resource bundle.
    Named(String),
}

impl BundleScope {
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// An empty bundle name means the process scope.
    pub fn from_bundle_name(name: &str) -> Self {
        if name.is_empty() {
            Self::Process
        } else {
            Self::named(name)
        }
    }
}

impl fmt::Display for BundleScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Process => f.write_str("process"),
            Self::Named(name) => write!(f, "bundle:{name}"),
        }
    }
}

/// A host-owned key-to-translation table.
///
/// Implementations return `None` when no translation exists; callers take
/// care of echoing the key. `comment` is the translator note attached at the
/// call site and is informational only.
pub trait MessageCatalog: Send + Sync {
    fn lookup(&self, key: &str, scope: &BundleScope, comment: Option<&str>) -> Option<String>;
}

impl<T: MessageCatalog + ?Sized> MessageCatalog for Arc<T> {
    fn lookup(&self, key: &str, scope: &BundleScope, comment: Option<&str>) -> Option<String> {
        (**self).lookup(key, scope, comment)
    }
}

impl<T: MessageCatalog + ?Sized> MessageCatalog for &T {
    fn lookup(&self, key: &str, scope: &BundleScope, comment: Option<&str>) -> Option<String> {
        (**self).lookup(key, scope, comment)
    }
}

/// A catalog with no entries. Every lookup misses.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyCatalog;

impl MessageCatalog for EmptyCatalog {
    fn lookup(&self, _key: &str, _scope: &BundleScope, _comment: Option<&str>) -> Option<String> {
        None
    }
}

/// In-memory catalog with one table for the process and one per named bundle.
///
/// Named bundles do not fall back to the process table, mirroring how a
/// bundle-scoped lookup only consults that bundle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StaticCatalog {
    process: HashMap<String, String>,
    bundles: HashMap<String, HashMap<String, String>>,
}

impl StaticCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn with_bundle_entry(
        mut self,
        bundle: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.insert_in_bundle(bundle, key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.process.insert(key.into(), value.into());
    }

    pub fn insert_in_bundle(
        &mut self,
        bundle: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) {
        self.bundles
            .entry(bundle.into())
            .or_default()
            .insert(key.into(), value.into());
    }

    /// Total number of entries across all scopes.
    pub fn len(&self) -> usize {
        self.process.len() + self.bundles.values().map(HashMap::len).sum::<usize>()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn table(&self, scope: &BundleScope) -> Option<&HashMap<String, String>> {
        match scope {
            BundleScope::Process => Some(&self.process),
            BundleScope::Named(name) => self.bundles.get(name),
        }
    }
}

impl MessageCatalog for StaticCatalog {
    fn lookup(&self, key: &str, scope: &BundleScope, _comment: Option<&str>) -> Option<String> {
        self.table(scope)?.get(key).cloned()
    }
}
