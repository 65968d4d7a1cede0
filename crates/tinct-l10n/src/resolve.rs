use std::borrow::Cow;

use tracing::debug;

use crate::catalog::{BundleScope, MessageCatalog};

/// The two-character sequence backslash + `n` as it appears in catalog text.
const ESCAPED_NEWLINE: &str = "\\n";

/// Replace every literal `\n` escape with a line break.
pub fn unescape_newlines(s: &str) -> Cow<'_, str> {
    if s.contains(ESCAPED_NEWLINE) {
        Cow::Owned(s.replace(ESCAPED_NEWLINE, "\n"))
    } else {
        Cow::Borrowed(s)
    }
}

/// Look `key` up in `catalog`, echoing the key when there is no translation.
///
/// The result, translated or not, has its `\n` escapes unescaped.
pub fn resolve<C>(catalog: &C, key: &str, scope: &BundleScope, comment: Option<&str>) -> String
where
    C: MessageCatalog + ?Sized,
{
    let text = catalog.lookup(key, scope, comment).unwrap_or_else(|| {
        debug!(key, %scope, "no translation found, using key");
        key.to_owned()
    });

    let unescaped = match unescape_newlines(&text) {
        Cow::Owned(s) => Some(s),
        Cow::Borrowed(_) => None,
    };
    unescaped.unwrap_or(text)
}
