//! Localized text on top of an external message catalog.
//!
//! The catalog itself belongs to the host: this crate only asks it for a
//! translation through [`MessageCatalog`], falls back to the key when none
//! exists, and turns literal `\n` escapes into real line breaks.
//!
//! ```
//! use tinct_l10n::{StaticCatalog, StrExt};
//!
//! let catalog = StaticCatalog::new().with_entry("greeting", r"Hello\nWorld");
//! assert_eq!("greeting".localized_ns_in(&catalog, None), "Hello\nWorld");
//! assert_eq!("missing".localized_ns_in(&catalog, None), "missing");
//! ```

pub mod catalog;
pub mod ext;
pub mod key;
pub mod registry;
pub mod resolve;

pub use catalog::{BundleScope, EmptyCatalog, MessageCatalog, StaticCatalog};
pub use ext::StrExt;
pub use key::LocalizedKey;
pub use registry::{clear_catalog, install_catalog, process_catalog};
pub use resolve::{resolve, unescape_newlines};
