//! System appearance (light / dark).
//!
//! Only iOS and tvOS report an appearance. On those targets the host
//! installs an [`AppearanceSource`] backed by its current trait collection.
//! On every other target [`is_dark_mode`] is a `const fn` that returns
//! `false`, and there is nothing to install.

use tinct_common::AppearanceMode;

/// The host's view of the current system appearance.
pub trait AppearanceSource: Send + Sync {
    fn is_dark(&self) -> bool;
}

/// Whether this build target can report a system appearance at all.
pub const APPEARANCE_SUPPORTED: bool = cfg!(any(target_os = "ios", target_os = "tvos"));

#[cfg(any(target_os = "ios", target_os = "tvos"))]
mod source {
    use std::sync::OnceLock;

    use tinct_common::PlatformError;
    use tracing::info;

    use super::AppearanceSource;

    static SOURCE: OnceLock<Box<dyn AppearanceSource>> = OnceLock::new();

    /// Register the host's appearance source. Only the first call succeeds.
    pub fn install_appearance_source(
        source: Box<dyn AppearanceSource>,
    ) -> Result<(), PlatformError> {
        SOURCE
            .set(source)
            .map_err(|_| PlatformError::AlreadyInstalled("appearance source".into()))?;
        info!("appearance source installed");
        Ok(())
    }

    /// `true` when the installed source reports a dark appearance.
    ///
    /// Returns `false` until a source is installed.
    pub fn is_dark_mode() -> bool {
        SOURCE.get().is_some_and(|source| source.is_dark())
    }
}

#[cfg(any(target_os = "ios", target_os = "tvos"))]
pub use source::{install_appearance_source, is_dark_mode};

/// Always `false`: this target has no system appearance to query.
#[cfg(not(any(target_os = "ios", target_os = "tvos")))]
pub const fn is_dark_mode() -> bool {
    false
}

/// Dark-mode flag after applying a configured override.
pub fn effective_dark_mode(mode: AppearanceMode) -> bool {
    match mode {
        AppearanceMode::System => is_dark_mode(),
        AppearanceMode::Light => false,
        AppearanceMode::Dark => true,
    }
}
