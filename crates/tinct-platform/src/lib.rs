pub mod appearance;
pub mod paths;

#[cfg(any(target_os = "ios", target_os = "tvos"))]
pub use appearance::install_appearance_source;
pub use appearance::{effective_dark_mode, is_dark_mode, AppearanceSource, APPEARANCE_SUPPORTED};
pub use paths::{config_dir, config_file};
