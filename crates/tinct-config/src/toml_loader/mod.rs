//! TOML config file loading and creation.

mod loader;
mod template;


pub use loader::{load_default, load_from_path};
pub use template::create_default_config;
