mod resolve;

pub use resolve::{config_dir, config_file};
