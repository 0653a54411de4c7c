//! Reading `config.toml` and writing the documented default.

mod loader;
mod paths;
mod template;


pub use loader::{load_default, load_from_path};
pub use paths::{create_default_config, default_config_path, CONFIG_DIR_NAME, CONFIG_FILE_NAME};
