//! Where Folio keeps its config file, and writing the starter file there.

use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use folio_common::ConfigError;
use tracing::{debug, info};

use super::template::default_config_toml;

/// Directory under the OS config dir.
pub const CONFIG_DIR_NAME: &str = "folio";
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// `~/.config/folio/config.toml` on Linux,
/// `~/Library/Application Support/folio/config.toml` on macOS.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
        .ok_or_else(|| ConfigError::ParseError("could not determine config directory".into()))
}

/// Write the commented starter config to `path`.
///
/// An existing file is left untouched.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    let write_failed = |e: std::io::Error| {
        ConfigError::ParseError(format!("failed to write default config to {}: {e}", path.display()))
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(write_failed)?;
    }

    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            debug!("config already present at {}", path.display());
            return Ok(());
        }
        Err(e) => return Err(write_failed(e)),
    };
    file.write_all(default_config_toml().as_bytes())
        .map_err(write_failed)?;

    info!("created default config at {}", path.display());
    Ok(())
}
