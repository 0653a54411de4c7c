use std::io::ErrorKind;
use std::path::Path;

use folio_common::ConfigError;
use tracing::info;

use super::paths::{create_default_config, default_config_path};
use crate::schema::FolioConfig;

/// Parse the TOML file at `path`. Missing keys take their defaults;
/// values are not validated here.
pub fn load_from_path(path: &Path) -> Result<FolioConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ConfigError::FileNotFound(path.to_path_buf()),
        _ => ConfigError::ParseError(format!("failed to read {}: {e}", path.display())),
    })?;

    let config = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("{}: {e}", path.display())))?;

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load from [`default_config_path`], writing the starter file and falling
/// back to defaults on first run.
pub fn load_default() -> Result<FolioConfig, ConfigError> {
    let path = default_config_path()?;

    match load_from_path(&path) {
        Err(ConfigError::FileNotFound(_)) => {
            info!("no config at {}, writing the default", path.display());
            create_default_config(&path)?;
            Ok(FolioConfig::default())
        }
        other => other,
    }
}
