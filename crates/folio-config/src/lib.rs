//! Folio configuration system.
//!
//! Provides TOML-based configuration for the chat assistant and the
//! portfolio profile it answers questions about. All config sections use
//! sensible defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use folio_config::{config_to_json, load_config};
//!
//! let config = load_config(None).expect("failed to load config");
//! println!("{}", config_to_json(&config));
//! ```

pub mod prompt;
pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use prompt::{effective_instruction, first_name, system_instruction};
pub use schema::{FolioConfig, CONFIG_SCHEMA_VERSION};

use std::path::Path;

use folio_common::ConfigError;

/// Load and validate config.
///
/// An explicit `path` must exist. Without one, `config.toml` is read from
/// the OS config directory and a documented default is created if missing.
pub fn load_config(path: Option<&Path>) -> Result<FolioConfig, ConfigError> {
    let config = match path {
        Some(path) => toml_loader::load_from_path(path)?,
        None => toml_loader::load_default()?,
    };

    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &FolioConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_to_json_contains_all_sections() {
        let json = config_to_json(&FolioConfig::default());
        assert!(json.contains("\"assistant\""));
        assert!(json.contains("\"portfolio\""));
        assert!(json.contains("\"logging\""));
        assert!(json.contains("\"API_KEY\""));
    }

    #[test]
    fn config_schema_version_is_1() {
        assert_eq!(CONFIG_SCHEMA_VERSION, 1);
    }

    #[test]
    fn load_config_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[assistant]\ntemperature = 3.5\n").unwrap();

        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn load_config_from_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[logging]\nlevel = \"DEBUG\"\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.logging.level, schema::LogLevel::Debug);
    }

    #[test]
    fn load_config_missing_explicit_path_is_not_created() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(_)));
        assert!(!path.exists());
    }

    #[test]
    fn default_config_round_trips_through_json() {
        let json = config_to_json(&FolioConfig::default());
        let parsed: FolioConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.assistant.model, "gemini-3-flash-preview");
        assert_eq!(parsed.portfolio.owner, "Jordan Avery");
    }
}
