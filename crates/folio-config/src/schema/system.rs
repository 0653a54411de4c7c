//! System configuration types: logging.

use serde::{Deserialize, Serialize};

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warning,
    Error,
}

impl LogLevel {
    /// `tracing` filter directive scoped to the Folio crates.
    pub fn directive(self) -> &'static str {
        match self {
            Self::Trace => "folio=trace",
            Self::Debug => "folio=debug",
            Self::Info => "folio=info",
            Self::Warning => "folio=warn",
            Self::Error => "folio=error",
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}
