//! Configuration schema types for Folio.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with the defaults below.

mod assistant;
mod portfolio;
mod system;

pub use assistant::*;
pub use portfolio::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for Folio.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FolioConfig {
    pub assistant: AssistantConfig,
    pub portfolio: PortfolioConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================
