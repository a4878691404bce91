//! Configuration schema types for Winter.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod assistant;
mod system;

pub use assistant::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for Winter.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WinterConfig {
    pub assistant: AssistantConfig,
    pub logging: LoggingConfig,
}
