//! Config file resolution, loading, and first-run creation.

use std::path::{Path, PathBuf};

use tracing::{info, warn};
use winter_common::ConfigError;

use super::template::default_config_toml;
use crate::schema::WinterConfig;
use crate::validation;

/// `<config dir>/winter/config.toml`, e.g. `~/.config/winter/config.toml`
/// on Linux or `~/Library/Application Support/winter/config.toml` on macOS.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| dir.join("winter").join("config.toml"))
        .ok_or_else(|| ConfigError::ParseError("could not determine config directory".into()))
}

/// Write the commented template to `path`, creating parent directories.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    let io_err = |what: &str, p: &Path, e: std::io::Error| {
        ConfigError::ParseError(format!("failed to {what} {}: {e}", p.display()))
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| io_err("create config directory", parent, e))?;
    }
    std::fs::write(path, default_config_toml())
        .map_err(|e| io_err("write default config to", path, e))?;

    info!(path = %path.display(), "created default config");
    Ok(())
}

/// Parse a TOML config file, filling missing fields with defaults.
///
/// Validation problems are only logged; callers wanting a hard failure
/// run [`validation::validate`] on the result.
pub fn load_from_path(path: &Path) -> Result<WinterConfig, ConfigError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let config: WinterConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    if let Err(e) = validation::validate(&config) {
        warn!("config validation warning: {e}");
    }

    info!(path = %path.display(), "loaded config");
    Ok(config)
}

/// Load `path`, or write the template there and return defaults when the
/// file is absent.
pub fn load_or_create(path: &Path) -> Result<WinterConfig, ConfigError> {
    if path.exists() {
        return load_from_path(path);
    }
    info!(path = %path.display(), "no config found, creating default");
    create_default_config(path)?;
    Ok(WinterConfig::default())
}

/// [`load_or_create`] at the platform default location.
pub fn load_default() -> Result<WinterConfig, ConfigError> {
    load_or_create(&default_config_path()?)
}
