use crate::conf::{ConfigError, StatsConfig};
use std::fs;
use std::path::Path;

/// Config file picked up from the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "mcstats.toml";

pub fn load_config(path: &Path) -> Result<StatsConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
    let mut config: StatsConfig =
        toml::from_str(&contents).map_err(|e| ConfigError::parse(path, e))?;

    if config.log_dir.is_relative() {
        if let Some(parent) = path.parent() {
            config.log_dir = parent.join(&config.log_dir);
        }
    }

    Ok(config)
}

/// Loads `path` when given; otherwise `mcstats.toml` if it exists, falling
/// back to defaults.
pub fn load_config_or_default(path: Option<&Path>) -> Result<StatsConfig, ConfigError> {
    if let Some(path) = path {
        return load_config(path);
    }

    let default = Path::new(DEFAULT_CONFIG_FILE);
    if default.is_file() {
        tracing::debug!(path = DEFAULT_CONFIG_FILE, "using config file from working directory");
        return load_config(default);
    }

    Ok(StatsConfig::default())
}
