use std::path::Path;

use anyhow::{Context, Result};

use super::Config;

/// Name of the per-project config file.
pub const CONFIG_FILE: &str = ".lintsweep.yaml";

/// Load config from `.lintsweep.yaml` in the given directory.
///
/// A missing file is not an error and yields the defaults.
pub fn load(dir: &Path) -> Result<Config> {
    let path = dir.join(CONFIG_FILE);
    if !path.is_file() {
        return Ok(Config::default());
    }
    load_file(&path)
}

/// Load config from an explicit path.
pub fn load_file(path: &Path) -> Result<Config> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    // An empty file deserializes to `null`, which is not a mapping.
    if contents.trim().is_empty() {
        return Ok(Config::default());
    }
    let config: Config = serde_yaml::from_str(&contents)
        .with_context(|| format!("invalid config {}", path.display()))?;
    Ok(config)
}
