pub mod schema;

pub use schema::ProvisionerConfig;

use anyhow::{Context, Result};
use std::path::Path;

/// Default config file name, looked up in the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "assistant.toml";

/// Load config from the given path, or return defaults.
pub fn load_config(path: &Path) -> Result<ProvisionerConfig> {
    if path.exists() {
        let contents =
            std::fs::read_to_string(path).context("Failed to read provisioner config file")?;
        let config: ProvisionerConfig =
            toml::from_str(&contents).context("Failed to parse provisioner config (TOML)")?;
        Ok(config)
    } else {
        Ok(ProvisionerConfig::default())
    }
}

/// Load `.env` from the working directory (or a parent) if one exists.
///
/// Returns whether a file was loaded. Variables already set in the process
/// environment win.
pub fn load_dotenv() -> bool {
    dotenvy::dotenv().is_ok()
}
