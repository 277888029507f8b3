//! Configuration schema for assistant.toml.

use serde::{Deserialize, Serialize};

/// Root configuration structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProvisionerConfig {
    /// Base URL of the OpenAI-compatible API.
    pub api_base_url: String,

    /// Environment variable holding the API key.
    pub api_key_env: String,

    /// Display name of the assistant on the remote service.
    pub assistant_name: String,

    /// Key under which the assistant id is stored in the registry.
    pub registry_label: String,

    /// Remote model identifier.
    pub model: String,

    /// Path to the label → id registry file.
    pub registry_path: String,

    /// Log level (debug, info, warn, error).
    pub log_level: String,
}

impl Default for ProvisionerConfig {
    fn default() -> Self {
        Self {
            api_base_url: "https://api.openai.com".into(),
            api_key_env: "OPENAI_API_KEY".into(),
            assistant_name: "Math Tutor And Weather Bot".into(),
            registry_label: "math_tutor_and_weather_bot".into(),
            model: "gpt-4-1106-preview".into(),
            registry_path: crate::registry::DEFAULT_REGISTRY_PATH.into(),
            log_level: "info".into(),
        }
    }
}

impl ProvisionerConfig {
    /// Resolve a path that may contain `~` to an absolute path.
    pub fn resolve_path(&self, path: &str) -> String {
        shellexpand::tilde(path).into_owned()
    }

    /// Resolved registry path.
    pub fn resolved_registry_path(&self) -> String {
        self.resolve_path(&self.registry_path)
    }
}
