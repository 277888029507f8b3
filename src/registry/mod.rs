//! Local label → assistant identifier registry (`assistants.json`).
//!
//! The file is read whole, changed in memory and written back whole. There is
//! no locking and no atomic rename: concurrent runs race and the last writer
//! wins.
//!
//! Labels keep the order they have in the file; new labels are appended and
//! an overwritten label stays where it was.

pub mod format;

use crate::error::RegistryError;
use serde::de::Error as _;
use serde_json::{Map, Value};
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, info};

/// Default registry location, relative to the working directory.
pub const DEFAULT_REGISTRY_PATH: &str = "assistants.json";

/// In-memory copy of the registry file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    entries: Map<String, Value>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the registry at `path`.
    ///
    /// A missing file is an empty registry. A file that exists but does not
    /// hold a JSON object of strings is an error; its entries are never
    /// silently dropped.
    pub fn load(path: &Path) -> Result<Self, RegistryError> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No registry at {:?}, starting empty", path);
                return Ok(Self::new());
            }
            Err(source) => {
                return Err(RegistryError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let malformed = |source| RegistryError::Malformed {
            path: path.to_path_buf(),
            source,
        };
        let entries: Map<String, Value> = serde_json::from_str(&contents).map_err(malformed)?;
        if let Some((label, _)) = entries.iter().find(|(_, id)| !id.is_string()) {
            return Err(malformed(serde_json::Error::custom(format!(
                "value for label {label:?} is not a string"
            ))));
        }

        debug!("Loaded {} registry entries from {:?}", entries.len(), path);
        Ok(Self { entries })
    }

    /// Overwrite the file at `path` with the full registry.
    pub fn save(&self, path: &Path) -> Result<(), RegistryError> {
        let contents = format::to_spaced_string(&self.entries)?;
        std::fs::write(path, contents).map_err(|source| RegistryError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Set `label` to `id`, returning the identifier it replaced.
    pub fn insert(&mut self, label: impl Into<String>, id: impl Into<String>) -> Option<String> {
        match self.entries.insert(label.into(), Value::String(id.into())) {
            Some(Value::String(previous)) => Some(previous),
            _ => None,
        }
    }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.entries.get(label).and_then(Value::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Load `path`, set `label` to `id` and write it back.
    pub fn record(path: &Path, label: &str, id: &str) -> Result<Option<String>, RegistryError> {
        let mut registry = Self::load(path)?;
        let previous = registry.insert(label, id);
        registry.save(path)?;
        info!("Recorded {} -> {} in {:?}", label, id, path);
        Ok(previous)
    }
}
