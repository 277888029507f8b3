//! Error taxonomy for schema validation, remote provisioning and the local registry.

use std::path::PathBuf;
use thiserror::Error;

/// A candidate value failed a field's type or enumeration constraint.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid `{field}`: {constraint}")]
pub struct ValidationError {
    /// Name of the offending field.
    pub field: String,
    /// Human-readable constraint that was violated.
    pub constraint: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, constraint: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            constraint: constraint.into(),
        }
    }
}

/// Failures while creating an assistant on the remote service.
#[derive(Debug, Error)]
pub enum ProvisionError {
    /// Missing, empty or rejected credential.
    #[error("credential error: {0}")]
    Credential(String),

    /// The assistant definition failed a local check.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The remote service rejected the request body (e.g. a malformed schema).
    #[error("rejected by remote: {0}")]
    Rejected(String),

    /// Transport failure (connect, TLS, timeout).
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    /// Any other non-success answer from the remote service.
    #[error("remote API error ({status}): {body}")]
    Api { status: u16, body: String },

    /// The remote answered 2xx but the body was not an assistant object.
    #[error("failed to decode assistant response: {0}")]
    Decode(String),
}

/// Failures while loading or saving the label → identifier registry.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("failed to access registry file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file exists but is not a JSON object of string → string.
    #[error("registry file {path} is malformed: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode registry: {0}")]
    Encode(#[from] serde_json::Error),
}
