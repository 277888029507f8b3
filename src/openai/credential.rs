//! The single static API credential.

use crate::error::ProvisionError;
use std::env::VarError;
use std::fmt;

/// Bearer secret for the assistants API.
///
/// Passed explicitly into [`super::AssistantsClient::new`]; nothing reads the
/// environment after startup.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(secret: impl Into<String>) -> Result<Self, ProvisionError> {
        let secret = secret.into();
        if secret.trim().is_empty() {
            return Err(ProvisionError::Credential("API key is empty".into()));
        }
        Ok(Self(secret))
    }

    /// Read the secret from the named environment variable.
    pub fn from_env(var: &str) -> Result<Self, ProvisionError> {
        match std::env::var(var) {
            Ok(value) => Self::new(value)
                .map_err(|_| ProvisionError::Credential(format!("{var} is set but empty"))),
            Err(VarError::NotPresent) => {
                Err(ProvisionError::Credential(format!("{var} is not set")))
            }
            Err(VarError::NotUnicode(_)) => Err(ProvisionError::Credential(format!(
                "{var} is set but is not valid unicode"
            ))),
        }
    }

    pub(crate) fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}
