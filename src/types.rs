//! Shared types: the assistant definition sent upstream and the record returned.

use crate::error::ValidationError;
use crate::tools::ToolDefinition;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

// ---------------------------------------------------------------------------
// Tool declarations
// ---------------------------------------------------------------------------

/// One entry of an assistant's tool list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ToolDeclaration {
    /// Built-in sandboxed code execution.
    CodeInterpreter,
    /// User-defined function described by a JSON Schema.
    Function { function: ToolDefinition },
}

impl ToolDeclaration {
    pub fn function(definition: ToolDefinition) -> Self {
        Self::Function {
            function: definition,
        }
    }

    /// Declared function name, `None` for built-in capabilities.
    pub fn function_name(&self) -> Option<&str> {
        match self {
            Self::CodeInterpreter => None,
            Self::Function { function } => Some(&function.name),
        }
    }
}

// ---------------------------------------------------------------------------
// Assistant definition
// ---------------------------------------------------------------------------

/// Everything needed to create one assistant upstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssistantSpec {
    pub name: String,
    pub instructions: String,
    pub model: String,
    pub tools: Vec<ToolDeclaration>,
}

impl AssistantSpec {
    /// Check the invariants the remote service relies on before any request
    /// is sent.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.instructions.trim().is_empty() {
            return Err(ValidationError::new("instructions", "must not be empty"));
        }
        if self.model.trim().is_empty() {
            return Err(ValidationError::new("model", "must name a remote model"));
        }

        let mut seen = HashSet::new();
        for name in self.tools.iter().filter_map(ToolDeclaration::function_name) {
            if name.is_empty() {
                return Err(ValidationError::new("tools", "function name must not be empty"));
            }
            if !seen.insert(name) {
                return Err(ValidationError::new(
                    "tools",
                    format!("function name {name:?} is declared more than once"),
                ));
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Remote record
// ---------------------------------------------------------------------------

/// The assistant as returned by the remote service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssistantRecord {
    /// Opaque identifier, e.g. `asst_abc123`.
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl AssistantRecord {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            model: None,
            created_at: None,
        }
    }
}
