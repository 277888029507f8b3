//! Tool trait and the definition shape handed to the remote model.

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};

/// Definition of a function tool exposed to the remote model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub parameters: serde_json::Value,
}

/// A locally implemented tool.
///
/// The remote model only ever sees [`Tool::definition`]; `invoke` is the
/// reference behaviour it is expected to approximate when it chooses to call
/// the tool.
pub trait Tool: Send + Sync {
    /// Tool name (used in function calls).
    fn name(&self) -> &str;

    /// Human-readable description.
    fn description(&self) -> &str;

    /// JSON Schema for the tool's parameters.
    fn parameters_schema(&self) -> serde_json::Value;

    /// Validate `args` against the parameter type and run the tool.
    fn invoke(&self, args: &serde_json::Value) -> Result<String, ValidationError>;

    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: self.name().to_string(),
            description: self.description().to_string(),
            parameters: self.parameters_schema(),
        }
    }
}
