//! plugkit Types - shared types for the example plugin
//!
//! Everything that crosses the plugin/host boundary lives here: parsed
//! command records, the entries injected into the host's `command` map,
//! the host configuration object itself, and tool definitions.

pub mod command;
pub mod host;

pub use command::{Command, CommandEntry, CommandFrontmatter};
pub use host::HostConfig;

use serde::{Deserialize, Serialize};

// ============================================================================
// Tool Definition Types (OpenAI-compatible)
// ============================================================================

/// A tool definition following OpenAI's function calling schema
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Tool {
    #[serde(rename = "type")]
    pub tool_type: String,
    pub function: FunctionDef,
}

impl Tool {
    pub fn function(name: &str, description: &str, parameters: serde_json::Value) -> Self {
        Self {
            tool_type: "function".to_string(),
            function: FunctionDef {
                name: name.to_string(),
                description: description.to_string(),
                parameters,
                strict: Some(true),
            },
        }
    }

    /// Name the host registers the tool under
    pub fn name(&self) -> &str {
        &self.function.name
    }
}

/// Function definition within a tool
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FunctionDef {
    pub name: String,
    pub description: String,
    pub parameters: serde_json::Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strict: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_function_serializes_type_tag() {
        let tool = Tool::function("example_tool", "Echo", serde_json::json!({"type": "object"}));
        let value = serde_json::to_value(&tool).unwrap();

        assert_eq!(value["type"], "function");
        assert_eq!(value["function"]["name"], "example_tool");
        assert_eq!(value["function"]["strict"], true);
        assert_eq!(tool.name(), "example_tool");
    }
}
