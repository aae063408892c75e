//! Tool (function calling) declarations sent with chat requests.

use serde::{Deserialize, Serialize};

/// Tool definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tool {
    #[serde(rename = "type", default = "default_tool_type")]
    pub tool_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub function: Option<ToolFunction>,
}

fn default_tool_type() -> String {
    "function".to_string()
}

impl Tool {
    /// Declare a callable function. `parameters` is a JSON-Schema-shaped object
    /// that is sent as-is.
    pub fn function(
        name: impl Into<String>,
        description: Option<String>,
        parameters: Option<serde_json::Value>,
    ) -> Self {
        Self {
            tool_type: default_tool_type(),
            function: Some(ToolFunction {
                name: name.into(),
                description,
                parameters,
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolFunction {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<serde_json::Value>, // JSON Schema
}
