//! Model listing shapes (`GET models`, `GET models/{id}`).

use super::parameter_count;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelsResponse {
    #[serde(default)]
    pub object: String,
    #[serde(default)]
    pub data: Vec<ModelInfo>,
}

impl ModelsResponse {
    pub fn find(&self, id: &str) -> Option<&ModelInfo> {
        self.data.iter().find(|m| m.id == id)
    }
}

/// A model published by the service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelInfo {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub object: String,
    #[serde(default)]
    pub created: i64,
    #[serde(default)]
    pub owned_by: String,
    /// Parameter count as reported (e.g. `"70B"` or `"8000000000"`).
    #[serde(
        default,
        deserialize_with = "parameter_count::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub parameters_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capabilities: Option<ModelCapabilities>,
}

impl ModelInfo {
    /// Numeric parameter count, resolving magnitude suffixes like `B`.
    pub fn parameter_count(&self) -> Option<u64> {
        self.parameters_number
            .as_deref()
            .and_then(parameter_count::parse_magnitude)
    }

    pub fn supports_chat(&self) -> bool {
        self.capabilities.map(|c| c.chat).unwrap_or(false)
    }

    pub fn supports_completion(&self) -> bool {
        self.capabilities.map(|c| c.completion).unwrap_or(false)
    }

    pub fn supports_transcription(&self) -> bool {
        self.capabilities.map(|c| c.transcription).unwrap_or(false)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelCapabilities {
    #[serde(default)]
    pub chat: bool,
    #[serde(default)]
    pub completion: bool,
    #[serde(default)]
    pub transcription: bool,
}
