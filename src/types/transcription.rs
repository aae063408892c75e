//! Audio transcription shapes (`POST audio/transcriptions`).

use crate::catalog;
use serde::{Deserialize, Serialize};

/// Audio upload for transcription.
///
/// Sent as a multipart form, never as JSON. `file_name` is only used for the
/// part's file name and to pick its content type.
#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptionRequest {
    pub file_content: Vec<u8>,
    pub file_name: String,
    pub model: String,
    pub prompt: Option<String>,
    pub temperature: Option<f64>,
    pub language: Option<String>,
    pub response_format: Option<String>,
}

impl Default for TranscriptionRequest {
    fn default() -> Self {
        Self {
            file_content: Vec::new(),
            file_name: "audio.mp3".to_string(),
            model: catalog::WHISPER_LARGE_V3.to_string(),
            prompt: None,
            temperature: None,
            language: None,
            response_format: None,
        }
    }
}

impl TranscriptionRequest {
    pub fn new(file_content: impl Into<Vec<u8>>, file_name: impl Into<String>) -> Self {
        Self {
            file_content: file_content.into(),
            file_name: file_name.into(),
            ..Default::default()
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn with_response_format(mut self, format: impl Into<String>) -> Self {
        self.response_format = Some(format.into());
        self
    }
}

/// Transcription result.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TranscriptionResponse {
    #[serde(default)]
    pub task: String,
    #[serde(default)]
    pub language: String,
    /// Audio length in seconds.
    #[serde(default)]
    pub duration: f64,
    #[serde(default)]
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub segments: Option<Vec<TranscriptionSegment>>,
}

/// A timestamped span of transcribed text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TranscriptionSegment {
    #[serde(default)]
    pub id: u32,
    #[serde(default)]
    pub start: f64,
    #[serde(default)]
    pub end: f64,
    #[serde(default)]
    pub text: String,
}
