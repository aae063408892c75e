//! Request building: typed request + defaults → [`PreparedRequest`].
//!
//! Everything here is a pure function of its inputs; no I/O happens until the
//! prepared request reaches the transport.

use crate::config::ClientOptions;
use crate::transport::{MultipartBody, PreparedRequest};
use crate::types::{ChatRequest, CompletionRequest, TranscriptionRequest};
use crate::Result;

pub const CHAT_COMPLETIONS_PATH: &str = "chat/completions";
pub const COMPLETIONS_PATH: &str = "completions";
pub const TRANSCRIPTIONS_PATH: &str = "audio/transcriptions";
pub const MODELS_PATH: &str = "models";

pub const OCTET_STREAM: &str = "application/octet-stream";

/// Defaults applied while building requests, fixed at client construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDefaults {
    pub default_model: String,
    pub transcription_model: String,
}

impl From<&ClientOptions> for RequestDefaults {
    fn from(options: &ClientOptions) -> Self {
        Self {
            default_model: options.default_model.clone(),
            transcription_model: options.transcription_model.clone(),
        }
    }
}

fn model_or_default(model: String, fallback: &str) -> String {
    if model.is_empty() {
        fallback.to_string()
    } else {
        model
    }
}

pub fn build_chat(mut request: ChatRequest, defaults: &RequestDefaults) -> Result<PreparedRequest> {
    request.model = model_or_default(request.model, &defaults.default_model);
    let body = serde_json::to_value(&request)?;
    Ok(PreparedRequest::post_json(CHAT_COMPLETIONS_PATH, body))
}

pub fn build_completion(
    mut request: CompletionRequest,
    defaults: &RequestDefaults,
) -> Result<PreparedRequest> {
    request.model = model_or_default(request.model, &defaults.default_model);
    let body = serde_json::to_value(&request)?;
    Ok(PreparedRequest::post_json(COMPLETIONS_PATH, body))
}

/// Multipart upload: the `file` part first, then `model`, then whichever
/// optional fields are set and non-empty.
pub fn build_transcription(
    request: TranscriptionRequest,
    defaults: &RequestDefaults,
) -> PreparedRequest {
    let TranscriptionRequest {
        file_content,
        file_name,
        model,
        prompt,
        temperature,
        language,
        response_format,
    } = request;

    let content_type = mime_type_for(&file_name);
    let model = model_or_default(model, &defaults.transcription_model);
    let mut form = MultipartBody::new()
        .file("file", file_name, content_type, file_content)
        .text("model", model);

    if let Some(prompt) = prompt.filter(|s| !s.is_empty()) {
        form = form.text("prompt", prompt);
    }
    if let Some(temp) = temperature {
        form = form.text("temperature", temp.to_string());
    }
    if let Some(lang) = language.filter(|s| !s.is_empty()) {
        form = form.text("language", lang);
    }
    if let Some(rf) = response_format.filter(|s| !s.is_empty()) {
        form = form.text("response_format", rf);
    }

    PreparedRequest::post_multipart(TRANSCRIPTIONS_PATH, form)
}

pub fn build_list_models() -> PreparedRequest {
    PreparedRequest::get(MODELS_PATH)
}

/// The id is interpolated verbatim; the service rejects malformed ids.
pub fn build_get_model(model_id: &str) -> PreparedRequest {
    PreparedRequest::get(format!("{}/{}", MODELS_PATH, model_id))
}

/// Content type for an audio upload, from the file name's extension.
pub fn mime_type_for(file_name: &str) -> &'static str {
    let ext = std::path::Path::new(file_name)
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase();
    match ext.as_str() {
        "mp3" => "audio/mpeg",
        "mp4" | "m4a" => "audio/mp4",
        "wav" => "audio/wav",
        "webm" => "audio/webm",
        "ogg" => "audio/ogg",
        "flac" => "audio/flac",
        _ => OCTET_STREAM,
    }
}
