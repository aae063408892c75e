use crate::client::builder::CompactifAiClientBuilder;
use crate::client::request::{self, RequestDefaults};
use crate::client::response;
use crate::config::{ClientOptions, EmptyChoicesPolicy};
use crate::error::ApiError;
use crate::transport::{HttpTransport, PreparedRequest};
use crate::types::{
    ChatRequest, ChatResponse, CompletionRequest, CompletionResponse, Message, ModelInfo,
    ModelsResponse, TranscriptionRequest, TranscriptionResponse,
};
use crate::Result;
use serde::de::DeserializeOwned;
use std::path::Path;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Client for the CompactifAI API.
///
/// Cheap to clone; clones share one connection configuration, which never
/// changes after construction. Safe to use from many tasks at once.
#[derive(Clone)]
pub struct CompactifAiClient {
    inner: Arc<ClientInner>,
    cancel: Option<CancellationToken>,
}

struct ClientInner {
    options: ClientOptions,
    transport: HttpTransport,
    defaults: RequestDefaults,
}

impl CompactifAiClient {
    pub fn builder() -> CompactifAiClientBuilder {
        CompactifAiClientBuilder::new()
    }

    /// Client with default options and the given API key.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::builder().api_key(api_key).build()
    }

    pub fn from_options(options: ClientOptions) -> Result<Self> {
        Self::builder().options(options).build()
    }

    /// Client configured from `COMPACTIFAI_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_options(ClientOptions::from_env())
    }

    pub(crate) fn from_parts(options: ClientOptions, transport: HttpTransport) -> Self {
        let defaults = RequestDefaults::from(&options);
        Self {
            inner: Arc::new(ClientInner {
                options,
                transport,
                defaults,
            }),
            cancel: None,
        }
    }

    pub fn options(&self) -> &ClientOptions {
        &self.inner.options
    }

    /// A handle whose calls abort promptly once `token` is cancelled.
    ///
    /// The returned client shares this client's configuration; the original is
    /// unaffected.
    pub fn with_cancellation(&self, token: CancellationToken) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            cancel: Some(token),
        }
    }

    async fn execute<T: DeserializeOwned>(&self, prepared: PreparedRequest) -> Result<T> {
        let raw = self
            .inner
            .transport
            .send(&prepared, self.cancel.as_ref())
            .await?;
        Ok(response::resolve(raw)?)
    }

    /// Text of the first choice, or what the empty-choices policy says to do
    /// when there is none. `choices` is how many choices the response held.
    fn text_or_policy(&self, choices: usize, text: Option<&str>) -> Result<String> {
        match (text, self.inner.options.empty_choices) {
            (Some(text), _) => Ok(text.to_string()),
            (None, EmptyChoicesPolicy::EmptyString) => {
                debug!(choices, "response carried no text, returning empty text");
                Ok(String::new())
            }
            (None, EmptyChoicesPolicy::Error) => {
                let details = if choices == 0 {
                    "response contained no choices"
                } else {
                    "first choice contained no message"
                };
                Err(ApiError::decode(details, None).into())
            }
        }
    }

    // Chat completions

    pub async fn create_chat_completion(&self, request: ChatRequest) -> Result<ChatResponse> {
        let prepared = request::build_chat(request, &self.inner.defaults)?;
        self.execute(prepared).await
    }

    /// Send one user message (optionally preceded by a system prompt) and
    /// return the first choice's text.
    pub async fn chat(
        &self,
        message: &str,
        model: Option<&str>,
        system_prompt: Option<&str>,
    ) -> Result<String> {
        let mut messages = Vec::with_capacity(2);
        if let Some(system) = system_prompt.filter(|s| !s.is_empty()) {
            messages.push(Message::system(system));
        }
        messages.push(Message::user(message));

        let request = ChatRequest::new(messages).with_model(model.unwrap_or_default());
        let response = self.create_chat_completion(request).await?;
        self.text_or_policy(response.choices.len(), response.first_content())
    }

    // Text completions

    pub async fn create_completion(&self, request: CompletionRequest) -> Result<CompletionResponse> {
        let prepared = request::build_completion(request, &self.inner.defaults)?;
        self.execute(prepared).await
    }

    pub async fn complete(
        &self,
        prompt: &str,
        model: Option<&str>,
        max_tokens: Option<u32>,
    ) -> Result<String> {
        let mut request = CompletionRequest::new(prompt).with_model(model.unwrap_or_default());
        request.max_tokens = max_tokens;
        let response = self.create_completion(request).await?;
        self.text_or_policy(response.choices.len(), response.first_text())
    }

    // Audio transcription

    pub async fn transcribe(&self, request: TranscriptionRequest) -> Result<TranscriptionResponse> {
        let prepared = request::build_transcription(request, &self.inner.defaults);
        self.execute(prepared).await
    }

    /// Read an audio file and return its transcribed text.
    pub async fn transcribe_file(
        &self,
        path: impl AsRef<Path>,
        language: Option<&str>,
    ) -> Result<String> {
        let path = path.as_ref();
        let file_content = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let mut request = TranscriptionRequest::new(file_content, file_name);
        // empty model: the client's configured transcription model is used
        request.model.clear();
        request.language = language.map(str::to_string);
        let response = self.transcribe(request).await?;
        Ok(response.text)
    }

    // Models

    pub async fn list_models(&self) -> Result<ModelsResponse> {
        self.execute(request::build_list_models()).await
    }

    pub async fn get_model(&self, model_id: &str) -> Result<ModelInfo> {
        self.execute(request::build_get_model(model_id)).await
    }
}

impl std::fmt::Debug for CompactifAiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompactifAiClient")
            .field("options", &self.inner.options)
            .field("cancellable", &self.cancel.is_some())
            .finish()
    }
}
