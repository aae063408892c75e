//! Object-safe view of the client for dependency injection.

use crate::client::core::CompactifAiClient;
use crate::types::{
    ChatRequest, ChatResponse, CompletionRequest, CompletionResponse, ModelInfo, ModelsResponse,
    TranscriptionRequest, TranscriptionResponse,
};
use crate::Result;
use async_trait::async_trait;
use std::path::Path;

/// Operations offered by the CompactifAI API.
///
/// Application code can hold an `Arc<dyn CompactifAiApi>` and swap in a fake
/// for tests; [`CompactifAiClient`] is the HTTP implementation.
#[async_trait]
pub trait CompactifAiApi: Send + Sync {
    async fn create_chat_completion(&self, request: ChatRequest) -> Result<ChatResponse>;

    async fn chat(
        &self,
        message: &str,
        model: Option<&str>,
        system_prompt: Option<&str>,
    ) -> Result<String>;

    async fn create_completion(&self, request: CompletionRequest) -> Result<CompletionResponse>;

    async fn complete(
        &self,
        prompt: &str,
        model: Option<&str>,
        max_tokens: Option<u32>,
    ) -> Result<String>;

    async fn transcribe(&self, request: TranscriptionRequest) -> Result<TranscriptionResponse>;

    async fn transcribe_file(&self, path: &Path, language: Option<&str>) -> Result<String>;

    async fn list_models(&self) -> Result<ModelsResponse>;

    async fn get_model(&self, model_id: &str) -> Result<ModelInfo>;
}

#[async_trait]
impl CompactifAiApi for CompactifAiClient {
    async fn create_chat_completion(&self, request: ChatRequest) -> Result<ChatResponse> {
        CompactifAiClient::create_chat_completion(self, request).await
    }

    async fn chat(
        &self,
        message: &str,
        model: Option<&str>,
        system_prompt: Option<&str>,
    ) -> Result<String> {
        CompactifAiClient::chat(self, message, model, system_prompt).await
    }

    async fn create_completion(&self, request: CompletionRequest) -> Result<CompletionResponse> {
        CompactifAiClient::create_completion(self, request).await
    }

    async fn complete(
        &self,
        prompt: &str,
        model: Option<&str>,
        max_tokens: Option<u32>,
    ) -> Result<String> {
        CompactifAiClient::complete(self, prompt, model, max_tokens).await
    }

    async fn transcribe(&self, request: TranscriptionRequest) -> Result<TranscriptionResponse> {
        CompactifAiClient::transcribe(self, request).await
    }

    async fn transcribe_file(&self, path: &Path, language: Option<&str>) -> Result<String> {
        CompactifAiClient::transcribe_file(self, path, language).await
    }

    async fn list_models(&self) -> Result<ModelsResponse> {
        CompactifAiClient::list_models(self).await
    }

    async fn get_model(&self, model_id: &str) -> Result<ModelInfo> {
        CompactifAiClient::get_model(self, model_id).await
    }
}
