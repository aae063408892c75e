//! # compactifai-rust
//!
//! CompactifAI 推理 API 的类型化 Rust 客户端。
//!
//! Typed async client for the CompactifAI inference API: chat completions,
//! text completions, audio transcription and model discovery.
//!
//! ## Overview
//!
//! Every call follows the same path: a typed request is turned into an HTTP
//! request (default model filled in, unset fields left out), sent with the
//! configured credential and timeout, and the response is either decoded into a
//! typed value or turned into an [`Error`] that keeps the HTTP status and the
//! raw body.
//!
//! ## Key Features
//!
//! - **One client, four endpoints**: [`CompactifAiClient`] covers chat,
//!   completion, transcription and model listing
//! - **Convenience calls**: [`CompactifAiClient::chat`] and
//!   [`CompactifAiClient::complete`] return just the generated text
//! - **Typed errors**: service failures keep status and body, malformed bodies
//!   are reported separately from transport failures
//! - **Cancellation**: attach a [`CancellationToken`] with
//!   [`CompactifAiClient::with_cancellation`]
//! - **Configuration**: builder, environment variables or a YAML section via
//!   [`ClientOptions`]
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use compactifai_rust::{catalog, CompactifAiClient, ChatRequest, Message};
//!
//! #[tokio::main]
//! async fn main() -> compactifai_rust::Result<()> {
//!     let client = CompactifAiClient::builder()
//!         .api_key("your-api-key")
//!         .default_model(catalog::LLAMA_3_3_70B_SLIM)
//!         .build()?;
//!
//!     let answer = client.chat("Hello, how are you?", None, None).await?;
//!     println!("{}", answer);
//!
//!     let request = ChatRequest::new(vec![
//!         Message::system("Answer in one sentence."),
//!         Message::user("What is model compression?"),
//!     ])
//!     .with_max_tokens(64);
//!     let response = client.create_chat_completion(request).await?;
//!     println!("{:?}", response.first_content());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | Client facade, builder, request building and response resolution |
//! | [`types`] | Request/response wire types |
//! | [`transport`] | HTTP transport and cancellation |
//! | [`config`] | Client options, environment and YAML loading |
//! | [`catalog`] | Known model identifiers |
//! | [`error`] | Error types |

pub mod catalog;
pub mod client;
pub mod config;
pub mod transport;
pub mod types;

// Re-export main types for convenience
pub use client::{CompactifAiApi, CompactifAiClient, CompactifAiClientBuilder};
pub use config::{ClientOptions, EmptyChoicesPolicy};
pub use tokio_util::sync::CancellationToken;
pub use types::{
    ChatChoice, ChatRequest, ChatResponse, CompletionChoice, CompletionRequest,
    CompletionResponse, Message, MessageRole, ModelCapabilities, ModelInfo, ModelsResponse, Tool,
    ToolFunction, TranscriptionRequest, TranscriptionResponse, TranscriptionSegment, Usage,
};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{ApiError, ApiErrorKind, Error, ErrorContext};
