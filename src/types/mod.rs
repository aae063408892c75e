//! 类型模块：CompactifAI API 的请求/响应数据结构。
//!
//! # Types Module
//!
//! Wire shapes for every endpoint the client talks to. All of them follow the
//! same rules:
//!
//! - field names on the wire are `snake_case`;
//! - unset optional request fields are left out of the body, never sent as `null`;
//! - unknown response fields are ignored and missing scalars take defaults;
//! - array order is kept exactly as sent or received.
//!
//! | Module | Endpoint |
//! |--------|----------|
//! | [`chat`] | `POST chat/completions` |
//! | [`completion`] | `POST completions` |
//! | [`transcription`] | `POST audio/transcriptions` |
//! | [`model`] | `GET models`, `GET models/{id}` |
//!
//! ## Example
//!
//! ```rust
//! use compactifai_rust::types::{ChatRequest, Message, Tool};
//!
//! let request = ChatRequest::new(vec![
//!     Message::system("You are a helpful assistant"),
//!     Message::user("What's the weather?"),
//! ])
//! .with_temperature(0.2)
//! .with_tools(vec![Tool::function(
//!     "get_weather",
//!     Some("Get current weather for a location".to_string()),
//!     Some(serde_json::json!({
//!         "type": "object",
//!         "properties": {"location": {"type": "string"}}
//!     })),
//! )]);
//! assert!(request.model.is_empty());
//! ```

pub mod chat;
pub mod completion;
pub mod message;
pub mod model;
pub mod parameter_count;
pub mod tool;
pub mod transcription;
pub mod usage;

pub use chat::{ChatChoice, ChatRequest, ChatResponse};
pub use completion::{CompletionChoice, CompletionRequest, CompletionResponse};
pub use message::{Message, MessageRole};
pub use model::{ModelCapabilities, ModelInfo, ModelsResponse};
pub use tool::{Tool, ToolFunction};
pub use transcription::{TranscriptionRequest, TranscriptionResponse, TranscriptionSegment};
pub use usage::Usage;
