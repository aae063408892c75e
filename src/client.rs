//! CompactifAI client.
//!
//! The public surface is [`CompactifAiClient`] and its builder. Each call is a
//! straight pipeline: [`request`] builds the HTTP request, the transport sends
//! it, and [`response`] decodes the answer or turns it into an error.

pub mod api;
pub mod builder;
pub mod core;
pub mod request;
pub mod response;

pub use api::CompactifAiApi;
pub use builder::CompactifAiClientBuilder;
pub use core::CompactifAiClient;
pub use request::{mime_type_for, RequestDefaults};
