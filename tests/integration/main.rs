//! Integration tests against a mock HTTP server.

mod completion;
mod error_handling;
mod transcription;
