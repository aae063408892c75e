use crate::transport::TransportError;
use thiserror::Error;

/// Structured error context for configuration and validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorContext {
    /// Option key that caused the error (e.g., "base_url", "timeout_secs")
    pub field_path: Option<String>,
    /// Additional context about the error (e.g., the rejected value)
    pub details: Option<String>,
    /// Source of the error (e.g., "options", "env")
    pub source: Option<String>,
}

impl ErrorContext {
    pub fn new() -> Self {
        Self {
            field_path: None,
            details: None,
            source: None,
        }
    }

    pub fn with_field_path(mut self, path: impl Into<String>) -> Self {
        self.field_path = Some(path.into());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Discriminates the two failure origins an [`ApiError`] can describe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiErrorKind {
    /// The service answered with a non-2xx status.
    Service,
    /// The service answered 2xx but the body could not be decoded.
    Decode,
}

/// Error reported by (or about) a response the service actually sent.
///
/// Only the response resolver builds these. A service error always carries the
/// status code and the raw body verbatim; a decode error carries neither status
/// semantics nor a guaranteed body.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ApiError {
    kind: ApiErrorKind,
    status: Option<u16>,
    body: Option<String>,
    message: String,
}

impl ApiError {
    pub(crate) fn service(status: u16, body: impl Into<String>) -> Self {
        let body = body.into();
        Self {
            kind: ApiErrorKind::Service,
            status: Some(status),
            message: format!("API request failed with status {}: {}", status, body),
            body: Some(body),
        }
    }

    pub(crate) fn decode(details: impl Into<String>, body: Option<String>) -> Self {
        let details = details.into();
        let message = if details.is_empty() {
            "Failed to deserialize API response".to_string()
        } else {
            format!("Failed to deserialize API response: {}", details)
        };
        Self {
            kind: ApiErrorKind::Decode,
            status: None,
            body,
            message,
        }
    }

    pub fn kind(&self) -> ApiErrorKind {
        self.kind
    }

    /// HTTP status reported by the service; `None` for decode failures.
    pub fn status(&self) -> Option<u16> {
        self.status
    }

    /// Raw response body as received.
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_service_error(&self) -> bool {
        self.kind == ApiErrorKind::Service
    }

    pub fn is_decode_error(&self) -> bool {
        self.kind == ApiErrorKind::Decode
    }
}

/// Unified error type for the client.
///
/// `Api` means the service was reached and its answer was unusable; `Transport`
/// means no response exists at all (connection, timeout, cancellation).
#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    Api(#[from] ApiError),

    #[error("Network transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("Configuration error: {message}{}", format_context(.context))]
    Configuration {
        message: String,
        context: ErrorContext,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

fn format_context(ctx: &ErrorContext) -> String {
    let mut parts = Vec::new();
    if let Some(ref field) = ctx.field_path {
        parts.push(format!("field: {}", field));
    }
    if let Some(ref details) = ctx.details {
        parts.push(format!("details: {}", details));
    }
    if let Some(ref source) = ctx.source {
        parts.push(format!("source: {}", source));
    }
    if parts.is_empty() {
        String::new()
    } else {
        format!(" ({})", parts.join(", "))
    }
}

impl Error {
    pub fn configuration(msg: impl Into<String>) -> Self {
        Error::Configuration {
            message: msg.into(),
            context: ErrorContext::new(),
        }
    }

    pub fn configuration_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Configuration {
            message: msg.into(),
            context,
        }
    }

    /// The structured API error, if this failure came from a service response.
    pub fn as_api(&self) -> Option<&ApiError> {
        match self {
            Error::Api(e) => Some(e),
            _ => None,
        }
    }

    /// Status code of a service-reported failure.
    pub fn status(&self) -> Option<u16> {
        self.as_api().and_then(ApiError::status)
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Error::Transport(TransportError::Cancelled))
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Transport(TransportError::Timeout(_)))
    }

    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            Error::Configuration { context, .. } => Some(context),
            _ => None,
        }
    }
}
