//! 传输层：持有 HTTP 连接配置并执行单次请求。
//!
//! Transport layer.
//!
//! [`HttpTransport`] owns the base URL, bearer credential and timeout, sends a
//! [`PreparedRequest`] and hands back the [`RawResponse`] untouched. Status
//! codes are not interpreted here.

mod http;

pub use http::{HttpTransport, REQUEST_ID_HEADER};

use bytes::Bytes;
use reqwest::Method;

/// A request ready to be sent: method, path relative to the base URL, body.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedRequest {
    pub method: Method,
    pub path: String,
    pub body: RequestBody,
}

impl PreparedRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::GET,
            path: path.into(),
            body: RequestBody::Empty,
        }
    }

    pub fn post_json(path: impl Into<String>, body: serde_json::Value) -> Self {
        Self {
            method: Method::POST,
            path: path.into(),
            body: RequestBody::Json(body),
        }
    }

    pub fn post_multipart(path: impl Into<String>, body: MultipartBody) -> Self {
        Self {
            method: Method::POST,
            path: path.into(),
            body: RequestBody::Multipart(body),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Empty,
    Json(serde_json::Value),
    Multipart(MultipartBody),
}

/// Ordered description of a multipart form.
///
/// Kept as plain data so it can be inspected before it becomes a
/// `reqwest::multipart::Form`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MultipartBody {
    pub parts: Vec<FormPart>,
}

impl MultipartBody {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn file(
        mut self,
        name: impl Into<String>,
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        data: impl Into<Bytes>,
    ) -> Self {
        self.parts.push(FormPart::File {
            name: name.into(),
            file_name: file_name.into(),
            content_type: content_type.into(),
            data: data.into(),
        });
        self
    }

    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parts.push(FormPart::Text {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    pub fn part(&self, name: &str) -> Option<&FormPart> {
        self.parts.iter().find(|p| p.name() == name)
    }

    /// Value of a text part.
    pub fn text_value(&self, name: &str) -> Option<&str> {
        match self.part(name)? {
            FormPart::Text { value, .. } => Some(value),
            FormPart::File { .. } => None,
        }
    }

    pub fn names(&self) -> Vec<&str> {
        self.parts.iter().map(FormPart::name).collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormPart {
    File {
        name: String,
        file_name: String,
        content_type: String,
        /// Shared with every clone; sending never copies the upload.
        data: Bytes,
    },
    Text {
        name: String,
        value: String,
    },
}

impl FormPart {
    pub fn name(&self) -> &str {
        match self {
            FormPart::File { name, .. } | FormPart::Text { name, .. } => name,
        }
    }
}

/// What came back over the wire, uninterpreted.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: Bytes,
    pub content_type: Option<String>,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Failures where no usable response exists.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("request timed out: {0}")]
    Timeout(#[source] reqwest::Error),

    #[error("connection failed: {0}")]
    Connect(#[source] reqwest::Error),

    #[error("request cancelled")]
    Cancelled,

    #[error("HTTP error: {0}")]
    Http(#[source] reqwest::Error),

    #[error("failed to build request: {0}")]
    Build(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            TransportError::Timeout(e)
        } else if e.is_connect() {
            TransportError::Connect(e)
        } else {
            TransportError::Http(e)
        }
    }
}
