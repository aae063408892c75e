use super::{FormPart, MultipartBody, PreparedRequest, RawResponse, RequestBody, TransportError};
use crate::config::ClientOptions;
use crate::{Error, Result};
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::debug;
use uuid::Uuid;

/// Correlation id attached to every outgoing request.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    timeout: Duration,
}

impl HttpTransport {
    pub fn new(options: &ClientOptions) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(options.timeout())
            .build()
            .map_err(|e| Error::configuration(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self::with_client(client, options))
    }

    /// Use a caller-provided `reqwest::Client`. The configured timeout is still
    /// applied to each request.
    pub fn with_client(client: reqwest::Client, options: &ClientOptions) -> Self {
        Self {
            client,
            base_url: options.normalized_base_url().to_string(),
            api_key: options.api_key.clone(),
            timeout: options.timeout(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Send `request` and read the whole response body.
    ///
    /// If `cancel` fires before the exchange finishes, the in-flight request is
    /// dropped and `TransportError::Cancelled` is returned.
    pub async fn send(
        &self,
        request: &PreparedRequest,
        cancel: Option<&CancellationToken>,
    ) -> std::result::Result<RawResponse, TransportError> {
        let request_id = Uuid::new_v4().to_string();
        let url = self.url_for(&request.path);

        let mut builder = self
            .client
            .request(request.method.clone(), &url)
            .bearer_auth(&self.api_key)
            .timeout(self.timeout)
            .header(REQUEST_ID_HEADER, &request_id);

        builder = match &request.body {
            RequestBody::Empty => builder,
            RequestBody::Json(body) => builder.json(body),
            RequestBody::Multipart(body) => builder.multipart(to_form(body)?),
        };

        debug!(
            method = %request.method,
            path = %request.path,
            request_id = %request_id,
            "sending request"
        );

        let exchange = async {
            let response = builder.send().await?;
            let status = response.status().as_u16();
            let content_type = response
                .headers()
                .get(CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string);
            let body = response.bytes().await?;
            Ok::<_, TransportError>(RawResponse {
                status,
                body,
                content_type,
            })
        };

        let result = match cancel {
            Some(token) => {
                tokio::select! {
                    biased;
                    _ = token.cancelled() => {
                        debug!(request_id = %request_id, "request cancelled");
                        Err(TransportError::Cancelled)
                    }
                    result = exchange => result,
                }
            }
            None => exchange.await,
        };

        match &result {
            Ok(raw) => debug!(
                request_id = %request_id,
                status = raw.status,
                bytes = raw.body.len(),
                "response received"
            ),
            Err(e) => debug!(request_id = %request_id, error = %e, "transport failure"),
        }
        result
    }
}

fn to_form(body: &MultipartBody) -> std::result::Result<reqwest::multipart::Form, TransportError> {
    let mut form = reqwest::multipart::Form::new();
    for part in &body.parts {
        form = match part {
            FormPart::File {
                name,
                file_name,
                content_type,
                data,
            } => {
                let file = reqwest::multipart::Part::stream_with_length(
                    data.clone(),
                    data.len() as u64,
                )
                    .file_name(file_name.clone())
                    .mime_str(content_type)
                    .map_err(|e| TransportError::Build(format!("Invalid mime: {}", e)))?;
                form.part(name.clone(), file)
            }
            FormPart::Text { name, value } => form.text(name.clone(), value.clone()),
        };
    }
    Ok(form)
}
