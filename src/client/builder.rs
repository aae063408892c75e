use crate::client::core::CompactifAiClient;
use crate::config::{ClientOptions, EmptyChoicesPolicy, ENV_API_KEY};
use crate::transport::HttpTransport;
use crate::Result;

/// Builder for [`CompactifAiClient`].
///
/// Starts from [`ClientOptions::default`]. If no API key is given, the
/// `COMPACTIFAI_API_KEY` environment variable is used.
pub struct CompactifAiClientBuilder {
    options: ClientOptions,
    http_client: Option<reqwest::Client>,
}

impl CompactifAiClientBuilder {
    pub fn new() -> Self {
        Self {
            options: ClientOptions::default(),
            http_client: None,
        }
    }

    /// Replace all options at once.
    pub fn options(mut self, options: ClientOptions) -> Self {
        self.options = options;
        self
    }

    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.options.api_key = api_key.into();
        self
    }

    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.options.base_url = url.into();
        self
    }

    pub fn default_model(mut self, model: impl Into<String>) -> Self {
        self.options.default_model = model.into();
        self
    }

    pub fn transcription_model(mut self, model: impl Into<String>) -> Self {
        self.options.transcription_model = model.into();
        self
    }

    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.options.timeout_secs = secs;
        self
    }

    pub fn empty_choices(mut self, policy: EmptyChoicesPolicy) -> Self {
        self.options.empty_choices = policy;
        self
    }

    /// Share an existing `reqwest::Client` (and its connection pool).
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    pub fn build(self) -> Result<CompactifAiClient> {
        let mut options = self.options;
        if options.api_key.trim().is_empty() {
            if let Ok(key) = std::env::var(ENV_API_KEY) {
                options.api_key = key;
            }
        }
        options.validate()?;

        let transport = match self.http_client {
            Some(client) => HttpTransport::with_client(client, &options),
            None => HttpTransport::new(&options)?,
        };
        Ok(CompactifAiClient::from_parts(options, transport))
    }
}

impl Default for CompactifAiClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
