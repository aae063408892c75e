//! Client configuration.
//!
//! [`ClientOptions`] is plain data: fill it through the builder, from the
//! environment, or by deserializing it from whatever configuration source the
//! application already has. It is validated once when the client is built and
//! never changes afterwards.

use crate::catalog;
use crate::{Error, ErrorContext, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.compactif.ai/v1";
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Configuration section name used when binding from a larger document.
pub const SECTION_NAME: &str = "CompactifAI";

pub const ENV_API_KEY: &str = "COMPACTIFAI_API_KEY";
pub const ENV_BASE_URL: &str = "COMPACTIFAI_BASE_URL";
pub const ENV_DEFAULT_MODEL: &str = "COMPACTIFAI_DEFAULT_MODEL";
pub const ENV_TIMEOUT_SECS: &str = "COMPACTIFAI_TIMEOUT_SECS";

/// What the convenience shorthands return when a successful response carries
/// no choices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyChoicesPolicy {
    /// Return an empty string.
    #[default]
    EmptyString,
    /// Fail with a decode error.
    Error,
}

#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientOptions {
    #[serde(alias = "ApiKey")]
    pub api_key: String,
    #[serde(alias = "BaseUrl")]
    pub base_url: String,
    /// Substituted into chat/completion requests whose model is empty.
    #[serde(alias = "DefaultModel")]
    pub default_model: String,
    /// Used for transcription requests whose model is empty.
    #[serde(alias = "TranscriptionModel")]
    pub transcription_model: String,
    #[serde(alias = "TimeoutSeconds")]
    pub timeout_secs: u64,
    #[serde(alias = "EmptyChoices")]
    pub empty_choices: EmptyChoicesPolicy,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            default_model: catalog::LLAMA_3_1_8B_SLIM.to_string(),
            transcription_model: catalog::WHISPER_LARGE_V3.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            empty_choices: EmptyChoicesPolicy::default(),
        }
    }
}

impl fmt::Debug for ClientOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientOptions")
            .field("api_key", &if self.api_key.is_empty() { "" } else { "***" })
            .field("base_url", &self.base_url)
            .field("default_model", &self.default_model)
            .field("transcription_model", &self.transcription_model)
            .field("timeout_secs", &self.timeout_secs)
            .field("empty_choices", &self.empty_choices)
            .finish()
    }
}

impl ClientOptions {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Default::default()
        }
    }

    /// Options from `COMPACTIFAI_*` environment variables, defaults elsewhere.
    ///
    /// Unparsable numeric values fall back to the default rather than failing.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut options = Self::default();
        if let Some(key) = lookup(ENV_API_KEY) {
            options.api_key = key;
        }
        if let Some(url) = lookup(ENV_BASE_URL).filter(|s| !s.trim().is_empty()) {
            options.base_url = url;
        }
        if let Some(model) = lookup(ENV_DEFAULT_MODEL).filter(|s| !s.trim().is_empty()) {
            options.default_model = model;
        }
        if let Some(secs) = lookup(ENV_TIMEOUT_SECS).and_then(|s| s.trim().parse::<u64>().ok()) {
            options.timeout_secs = secs;
        }
        options
    }

    /// Bind the `CompactifAI` section of a YAML document.
    ///
    /// A document without that section yields the defaults.
    pub fn from_yaml_section(yaml: &str) -> Result<Self> {
        let doc: serde_yaml::Value = serde_yaml::from_str(yaml).map_err(|e| {
            Error::configuration_with_context(
                format!("Invalid YAML: {}", e),
                ErrorContext::new().with_source("yaml"),
            )
        })?;
        let section = match doc.get(SECTION_NAME) {
            Some(section) if !section.is_null() => section.clone(),
            _ => return Ok(Self::default()),
        };
        serde_yaml::from_value(section).map_err(|e| {
            Error::configuration_with_context(
                format!("Invalid {} section: {}", SECTION_NAME, e),
                ErrorContext::new()
                    .with_field_path(SECTION_NAME)
                    .with_source("yaml"),
            )
        })
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Base URL without trailing slashes.
    pub fn normalized_base_url(&self) -> &str {
        self.base_url.trim().trim_end_matches('/')
    }

    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(Error::configuration_with_context(
                "API key required",
                ErrorContext::new()
                    .with_field_path("api_key")
                    .with_details(format!("set it explicitly or via {}", ENV_API_KEY)),
            ));
        }

        let base = self.normalized_base_url();
        let parsed = url::Url::parse(base).map_err(|e| {
            Error::configuration_with_context(
                "Invalid base URL",
                ErrorContext::new()
                    .with_field_path("base_url")
                    .with_details(format!("{}: {}", base, e)),
            )
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::configuration_with_context(
                "Base URL must use http or https",
                ErrorContext::new()
                    .with_field_path("base_url")
                    .with_details(base.to_string()),
            ));
        }

        if self.timeout_secs == 0 {
            return Err(Error::configuration_with_context(
                "Timeout must be at least one second",
                ErrorContext::new().with_field_path("timeout_secs"),
            ));
        }

        if self.default_model.trim().is_empty() {
            return Err(Error::configuration_with_context(
                "Default model must not be empty",
                ErrorContext::new().with_field_path("default_model"),
            ));
        }

        if self.transcription_model.trim().is_empty() {
            return Err(Error::configuration_with_context(
                "Transcription model must not be empty",
                ErrorContext::new().with_field_path("transcription_model"),
            ));
        }

        Ok(())
    }
}
