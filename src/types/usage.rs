use serde::{Deserialize, Serialize};

/// Token accounting reported by the service.
///
/// `total_tokens` is expected to equal the sum of the other two, but that is
/// the service's convention and is not checked here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Usage {
    #[serde(default)]
    pub prompt_tokens: u32,
    #[serde(default)]
    pub completion_tokens: u32,
    #[serde(default)]
    pub total_tokens: u32,
}
