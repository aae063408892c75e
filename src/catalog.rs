//! Model identifiers published by the CompactifAI service.
//!
//! `*_SLIM` ids are the compressed variants; the rest are the original models.

/// DeepSeek R1 0528 Slim, for complex reasoning tasks.
pub const DEEPSEEK_R1_SLIM: &str = "cai-deepseek-r1-0528-slim";
/// Llama 4 Scout Slim, for long context tasks.
pub const LLAMA_4_SCOUT_SLIM: &str = "cai-llama-4-scout-slim";
pub const LLAMA_4_SCOUT: &str = "llama-4-scout";
pub const LLAMA_3_3_70B_SLIM: &str = "cai-llama-3-3-70b-slim";
pub const LLAMA_3_3_70B: &str = "llama-3-3-70b";
/// Llama 3.1 8B Slim, low latency general purpose. Default chat model.
pub const LLAMA_3_1_8B_SLIM: &str = "cai-llama-3-1-8b-slim";
pub const LLAMA_3_1_8B_SLIM_R: &str = "cai-llama-3-1-8b-slim-r";
pub const LLAMA_3_1_8B: &str = "llama-3-1-8b";
pub const MISTRAL_SMALL_3_1_SLIM: &str = "cai-mistral-small-3-1-slim";
pub const MISTRAL_SMALL_3_1: &str = "mistral-small-3-1";
pub const GPT_OSS_20B: &str = "gpt-oss-20b";
pub const GPT_OSS_120B: &str = "gpt-oss-120b";
/// Whisper Large V3, multilingual speech-to-text. Default transcription model.
pub const WHISPER_LARGE_V3: &str = "whisper-large-v3";

/// Every known id, chat/completion models first.
pub const ALL: &[&str] = &[
    DEEPSEEK_R1_SLIM,
    LLAMA_4_SCOUT_SLIM,
    LLAMA_4_SCOUT,
    LLAMA_3_3_70B_SLIM,
    LLAMA_3_3_70B,
    LLAMA_3_1_8B_SLIM,
    LLAMA_3_1_8B_SLIM_R,
    LLAMA_3_1_8B,
    MISTRAL_SMALL_3_1_SLIM,
    MISTRAL_SMALL_3_1,
    GPT_OSS_20B,
    GPT_OSS_120B,
    WHISPER_LARGE_V3,
];
