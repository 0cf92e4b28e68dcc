//! Configuration data structures for the img2text plugin.
//!
//! This module defines the schema for the plugin settings: the upstream VLM
//! endpoint, sampling parameters, and logging output.

use serde::{Deserialize, Serialize};

/// The root configuration object for the plugin.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Upstream VLM API settings.
    #[serde(default)]
    pub vlm: VlmConfig,

    /// Logging and observability settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Settings for the upstream Vision-Language-Model API.
///
/// Read-only per invocation; nothing mutates the configuration during a call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VlmConfig {
    /// Base URL of the VLM API, without the model path.
    /// Default: NVIDIA's hosted VLM base.
    #[serde(default = "default_invoke_url")]
    pub invoke_url: String,

    /// Model identifier appended to the base URL, e.g. `nvidia/neva-22b`,
    /// `google/paligemma` or `adept/fuyu-8b`.
    /// Default: `nvidia/neva-22b`
    #[serde(default = "default_model")]
    pub model: String,

    /// Bearer token required when calling the API outside NGC.
    /// When empty, no `Authorization` header is sent.
    /// Default: empty
    #[serde(default)]
    pub api_key: String,

    /// Prompt prefix sent to the model; the image tag is appended after it.
    /// Default: `Describe the image. `
    #[serde(default = "default_prompt")]
    pub prompt: String,

    /// Maximum number of tokens the model may generate.
    /// Default: `512`
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Sampling temperature.
    /// Default: `1.0`
    #[serde(default = "default_temperature")]
    pub temperature: f64,

    /// Nucleus-sampling (top-p) threshold.
    /// Default: `0.70`
    #[serde(default = "default_top_p")]
    pub top_p: f64,

    /// Whether to request a streamed (SSE) response. Streamed content is
    /// accumulated line by line before being returned.
    /// Default: `false`
    #[serde(default)]
    pub stream: bool,

    /// Optional cap on the decoded image payload size, in bytes.
    /// When unset, payloads of any size are forwarded upstream.
    /// Default: unset
    #[serde(default)]
    pub max_image_bytes: Option<usize>,
}

/// Settings for plugin logging output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Minimum log level (`trace`, `debug`, `info`, `warn`, `error`).
    /// Default: `info`
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format for logs (`pretty`, `json`).
    /// Default: `pretty`
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for VlmConfig {
    fn default() -> Self {
        Self {
            invoke_url: default_invoke_url(),
            model: default_model(),
            api_key: String::new(),
            prompt: default_prompt(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
            top_p: default_top_p(),
            stream: false,
            max_image_bytes: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

// Helper functions for serde defaults

fn default_invoke_url() -> String {
    "https://ai.api.nvidia.com/v1/vlm".to_string()
}

fn default_model() -> String {
    "nvidia/neva-22b".to_string()
}

fn default_prompt() -> String {
    "Describe the image. ".to_string()
}

fn default_max_tokens() -> u32 {
    512
}

fn default_temperature() -> f64 {
    1.0
}

fn default_top_p() -> f64 {
    0.70
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}
