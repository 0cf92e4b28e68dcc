// VLM API client

use crate::config::VlmConfig;
use crate::error::{Result, ViewError};
use crate::vlm::models::{ChatMessage, ChatRequest, ChatResponse};
use crate::vlm::{streaming, validate};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, error};

/// Fixed timeout for one round trip to the VLM API.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Client for the upstream VLM chat-completion endpoint.
///
/// Holds the immutable per-invocation configuration; the network client
/// itself is scoped to a single call and released on every exit path.
pub struct VlmClient {
    config: VlmConfig,
}

impl VlmClient {
    pub fn new(config: VlmConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &VlmConfig {
        &self.config
    }

    /// Target URL: the configured base joined with the model path, with
    /// redundant separators trimmed.
    pub fn request_url(&self) -> String {
        format!(
            "{}/{}",
            self.config.invoke_url.trim_end_matches('/'),
            self.config.model.trim_start_matches('/')
        )
    }

    /// Prompt sent to the model: the configured prefix followed by an inline
    /// image tag referencing the data URL.
    pub fn build_prompt(&self, image_data: &str) -> String {
        format!("{}<img src=\"{}\" />", self.config.prompt, image_data)
    }

    /// Request body for one call. Sampling parameters are passed through
    /// unchecked; the remote service is the arbiter of acceptable values.
    pub fn build_payload(&self, image_data: &str) -> ChatRequest {
        ChatRequest {
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: self.build_prompt(image_data),
            }],
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
            top_p: self.config.top_p,
            stream: self.config.stream,
        }
    }

    fn http_client(&self) -> Result<Client> {
        Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ViewError::Internal(format!("failed to create HTTP client: {}", e)))
    }

    /// Request a description for a validated-or-rejected image data URL.
    ///
    /// The response is consumed in the mode selected by the `stream` config
    /// flag, never sniffed from the actual response shape.
    pub async fn describe(&self, image_data: &str) -> Result<String> {
        validate::validate_image_data_url(image_data, self.config.max_image_bytes)?;

        let url = self.request_url();
        let payload = self.build_payload(image_data);
        let accept = if self.config.stream {
            "text/event-stream"
        } else {
            "application/json"
        };

        debug!("requesting image description from {}", url);

        let client = self.http_client()?;
        let mut request = client.post(&url).header("Accept", accept).json(&payload);
        if !self.config.api_key.is_empty() {
            request = request.header("Authorization", format!("Bearer {}", self.config.api_key));
        }

        let response = request.send().await.map_err(|e| {
            error!("request to VLM API failed: {}", e);
            ViewError::Network(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(
                "VLM API returned HTTP {}: {}",
                status,
                body.chars().take(200).collect::<String>()
            );
            return Err(ViewError::status(status.as_u16(), &body));
        }

        if self.config.stream {
            streaming::collect_stream_description(response.bytes_stream()).await
        } else {
            let body = response
                .text()
                .await
                .map_err(|e| ViewError::Network(format!("failed to read response body: {}", e)))?;
            let parsed: ChatResponse = serde_json::from_str(&body)?;
            Ok(parsed.description())
        }
    }
}
