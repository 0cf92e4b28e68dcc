// VLM chat-completion request/response models

use serde::{Deserialize, Serialize};

/// Returned when a buffered response carries no `choices` entry.
pub const NO_CHOICES_PLACEHOLDER: &str =
    "The response did not contain a description (choices).";

/// Returned when the first choice carries no `message` mapping.
pub const NO_MESSAGE_PLACEHOLDER: &str =
    "The response did not contain a description (message).";

/// Returned when the message carries no usable `content` string.
pub const NO_CONTENT_PLACEHOLDER: &str =
    "The response did not contain a description (content).";

/// Returned when a streamed response produced no content fragments.
pub const EMPTY_STREAM_PLACEHOLDER: &str =
    "No description could be obtained from the streamed response.";

/// Request body for the chat-completion endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub messages: Vec<ChatMessage>,
    pub max_tokens: u32,
    pub temperature: f64,
    pub top_p: f64,
    pub stream: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

/// Buffered (non-streamed) chat-completion response.
///
/// All fields are soft: a missing `choices`, `message` or `content` degrades
/// to a placeholder text rather than a parse failure.
#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    #[serde(default)]
    pub message: Option<ResponseMessage>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ResponseMessage {
    #[serde(default)]
    pub content: Option<String>,

    /// Remaining fields of the message mapping, kept so an empty `{}` can
    /// be told apart from a message that merely lacks `content`.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl ResponseMessage {
    fn is_empty_mapping(&self) -> bool {
        self.content.is_none() && self.extra.is_empty()
    }
}

impl ChatResponse {
    /// Extract the generated description, substituting a fixed placeholder
    /// naming whichever expected field is missing or empty.
    pub fn description(&self) -> String {
        let Some(choice) = self.choices.first() else {
            return NO_CHOICES_PLACEHOLDER.to_string();
        };
        // An absent message and an empty `{}` mapping both name `message`
        // as the missing field.
        let Some(message) = choice.message.as_ref().filter(|m| !m.is_empty_mapping()) else {
            return NO_MESSAGE_PLACEHOLDER.to_string();
        };
        match &message.content {
            Some(content) if !content.trim().is_empty() => content.trim().to_string(),
            _ => NO_CONTENT_PLACEHOLDER.to_string(),
        }
    }
}

/// One JSON chunk of a streamed chat-completion response.
#[derive(Debug, Deserialize)]
pub struct StreamChunk {
    #[serde(default)]
    pub choices: Vec<DeltaChoice>,
}

#[derive(Debug, Deserialize)]
pub struct DeltaChoice {
    #[serde(default)]
    pub delta: Delta,
}

#[derive(Debug, Default, Deserialize)]
pub struct Delta {
    #[serde(default)]
    pub content: Option<String>,
}
