// Error types for the img2text plugin

use thiserror::Error;

/// Maximum number of characters of an upstream response body included in a
/// status-error message.
pub const STATUS_BODY_EXCERPT_CHARS: usize = 200;

#[derive(Error, Debug)]
pub enum ViewError {
    #[error("invalid image data: {0}")]
    InvalidImage(String),

    #[error("network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

impl From<reqwest::Error> for ViewError {
    fn from(err: reqwest::Error) -> Self {
        ViewError::Network(err.to_string())
    }
}

impl From<config::ConfigError> for ViewError {
    fn from(err: config::ConfigError) -> Self {
        ViewError::Config(err.to_string())
    }
}

impl ViewError {
    /// Build a status error, truncating the response body excerpt.
    pub fn status(status: u16, body: &str) -> Self {
        ViewError::Status {
            status,
            body: body.chars().take(STATUS_BODY_EXCERPT_CHARS).collect(),
        }
    }

    /// Render the error as the text returned to the calling agent.
    ///
    /// The sandbox that invokes the plugin consumes a plain text channel, so
    /// every failure kind becomes a descriptive string at the call boundary.
    pub fn to_user_text(&self) -> String {
        match self {
            ViewError::InvalidImage(msg) => format!("Invalid image format: {}", msg),
            ViewError::Network(msg) => format!("Network error: {}", msg),
            ViewError::Status { status, body } => format!("HTTP error {}: {}", status, body),
            ViewError::Config(msg) => format!("Configuration error: {}", msg),
            other => format!("Unexpected error: {}", other),
        }
    }
}

pub type Result<T> = std::result::Result<T, ViewError>;
